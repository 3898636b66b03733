/// Parameters of the single dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
    /// Added to every global id before it is stored.
    pub value_offset: i32,
    pub element_count: u32,
    pub workgroup_size: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            value_offset: 10,
            element_count: 1024,
            workgroup_size: 64,
        }
    }
}

impl KernelConfig {
    pub fn output_size_bytes(&self) -> u64 {
        self.element_count as u64 * std::mem::size_of::<i32>() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.value_offset, 10);
        assert_eq!(config.element_count, 1024);
        assert_eq!(config.workgroup_size, 64);
        assert_eq!(config.output_size_bytes(), 4096);
    }
}
