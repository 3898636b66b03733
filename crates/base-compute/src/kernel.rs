use std::fmt;

use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::kernel_config::KernelConfig;

pub const KERNEL_ENTRY: &str = "write_value";

/// WGSL for the kernel, with `workgroup_size` baked into the entry point.
pub fn kernel_source(workgroup_size: u32) -> String {
    format!(
        r#"
struct Params {{
    offset: i32,
    count: u32,
}}

@group(0) @binding(0) var<uniform> params: Params;
@group(0) @binding(1) var<storage, read_write> output: array<i32>;

@compute @workgroup_size({workgroup_size})
fn {KERNEL_ENTRY}(@builtin(global_invocation_id) global_id: vec3<u32>) {{
    let i = global_id.x;
    if (i < params.count) {{
        output[i] = params.offset + i32(i);
    }}
}}
"#
    )
}

/// Uniform block matching `Params` in the kernel, padded to 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct KernelParams {
    pub offset: i32,
    pub count: u32,
    _padding: [u32; 2],
}

impl KernelParams {
    pub fn new(config: &KernelConfig) -> Self {
        Self {
            offset: config.value_offset,
            count: config.element_count,
            _padding: [0; 2],
        }
    }
}

/// Number of workgroups needed so every element gets an invocation.
pub fn workgroup_count(element_count: u32, workgroup_size: u32) -> u32 {
    element_count.div_ceil(workgroup_size)
}

pub fn expected_output(config: &KernelConfig) -> Vec<i32> {
    (0..config.element_count)
        .map(|i| config.value_offset.wrapping_add(i as i32))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadbackMismatch {
    pub index: usize,
    pub expected: Option<i32>,
    pub actual: Option<i32>,
}

impl fmt::Display for ReadbackMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.actual) {
            (Some(expected), Some(actual)) => write!(
                f,
                "element {} is {}, expected {}",
                self.index, actual, expected
            ),
            (Some(expected), None) => write!(
                f,
                "readback ends at element {}, expected {}",
                self.index, expected
            ),
            (None, Some(actual)) => write!(
                f,
                "unexpected extra element {} with value {}",
                self.index, actual
            ),
            (None, None) => write!(f, "element {} mismatched", self.index),
        }
    }
}

/// Returns the first element of `readback` that differs from what the kernel should have written.
pub fn first_mismatch(config: &KernelConfig, readback: &[i32]) -> Option<ReadbackMismatch> {
    let expected = expected_output(config);
    let len = expected.len().max(readback.len());
    (0..len).find_map(|index| {
        let want = expected.get(index).copied();
        let got = readback.get(index).copied();
        (want != got).then_some(ReadbackMismatch {
            index,
            expected: want,
            actual: got,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workgroups_cover_every_element() {
        assert_eq!(workgroup_count(1024, 64), 16);
        assert_eq!(workgroup_count(1025, 64), 17);
        assert_eq!(workgroup_count(1, 64), 1);
        assert_eq!(workgroup_count(0, 64), 0);
    }

    #[test]
    fn expected_sequence_starts_at_offset() {
        let config = KernelConfig::default();
        let expected = expected_output(&config);
        assert_eq!(expected.len(), 1024);
        assert_eq!(expected[0], 10);
        assert_eq!(expected[1], 11);
        assert_eq!(expected[1023], 1033);
    }

    #[test]
    fn correct_readback_has_no_mismatch() {
        let config = KernelConfig::default();
        assert_eq!(first_mismatch(&config, &expected_output(&config)), None);
    }

    #[test]
    fn reports_first_wrong_element() {
        let config = KernelConfig::default();
        let mut readback = expected_output(&config);
        readback[5] = 0;
        readback[700] = 0;
        let mismatch = first_mismatch(&config, &readback).unwrap();
        assert_eq!(mismatch.index, 5);
        assert_eq!(mismatch.expected, Some(15));
        assert_eq!(mismatch.actual, Some(0));
        assert_eq!(mismatch.to_string(), "element 5 is 0, expected 15");
    }

    #[test]
    fn short_readback_is_a_mismatch() {
        let config = KernelConfig::default();
        let mut readback = expected_output(&config);
        readback.truncate(1000);
        let mismatch = first_mismatch(&config, &readback).unwrap();
        assert_eq!(mismatch.index, 1000);
        assert_eq!(mismatch.actual, None);
    }

    #[test]
    fn params_are_sixteen_bytes() {
        let params = KernelParams::new(&KernelConfig::default());
        assert_eq!(std::mem::size_of::<KernelParams>(), 16);
        let words: &[u32] = bytemuck::cast_slice(std::slice::from_ref(&params));
        assert_eq!(words, &[10, 1024, 0, 0]);
    }

    #[test]
    fn source_names_the_entry_point() {
        let source = kernel_source(64);
        assert!(source.contains("@workgroup_size(64)"));
        assert!(source.contains(&format!("fn {KERNEL_ENTRY}(")));
    }
}
