/// Back buffers in the swap chain, and render target views in the RTV heap.
pub const FRAME_COUNT: usize = 2;

/// Byte offset of a back buffer's RTV from the start of the descriptor heap.
pub fn descriptor_offset(frame_index: u32, descriptor_size: u32) -> usize {
    frame_index as usize * descriptor_size as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_is_heap_start() {
        assert_eq!(descriptor_offset(0, 32), 0);
    }

    #[test]
    fn slots_are_one_increment_apart() {
        let size = 32;
        let offsets: Vec<usize> = (0..FRAME_COUNT as u32)
            .map(|i| descriptor_offset(i, size))
            .collect();
        assert_eq!(offsets, vec![0, 32]);
    }

    #[test]
    fn does_not_overflow_u32_math() {
        assert_eq!(
            descriptor_offset(2, u32::MAX),
            2 * u32::MAX as usize
        );
    }
}
