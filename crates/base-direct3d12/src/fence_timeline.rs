//! CPU-side bookkeeping for the frame fence.
//!
//! The GPU fence itself only stores the last value the queue reached. This
//! type hands out the values the CPU asks the queue to signal so that they
//! never repeat or go backwards.

/// Monotonic source of fence values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceTimeline {
    next_value: u64,
    last_signaled: Option<u64>,
}

impl FenceTimeline {
    /// `first_value` must be greater than the value the fence was created
    /// with, otherwise the first wait completes immediately.
    pub const fn new(first_value: u64) -> Self {
        Self {
            next_value: first_value,
            last_signaled: None,
        }
    }

    /// Takes the value to signal after the work just submitted.
    pub fn signal(&mut self) -> u64 {
        let value = self.next_value;
        self.next_value += 1;
        self.last_signaled = Some(value);
        value
    }

    pub fn last_signaled(&self) -> Option<u64> {
        self.last_signaled
    }

    /// Whether a fence reporting `completed_value` has passed `value`.
    pub fn is_reached(value: u64, completed_value: u64) -> bool {
        completed_value >= value
    }
}

impl Default for FenceTimeline {
    /// Fences are created at zero, so the first signal is one.
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_strictly_increase() {
        let mut timeline = FenceTimeline::default();
        let mut previous = 0;
        for _ in 0..16 {
            let value = timeline.signal();
            assert!(value > previous);
            previous = value;
        }
        assert_eq!(previous, 16);
    }

    #[test]
    fn tracks_last_signaled_value() {
        let mut timeline = FenceTimeline::new(123);
        assert_eq!(timeline.last_signaled(), None);
        assert_eq!(timeline.signal(), 123);
        assert_eq!(timeline.signal(), 124);
        assert_eq!(timeline.last_signaled(), Some(124));
    }

    #[test]
    fn waits_only_while_behind() {
        assert!(!FenceTimeline::is_reached(5, 4));
        assert!(FenceTimeline::is_reached(5, 5));
        assert!(FenceTimeline::is_reached(5, 6));
        // A removed device reports u64::MAX; nothing should block on it.
        assert!(FenceTimeline::is_reached(5, u64::MAX));
    }

    #[test]
    fn first_signal_is_ahead_of_a_fresh_fence() {
        let mut timeline = FenceTimeline::default();
        let value = timeline.signal();
        assert!(!FenceTimeline::is_reached(value, 0));
    }
}
