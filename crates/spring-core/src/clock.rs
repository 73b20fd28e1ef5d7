use crate::constants::MAX_FRAME_DELTA_MS;

/// Turns frame timestamps (ms) into deltas. The first observed timestamp
/// yields a delta of zero.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.previous.is_some()
    }

    pub fn delta(&self, timestamp: f64) -> f64 {
        let previous = self.previous.unwrap_or(timestamp);
        let dt = timestamp - previous;
        if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, MAX_FRAME_DELTA_MS)
        }
    }

    pub fn record(&mut self, timestamp: f64) {
        self.previous = Some(timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.delta(1234.5), 0.0);
        clock.record(1234.5);
        assert!(clock.is_running());
        assert_eq!(clock.delta(1250.5), 16.0);
    }

    #[test]
    fn backwards_and_huge_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        clock.record(5000.0);
        assert_eq!(clock.delta(4000.0), 0.0);
        assert_eq!(clock.delta(65_000.0), MAX_FRAME_DELTA_MS);
    }
}
