//! Wall-clock frame delta.

use std::time::Instant;

/// Measures seconds elapsed between successive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous call (or since construction).
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn measures_between_calls() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let dt = clock.tick(t0 + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);
        let dt = clock.tick(t0 + Duration::from_millis(266));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn going_backwards_yields_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.tick(t0 - Duration::from_millis(5)), 0.0);
    }
}
