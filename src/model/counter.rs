//! Animated counters for the overview cards

use std::time::{Duration, Instant};

/// Ease-out-quart progress curve, `t` in [0, 1]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// A value that eases from zero to its target over a fixed duration
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    pub target: f64,
    pub duration: Duration,
    started: Option<Instant>,
}

impl AnimatedCounter {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Jump straight to the final value
    pub fn finish(&mut self) {
        self.started = None;
        self.duration = Duration::ZERO;
    }

    /// Value after `elapsed` time has passed since the start
    pub fn value_after(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.target * ease_out_quart(progress)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        match self.started {
            Some(start) => self.value_after(now.saturating_duration_since(start)),
            None if self.duration.is_zero() => self.target,
            None => 0.0,
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        match self.started {
            Some(start) => now.saturating_duration_since(start) >= self.duration,
            None => self.duration.is_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
    }

    #[test]
    fn test_counter_is_monotonic_and_reaches_target() {
        let counter = AnimatedCounter::new(15420.0, Duration::from_millis(1700));
        let mut last = 0.0;
        for ms in (0..=2000).step_by(100) {
            let v = counter.value_after(Duration::from_millis(ms));
            assert!(v >= last);
            last = v;
        }
        assert_eq!(counter.value_after(Duration::from_millis(1700)), 15420.0);
    }

    #[test]
    fn test_unstarted_counter_reads_zero_until_finished() {
        let mut counter = AnimatedCounter::new(87.5, Duration::from_millis(1500));
        let now = Instant::now();
        assert_eq!(counter.value_at(now), 0.0);
        assert!(!counter.is_complete(now));

        counter.finish();
        assert_eq!(counter.value_at(now), 87.5);
        assert!(counter.is_complete(now));
    }
}
