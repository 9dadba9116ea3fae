use std::time::Duration;

/// Linear interpolation from `from` to `to` over a fixed duration.
///
/// Dropping a tween cancels it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves the tween forward by `dt` and returns the part of `dt` that was
    /// not needed to reach the end.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        let remaining = self.duration.saturating_sub(self.elapsed);
        let used = dt.min(remaining);
        self.elapsed += used;
        dt - used
    }
}
