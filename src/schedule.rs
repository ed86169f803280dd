use std::time::{Duration, Instant};

/// Fixed-period trigger polled by the front-end loop.
///
/// The game tick and the apple refresh each get one of these; the refresh
/// schedule is restarted whenever an apple is eaten.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period: Duration,
    last_fired: Instant,
}

impl Periodic {
    #[must_use]
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last_fired: now,
        }
    }

    /// Returns true and re-arms when a full period has passed since the last
    /// firing. Missed periods are not replayed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) < self.period {
            return false;
        }
        self.last_fired = now;
        true
    }

    /// Starts the period over from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.last_fired = now;
    }

    /// Time left until the next firing.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_fired))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Periodic;

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut tick = Periodic::new(Duration::from_millis(140), start);

        assert!(!tick.fire_if_due(start + Duration::from_millis(139)));
        assert!(tick.fire_if_due(start + Duration::from_millis(140)));
        assert!(!tick.fire_if_due(start + Duration::from_millis(200)));
        assert!(tick.fire_if_due(start + Duration::from_millis(280)));
    }

    #[test]
    fn restart_postpones_the_next_firing() {
        let start = Instant::now();
        let mut refresh = Periodic::new(Duration::from_secs(10), start);

        refresh.restart(start + Duration::from_secs(8));

        assert!(!refresh.fire_if_due(start + Duration::from_secs(12)));
        assert_eq!(
            refresh.remaining(start + Duration::from_secs(12)),
            Duration::from_secs(6)
        );
        assert!(refresh.fire_if_due(start + Duration::from_secs(18)));
    }
}
