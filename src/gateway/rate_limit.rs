use std::time::{Duration, Instant};

/// Five accepted actions per minute.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(12);

/// Source of the current instant, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A rejected rate check and how long until the next action is allowed.
pub struct RateLimited {
    pub wait: Duration,
}

impl RateLimited {
    /// Remaining wait in whole seconds, rounded up.
    pub fn wait_secs(&self) -> u64 {
        let secs = self.wait.as_nanos().div_ceil(1_000_000_000);
        u64::try_from(secs).unwrap_or(u64::MAX)
    }
}

/// Single cooldown window shared by every tool.
///
/// `check` never mutates; only `record` moves the window.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn check(&self, now: Instant) -> Result<(), RateLimited> {
        let Some(last) = self.last_accepted else {
            return Ok(());
        };
        let elapsed = now.saturating_duration_since(last);
        if elapsed >= self.cooldown {
            return Ok(());
        }
        Err(RateLimited {
            wait: self.cooldown - elapsed,
        })
    }

    pub fn record(&mut self, now: Instant) {
        self.last_accepted = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_check_always_passes() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.cooldown(), Duration::from_secs(12));
        assert!(limiter.check(Instant::now()).is_ok());
    }

    #[test]
    fn check_within_cooldown_reports_rounded_up_wait() {
        let start = Instant::now();
        let mut limiter = RateLimiter::default();
        limiter.record(start);

        let err = limiter.check(start).unwrap_err();
        assert_eq!(err.wait_secs(), 12);

        let err = limiter
            .check(start + Duration::from_millis(999))
            .unwrap_err();
        assert_eq!(err.wait, Duration::from_millis(11_001));
        assert_eq!(err.wait_secs(), 12);

        let err = limiter.check(start + Duration::from_secs(11)).unwrap_err();
        assert_eq!(err.wait_secs(), 1);

        let err = limiter
            .check(start + Duration::from_millis(11_999))
            .unwrap_err();
        assert_eq!(err.wait_secs(), 1);
    }

    #[test]
    fn rejected_check_does_not_move_window() {
        let start = Instant::now();
        let mut limiter = RateLimiter::default();
        limiter.record(start);

        assert!(limiter.check(start + Duration::from_secs(5)).is_err());
        assert!(limiter.check(start + Duration::from_secs(12)).is_ok());
    }

    #[test]
    fn record_restarts_window() {
        let start = Instant::now();
        let mut limiter = RateLimiter::new(Duration::from_secs(2));
        limiter.record(start);
        limiter.record(start + Duration::from_secs(2));

        let err = limiter.check(start + Duration::from_secs(3)).unwrap_err();
        assert_eq!(err.wait_secs(), 1);
    }

    #[test]
    fn clock_running_backwards_counts_as_no_time_elapsed() {
        let start = Instant::now() + Duration::from_secs(60);
        let mut limiter = RateLimiter::default();
        limiter.record(start);

        let err = limiter.check(start - Duration::from_secs(30)).unwrap_err();
        assert_eq!(err.wait_secs(), 12);
    }
}
