//! Bonus-time bookkeeping.
//!
//! A card earns a bonus if its pair is matched before the card has spent
//! `limit` in total face-up. The timer runs only while the card is face-up
//! and unmatched; it never drives transitions on its own.
//!
//! All readings take `now` from the game's [`Clock`](crate::core::Clock),
//! expressed as time since the clock's origin.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Face-up time accounting for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTimer {
    limit: Duration,
    /// When the current face-up stretch began. `None` while stopped.
    last_face_up_at: Option<Duration>,
    /// Face-up time banked by previous stretches.
    past_face_up_time: Duration,
}

impl BonusTimer {
    /// A stopped timer with nothing banked.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_face_up_at: None,
            past_face_up_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_face_up_at.is_some()
    }

    #[must_use]
    pub fn last_face_up_at(&self) -> Option<Duration> {
        self.last_face_up_at
    }

    #[must_use]
    pub fn past_face_up_time(&self) -> Duration {
        self.past_face_up_time
    }

    /// Total face-up time, including the running stretch if any.
    #[must_use]
    pub fn face_up_time(&self, now: Duration) -> Duration {
        match self.last_face_up_at {
            Some(since) => self.past_face_up_time + now.saturating_sub(since),
            None => self.past_face_up_time,
        }
    }

    /// Bonus time left, never negative.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.limit.saturating_sub(self.face_up_time(now))
    }

    /// Remaining bonus as a fraction of the limit, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction_remaining(&self, now: Duration) -> f64 {
        let remaining = self.remaining(now);
        if self.limit > Duration::ZERO && remaining > Duration::ZERO {
            remaining.as_secs_f64() / self.limit.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Start a face-up stretch. No-op if already running.
    pub(crate) fn start(&mut self, now: Duration) {
        if self.last_face_up_at.is_none() {
            self.last_face_up_at = Some(now);
        }
    }

    /// End the face-up stretch and bank its time. No-op if stopped.
    pub(crate) fn stop(&mut self, now: Duration) {
        if self.last_face_up_at.is_some() {
            self.past_face_up_time = self.face_up_time(now);
            self.last_face_up_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_new_timer_is_full() {
        let timer = BonusTimer::new(secs(6));
        assert!(!timer.is_running());
        assert_eq!(timer.face_up_time(secs(100)), Duration::ZERO);
        assert_eq!(timer.remaining(secs(100)), secs(6));
        assert_eq!(timer.fraction_remaining(secs(100)), 1.0);
    }

    #[test]
    fn test_running_timer_consumes() {
        let mut timer = BonusTimer::new(secs(6));
        timer.start(secs(10));

        assert!(timer.is_running());
        assert_eq!(timer.face_up_time(secs(12)), secs(2));
        assert_eq!(timer.remaining(secs(12)), secs(4));
        assert!((timer.fraction_remaining(secs(13)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stop_banks_time() {
        let mut timer = BonusTimer::new(secs(6));
        timer.start(secs(0));
        timer.stop(secs(2));

        assert!(!timer.is_running());
        assert_eq!(timer.past_face_up_time(), secs(2));
        // Stopped: later readings don't move
        assert_eq!(timer.face_up_time(secs(50)), secs(2));

        timer.start(secs(50));
        timer.stop(secs(51));
        assert_eq!(timer.past_face_up_time(), secs(3));
    }

    #[test]
    fn test_start_twice_keeps_first_timestamp() {
        let mut timer = BonusTimer::new(secs(6));
        timer.start(secs(1));
        timer.start(secs(4));
        assert_eq!(timer.last_face_up_at(), Some(secs(1)));
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let mut timer = BonusTimer::new(secs(6));
        timer.stop(secs(9));
        assert_eq!(timer, BonusTimer::new(secs(6)));
    }

    #[test]
    fn test_remaining_saturates() {
        let mut timer = BonusTimer::new(secs(6));
        timer.start(secs(0));
        assert_eq!(timer.remaining(secs(60)), Duration::ZERO);
        assert_eq!(timer.fraction_remaining(secs(60)), 0.0);
    }

    #[test]
    fn test_zero_limit_has_no_bonus() {
        let timer = BonusTimer::new(Duration::ZERO);
        assert_eq!(timer.remaining(secs(0)), Duration::ZERO);
        assert_eq!(timer.fraction_remaining(secs(0)), 0.0);
    }
}
