//! Hero section countdown to the festival start.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 2026-03-15T00:00:00Z
const DEFAULT_TARGET_UNIX: u64 = 1_773_532_800;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub fn from_duration(remaining: Duration) -> Self {
        let secs = remaining.as_secs();
        Self {
            days: secs / SECS_PER_DAY,
            hours: (secs % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: secs % SECS_PER_MINUTE,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: SystemTime,
}

impl Countdown {
    pub fn new(target: SystemTime) -> Self {
        Self { target }
    }

    /// Target from `FEST_COUNTDOWN_TARGET` (unix seconds), falling back to
    /// the festival opening.
    pub fn from_env() -> Self {
        let secs = std::env::var("FEST_COUNTDOWN_TARGET")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TARGET_UNIX);
        Self::new(UNIX_EPOCH + Duration::from_secs(secs))
    }

    /// Time left at `now`; all zero once the target has passed.
    pub fn remaining(&self, now: SystemTime) -> TimeLeft {
        self.target
            .duration_since(now)
            .map(TimeLeft::from_duration)
            .unwrap_or_default()
    }
}
