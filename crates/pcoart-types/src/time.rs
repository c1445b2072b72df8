use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 604_800;
/// 365-day year; calendar variance is accepted for display purposes.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

impl TimeUnit {
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Hours => SECONDS_PER_HOUR,
            Self::Days => SECONDS_PER_DAY,
            Self::Weeks => SECONDS_PER_WEEK,
            Self::Years => SECONDS_PER_YEAR,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Years => "years",
        };
        f.write_str(label)
    }
}

/// Convert a unit count to seconds. A `u32` count cannot overflow `u64`
/// seconds even for years.
pub const fn to_seconds(value: u32, unit: TimeUnit) -> u64 {
    value as u64 * unit.seconds()
}

/// Whole units contained in `seconds` (truncating).
pub const fn from_seconds(seconds: u64, unit: TimeUnit) -> u64 {
    seconds / unit.seconds()
}

/// Countdown breakdown for display, clamped at zero once `end` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

pub fn remaining_time(now: u64, end: u64) -> RemainingTime {
    let left = end.saturating_sub(now);
    RemainingTime {
        days: left / SECONDS_PER_DAY,
        hours: left % SECONDS_PER_DAY / SECONDS_PER_HOUR,
        minutes: left % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        seconds: left % SECONDS_PER_MINUTE,
    }
}
