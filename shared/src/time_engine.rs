//! Time Engine - wall-clock sampling and tick detection
//!
//! Produces one `ClockReading` per frame and works out which time units changed
//! between two readings, the way a watch tick service reports them.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// The time components one frame is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Hour in 24-hour format (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Day of month (1-31)
    pub day_of_month: u32,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32, second: u32, day_of_month: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        debug_assert!((1..=31).contains(&day_of_month));
        Self {
            hour,
            minute,
            second,
            day_of_month,
        }
    }

    /// Take the components of a zoned date-time
    pub fn from_datetime<T: TimeZone>(dt: &DateTime<T>) -> Self {
        Self {
            hour: dt.hour(),
            minute: dt.minute(),
            // chrono reports leap seconds through the nanosecond field, so this stays < 60
            second: dt.second(),
            day_of_month: dt.day(),
        }
    }

    /// Format as "hh:mm:ss"
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Sample the current time in the system's local zone
pub fn sample_local() -> ClockReading {
    ClockReading::from_datetime(&Local::now())
}

/// Sample the current time in `tz`
pub fn sample_in(tz: Tz) -> ClockReading {
    sample_at(tz, Utc::now())
}

/// Reading for a given timezone at a specific instant
pub fn sample_at(tz: Tz, now_utc: DateTime<Utc>) -> ClockReading {
    ClockReading::from_datetime(&now_utc.with_timezone(&tz))
}

/// Parse a timezone string into a Tz
pub fn parse_timezone(tz_str: &str) -> Result<Tz, String> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| format!("Invalid timezone: {}", tz_str))
}

/// Set of time units that changed between two readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: TimeUnits = TimeUnits(0);
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const DAY: TimeUnits = TimeUnits(1 << 3);
    pub const ALL: TimeUnits = TimeUnits(0b1111);

    /// Units that differ between `prev` and `next`
    pub fn between(prev: &ClockReading, next: &ClockReading) -> Self {
        let mut units = Self::NONE;
        if prev.second != next.second {
            units |= Self::SECOND;
        }
        if prev.minute != next.minute {
            units |= Self::MINUTE;
        }
        if prev.hour != next.hour {
            units |= Self::HOUR;
        }
        if prev.day_of_month != next.day_of_month {
            units |= Self::DAY;
        }
        units
    }

    pub fn contains(self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}

/// A tick handed to the render context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub reading: ClockReading,
    pub units_changed: TimeUnits,
}

/// Turns a stream of samples into second-granularity ticks
///
/// The host samples as often as it likes; a tick is produced only when at least the
/// second changed. The first sample always ticks with every unit set.
#[derive(Debug, Default)]
pub struct Ticker {
    last: Option<ClockReading>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a sample; returns the tick if anything changed since the previous one
    pub fn advance(&mut self, reading: ClockReading) -> Option<Tick> {
        let units_changed = match self.last {
            None => TimeUnits::ALL,
            Some(prev) => TimeUnits::between(&prev, &reading),
        };
        if units_changed.is_empty() {
            return None;
        }
        self.last = Some(reading);
        Some(Tick {
            reading,
            units_changed,
        })
    }

    /// The most recent reading that produced a tick
    pub fn last(&self) -> Option<ClockReading> {
        self.last
    }
}
