//! Hand angles from clock readings
//!
//! All angles are in turn units (`TURN_MAX` per rotation) and use truncating integer
//! division, so a reading on an exact boundary lands exactly on its tick.

use crate::time_engine::ClockReading;
use crate::trig::TURN_MAX;

/// Angles of the three hands for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl HandAngles {
    /// Resolve angles with a minute hand that steps once per minute
    pub fn resolve(reading: &ClockReading) -> Self {
        Self {
            hour: hour_angle(reading.hour, reading.minute),
            minute: minute_angle(reading.minute),
            second: second_angle(reading.second),
        }
    }

    /// Like `resolve`, but the minute hand also advances with the seconds
    pub fn resolve_smooth(reading: &ClockReading) -> Self {
        Self {
            minute: smooth_minute_angle(reading.minute, reading.second),
            ..Self::resolve(reading)
        }
    }
}

/// Hour hand: sweeps with the minutes, wraps every 12 hours
pub fn hour_angle(hour: u32, minute: u32) -> i32 {
    let minutes = ((hour % 12) * 60 + minute) as i32;
    TURN_MAX * minutes / (12 * 60)
}

pub fn minute_angle(minute: u32) -> i32 {
    TURN_MAX * minute as i32 / 60
}

pub fn smooth_minute_angle(minute: u32, second: u32) -> i32 {
    TURN_MAX * (minute * 60 + second) as i32 / 3600
}

pub fn second_angle(second: u32) -> i32 {
    TURN_MAX * second as i32 / 60
}

/// Angle of tick `index` when `count` ticks are spread over the face
pub fn tick_angle(index: u32, count: u32) -> i32 {
    TURN_MAX * index as i32 / count as i32
}
