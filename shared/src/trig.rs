//! Trigonometry over a turn of fixed-point angle units
//!
//! Angles are turn fractions: `TURN_MAX` units make a full rotation, zero points up and
//! angles grow clockwise. Results are scaled by `TRIG_MAX_RATIO`.
//!
//! Contract shared by every backend:
//! - the four quadrant angles return exactly `0` or `±TRIG_MAX_RATIO`
//! - any angle is accepted; values outside `[0, TURN_MAX)` wrap
//! - callers divide by `TRIG_MAX_RATIO` with Rust's truncating `/`

use std::f64::consts::TAU;

/// Units in one full turn
pub const TURN_MAX: i32 = 0x10000;

/// Amplitude of `sin`/`cos` results
pub const TRIG_MAX_RATIO: i32 = 0xffff;

const QUARTER: i32 = TURN_MAX / 4;

/// Table step in angle units (1024 steps per turn)
const STEP: i32 = 64;

/// Sine and cosine over turn units
pub trait Trig {
    /// Sine of `angle`, scaled by `TRIG_MAX_RATIO`
    fn sin(&self, angle: i32) -> i32;

    /// Cosine of `angle`, scaled by `TRIG_MAX_RATIO`
    fn cos(&self, angle: i32) -> i32 {
        self.sin(angle.wrapping_add(QUARTER))
    }
}

/// Integer-only lookup: a quarter-wave table with linear interpolation between entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTrig;

/// `f64` backend rounding to the nearest unit; useful as a reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatTrig;

impl FixedTrig {
    /// Sine for an angle inside the first quadrant, `0..=QUARTER`
    fn quarter_sin(angle: i32) -> i32 {
        let index = (angle / STEP) as usize;
        let frac = angle % STEP;
        if frac == 0 {
            return QUARTER_SINE[index];
        }
        let lo = QUARTER_SINE[index];
        let hi = QUARTER_SINE[index + 1];
        lo + (hi - lo) * frac / STEP
    }
}

impl Trig for FixedTrig {
    fn sin(&self, angle: i32) -> i32 {
        let angle = angle.rem_euclid(TURN_MAX);
        let offset = angle % QUARTER;
        match angle / QUARTER {
            0 => Self::quarter_sin(offset),
            1 => Self::quarter_sin(QUARTER - offset),
            2 => -Self::quarter_sin(offset),
            _ => -Self::quarter_sin(QUARTER - offset),
        }
    }
}

impl Trig for FloatTrig {
    fn sin(&self, angle: i32) -> i32 {
        let turns = angle.rem_euclid(TURN_MAX) as f64 / TURN_MAX as f64;
        ((turns * TAU).sin() * TRIG_MAX_RATIO as f64).round() as i32
    }
}

/// `round(sin(i / 1024 turn) * TRIG_MAX_RATIO)` for `i` in `0..=256`
#[rustfmt::skip]
const QUARTER_SINE: [i32; 257] = [
    0, 402, 804, 1206, 1608, 2010, 2412, 2814,
    3216, 3617, 4019, 4420, 4821, 5222, 5623, 6023,
    6424, 6824, 7223, 7623, 8022, 8421, 8820, 9218,
    9616, 10014, 10411, 10808, 11204, 11600, 11996, 12391,
    12785, 13179, 13573, 13966, 14359, 14751, 15142, 15533,
    15924, 16313, 16703, 17091, 17479, 17866, 18253, 18639,
    19024, 19408, 19792, 20175, 20557, 20939, 21319, 21699,
    22078, 22456, 22834, 23210, 23586, 23960, 24334, 24707,
    25079, 25450, 25820, 26189, 26557, 26925, 27291, 27656,
    28020, 28383, 28745, 29106, 29465, 29824, 30181, 30538,
    30893, 31247, 31600, 31952, 32302, 32651, 32999, 33346,
    33692, 34036, 34379, 34721, 35061, 35400, 35738, 36074,
    36409, 36743, 37075, 37406, 37736, 38064, 38390, 38715,
    39039, 39361, 39682, 40001, 40319, 40635, 40950, 41263,
    41575, 41885, 42194, 42500, 42806, 43109, 43411, 43712,
    44011, 44308, 44603, 44897, 45189, 45479, 45768, 46055,
    46340, 46624, 46905, 47185, 47464, 47740, 48014, 48287,
    48558, 48827, 49095, 49360, 49624, 49885, 50145, 50403,
    50659, 50913, 51166, 51416, 51664, 51911, 52155, 52398,
    52638, 52877, 53113, 53348, 53580, 53811, 54039, 54266,
    54490, 54713, 54933, 55151, 55367, 55582, 55794, 56003,
    56211, 56417, 56620, 56822, 57021, 57218, 57413, 57606,
    57797, 57985, 58171, 58356, 58537, 58717, 58895, 59070,
    59243, 59414, 59582, 59749, 59913, 60075, 60234, 60391,
    60546, 60699, 60850, 60998, 61144, 61287, 61429, 61567,
    61704, 61838, 61970, 62100, 62227, 62352, 62475, 62595,
    62713, 62829, 62942, 63053, 63161, 63267, 63371, 63472,
    63571, 63668, 63762, 63853, 63943, 64030, 64114, 64196,
    64276, 64353, 64428, 64500, 64570, 64638, 64703, 64765,
    64826, 64883, 64939, 64992, 65042, 65090, 65136, 65179,
    65219, 65258, 65293, 65327, 65357, 65386, 65412, 65435,
    65456, 65475, 65491, 65504, 65515, 65524, 65530, 65534,
    65535,
];
