//! Polar to device coordinates around a fixed center
//!
//! Clock convention: angle zero points up and grows clockwise, so
//! `x = cx + sin * r / TRIG_MAX_RATIO` and `y = cy - cos * r / TRIG_MAX_RATIO`.
//! Both divisions truncate toward zero. The products are taken in `i64`, so any `i32`
//! radius projects without overflow.

use crate::surface::ScreenPoint;
use crate::trig::{Trig, TRIG_MAX_RATIO};

/// Point `radius` pixels from `center` at `angle`; a negative radius lands behind the center
pub fn project<T: Trig + ?Sized>(trig: &T, center: ScreenPoint, angle: i32, radius: i32) -> ScreenPoint {
    let sin = i64::from(trig.sin(angle));
    let cos = i64::from(trig.cos(angle));
    let radius = i64::from(radius);
    let ratio = i64::from(TRIG_MAX_RATIO);
    // |sin| <= ratio, so each quotient is no larger than |radius|
    let dx = (sin * radius / ratio) as i32;
    let dy = (-cos * radius / ratio) as i32;
    ScreenPoint::new(dx.saturating_add(center.x), dy.saturating_add(center.y))
}

/// Radial segment between two distances from the center, inner point first
pub fn radial_segment<T: Trig + ?Sized>(
    trig: &T,
    center: ScreenPoint,
    angle: i32,
    inner: i32,
    outer: i32,
) -> (ScreenPoint, ScreenPoint) {
    (
        project(trig, center, angle, inner),
        project(trig, center, angle, outer),
    )
}
