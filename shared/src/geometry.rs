//! Face geometry derived once from the display bounds

use crate::style::{FaceStyle, TickStyle};
use crate::surface::{Rect, ScreenPoint};

/// Gap between the face and the narrower display edge when no radius is fixed
pub const FACE_MARGIN: i32 = 5;

/// Reference display bounds
pub const DISPLAY_BOUNDS: Rect = Rect::new(0, 0, 144, 168);

/// Radii for one ring of ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRing {
    pub count: u32,
    pub inner: i32,
    pub outer: i32,
    pub width: u8,
}

/// Everything positional about the face; immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGeometry {
    pub bounds: Rect,
    pub center: ScreenPoint,
    pub radius: i32,
    pub rim_radius: i32,
    /// Tick rings in draw order
    pub tick_rings: Vec<TickRing>,
    /// Face-colored disk drawn over the inner ends of the ticks
    pub tick_mask_radius: i32,
    pub badge_center: ScreenPoint,
    pub badge_radius: i32,
    pub badge_text_box: Rect,
    pub hour_len: i32,
    pub minute_len: i32,
    pub second_len: i32,
    pub second_tail: i32,
}

impl FaceGeometry {
    /// Callers loading a style from outside should run `FaceStyle::validate` first
    pub fn new(bounds: Rect, style: &FaceStyle) -> Self {
        let center = bounds.center();
        let radius = style.radius_for(bounds);

        let (tick_rings, tick_mask_radius) = match style.ticks {
            TickStyle::Ring {
                minute_len,
                minute_width,
                hour_len,
                hour_width,
                mask_inset,
            } => (
                vec![
                    TickRing {
                        count: 60,
                        inner: radius - minute_len,
                        outer: radius,
                        width: minute_width,
                    },
                    TickRing {
                        count: 12,
                        inner: radius - hour_len,
                        outer: radius,
                        width: hour_width,
                    },
                ],
                radius - mask_inset,
            ),
            TickStyle::Spokes { width, mask_inset } => (
                vec![TickRing {
                    count: 12,
                    inner: 0,
                    outer: radius,
                    width,
                }],
                radius - mask_inset,
            ),
        };

        let badge = &style.date_badge;
        let badge_center = center.offset(badge.offset.0, badge.offset.1);
        // text box starts two pixels below the badge top
        let badge_text_box = Rect::new(
            badge_center.x - badge.radius,
            badge_center.y - badge.radius + 2,
            badge.radius * 2,
            badge.radius * 2,
        );

        Self {
            bounds,
            center,
            radius,
            rim_radius: radius + style.rim_offset,
            tick_rings,
            tick_mask_radius,
            badge_center,
            badge_radius: badge.radius,
            badge_text_box,
            hour_len: radius - style.hands.hour,
            minute_len: radius - style.hands.minute,
            second_len: radius - style.hands.second,
            second_tail: style.hands.second_tail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traditional_geometry() {
        let geo = FaceGeometry::new(DISPLAY_BOUNDS, &FaceStyle::traditional());
        assert_eq!(geo.center, ScreenPoint::new(72, 84));
        assert_eq!(geo.radius, 67);
        assert_eq!(geo.rim_radius, 69);
        assert_eq!(geo.tick_mask_radius, 58);
        assert_eq!(geo.tick_rings[0].inner, 63);
        assert_eq!(geo.tick_rings[1].inner, 55);
        assert_eq!(geo.badge_center, ScreenPoint::new(102, 113));
        assert_eq!(geo.badge_text_box, Rect::new(92, 105, 20, 20));
        assert_eq!((geo.hour_len, geo.minute_len, geo.second_len), (27, 54, 60));
        assert_eq!(geo.second_tail, 9);
    }

    #[test]
    fn test_classic_geometry() {
        let geo = FaceGeometry::new(DISPLAY_BOUNDS, &FaceStyle::classic());
        assert_eq!(geo.tick_rings.len(), 1);
        assert_eq!(geo.tick_rings[0].count, 12);
        assert_eq!(geo.tick_rings[0].inner, 0);
        assert_eq!(geo.tick_mask_radius, 57);
        assert_eq!(geo.second_tail, 0);
    }

    #[test]
    fn test_fixed_radius_overrides_bounds() {
        let style = FaceStyle {
            face_radius: Some(50),
            ..FaceStyle::traditional()
        };
        let geo = FaceGeometry::new(DISPLAY_BOUNDS, &style);
        assert_eq!(geo.radius, 50);
        assert_eq!(geo.minute_len, 37);
    }
}
