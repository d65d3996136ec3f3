//! Hand renderer - layered hour/minute strokes, second hand, pivot
//!
//! A hand is the same segment stroked several times at decreasing width. Each pass is
//! drawn for every hand before the next pass starts, and the stroke state is set once
//! per pass.

use crate::angles::HandAngles;
use crate::geometry::FaceGeometry;
use crate::projector::project;
use crate::style::FaceStyle;
use crate::surface::{Color, ScreenPoint, Surface};
use crate::trig::Trig;

/// One stroke pass of one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSpec {
    pub stroke_width: u8,
    pub main_len: i32,
    pub tail_len: i32,
    pub angle: i32,
    pub color: Color,
    pub center: ScreenPoint,
}

impl HandSpec {
    /// Tip and tail end of the segment
    pub fn endpoints<T: Trig + ?Sized>(&self, trig: &T) -> (ScreenPoint, ScreenPoint) {
        (
            project(trig, self.center, self.angle, self.main_len),
            project(trig, self.center, self.angle, -self.tail_len),
        )
    }
}

/// Stroke one hand with the surface's current stroke color and width
pub fn draw_hand<S, T>(surface: &mut S, trig: &T, hand: &HandSpec)
where
    S: Surface + ?Sized,
    T: Trig + ?Sized,
{
    let (tip, tail) = hand.endpoints(trig);
    surface.draw_line(tip, tail);
}

/// Every stroke pass of the frame, in draw order
pub fn hand_specs(geo: &FaceGeometry, style: &FaceStyle, angles: &HandAngles) -> Vec<HandSpec> {
    let mut specs = Vec::with_capacity(style.hand_passes.len() * 2 + 1);

    for pass in &style.hand_passes {
        for (angle, len) in [(angles.hour, geo.hour_len), (angles.minute, geo.minute_len)] {
            specs.push(HandSpec {
                stroke_width: pass.width,
                main_len: len,
                tail_len: 0,
                angle,
                color: pass.color,
                center: geo.center,
            });
        }
    }

    specs.push(HandSpec {
        stroke_width: style.second_width,
        main_len: geo.second_len,
        tail_len: geo.second_tail,
        angle: angles.second,
        color: style.colors.second_hand,
        center: geo.center,
    });

    specs
}

pub fn draw_hands<S, T>(surface: &mut S, trig: &T, geo: &FaceGeometry, style: &FaceStyle, angles: &HandAngles)
where
    S: Surface + ?Sized,
    T: Trig + ?Sized,
{
    let mut stroke = None;
    for spec in hand_specs(geo, style, angles) {
        if stroke != Some((spec.color, spec.stroke_width)) {
            surface.set_stroke_color(spec.color);
            surface.set_stroke_width(spec.stroke_width);
            stroke = Some((spec.color, spec.stroke_width));
        }
        draw_hand(surface, trig, &spec);
    }
    draw_pivot(surface, geo, style);
}

/// Accent disk with a dark screw on top
pub fn draw_pivot<S: Surface + ?Sized>(surface: &mut S, geo: &FaceGeometry, style: &FaceStyle) {
    surface.set_fill_color(style.colors.pivot);
    surface.fill_circle(geo.center, style.pivot.outer_radius);
    surface.set_fill_color(style.colors.screw);
    surface.fill_circle(geo.center, style.pivot.inner_radius);
}
