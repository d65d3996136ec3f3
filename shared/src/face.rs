//! Face compositor - everything below the hands
//!
//! Drawn in a fixed order every frame: background, face disk, ticks (with their
//! mask), rim, date badge.

use crate::angles::tick_angle;
use crate::geometry::FaceGeometry;
use crate::projector::radial_segment;
use crate::style::FaceStyle;
use crate::surface::{Surface, TextOverflow};
use crate::trig::Trig;

pub fn draw_face<S, T>(surface: &mut S, trig: &T, geo: &FaceGeometry, style: &FaceStyle, day_label: &str)
where
    S: Surface + ?Sized,
    T: Trig + ?Sized,
{
    let colors = &style.colors;

    // background
    surface.set_fill_color(colors.background);
    surface.fill_rect(geo.bounds);

    // clock face
    surface.set_fill_color(colors.face);
    surface.fill_circle(geo.center, geo.radius);

    draw_ticks(surface, trig, geo, style);

    // face rim
    surface.set_stroke_color(colors.rim);
    surface.set_stroke_width(style.rim_width);
    surface.draw_circle(geo.center, geo.rim_radius);

    draw_date_badge(surface, geo, style, day_label);
}

/// Tick rings, then a face-colored disk that trims their inner ends
pub fn draw_ticks<S, T>(surface: &mut S, trig: &T, geo: &FaceGeometry, style: &FaceStyle)
where
    S: Surface + ?Sized,
    T: Trig + ?Sized,
{
    let last = geo.tick_rings.len().saturating_sub(1);
    for (i, ring) in geo.tick_rings.iter().enumerate() {
        // the last ring holds the hour positions
        let color = if i == last {
            style.colors.hour_ticks
        } else {
            style.colors.minute_ticks
        };
        surface.set_stroke_color(color);
        surface.set_stroke_width(ring.width);
        for index in 0..ring.count {
            let angle = tick_angle(index, ring.count);
            let (p0, p1) = radial_segment(trig, geo.center, angle, ring.inner, ring.outer);
            surface.draw_line(p0, p1);
        }
    }

    surface.set_fill_color(style.colors.face);
    surface.fill_circle(geo.center, geo.tick_mask_radius);
}

pub fn draw_date_badge<S>(surface: &mut S, geo: &FaceGeometry, style: &FaceStyle, day_label: &str)
where
    S: Surface + ?Sized,
{
    let colors = &style.colors;

    surface.set_fill_color(colors.badge_fill);
    surface.fill_circle(geo.badge_center, geo.badge_radius);
    surface.set_stroke_width(1);
    surface.set_stroke_color(colors.badge_rim);
    surface.draw_circle(geo.badge_center, geo.badge_radius);

    surface.set_text_color(colors.date_text);
    surface.draw_text(
        day_label,
        geo.badge_text_box,
        TextOverflow::Fill,
        style.date_badge.align,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DISPLAY_BOUNDS;
    use crate::surface::{Color, CommandLog, DrawCommand, ScreenPoint, TextAlign};
    use crate::trig::FixedTrig;

    fn render(style: &FaceStyle, label: &str) -> CommandLog {
        let geo = FaceGeometry::new(DISPLAY_BOUNDS, style);
        let mut log = CommandLog::new();
        draw_face(&mut log, &FixedTrig, &geo, style, label);
        log
    }

    #[test]
    fn test_traditional_face_order() {
        let log = render(&FaceStyle::traditional(), "5");
        let cmds = &log.commands;
        assert_eq!(cmds[0], DrawCommand::FillColor(Color::BLACK));
        assert_eq!(cmds[1], DrawCommand::FillRect(DISPLAY_BOUNDS));
        assert_eq!(cmds[2], DrawCommand::FillColor(Color::DARK_GRAY));
        assert_eq!(cmds[3], DrawCommand::FillCircle(ScreenPoint::new(72, 84), 67));
        assert_eq!(log.lines().count(), 72);

        let mask = cmds
            .iter()
            .position(|c| *c == DrawCommand::FillCircle(ScreenPoint::new(72, 84), 58))
            .unwrap();
        let rim = cmds
            .iter()
            .position(|c| *c == DrawCommand::Circle(ScreenPoint::new(72, 84), 69))
            .unwrap();
        let text = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        assert!(mask < rim && rim < text);
        assert_eq!(text, cmds.len() - 1);
    }

    #[test]
    fn test_traditional_ticks() {
        let log = render(&FaceStyle::traditional(), "5");
        let lines: Vec<_> = log.lines().collect();
        // 12 o'clock minute tick, then the 3 o'clock hour tick
        assert_eq!(lines[0], (ScreenPoint::new(72, 21), ScreenPoint::new(72, 17)));
        assert_eq!(lines[60 + 3], (ScreenPoint::new(127, 84), ScreenPoint::new(139, 84)));
        assert!(log.commands.contains(&DrawCommand::StrokeWidth(3)));
    }

    #[test]
    fn test_classic_spokes() {
        let log = render(&FaceStyle::classic(), " 5");
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|(p0, _)| *p0 == ScreenPoint::new(72, 84)));
        assert_eq!(lines[6].1, ScreenPoint::new(72, 151));
        assert!(log
            .commands
            .contains(&DrawCommand::FillCircle(ScreenPoint::new(72, 84), 57)));
    }

    #[test]
    fn test_date_badge_text() {
        let log = render(&FaceStyle::classic(), " 5");
        let last = log.commands.last().unwrap().clone();
        match last {
            DrawCommand::Text { text, rect, overflow, align } => {
                assert_eq!(text, " 5");
                assert_eq!(rect.center(), ScreenPoint::new(105, 86));
                assert_eq!(overflow, TextOverflow::Fill);
                assert_eq!(align, TextAlign::Left);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
