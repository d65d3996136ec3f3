//! Render context - per-window state and the frame entry point
//!
//! The host owns one `RenderContext` per window. Rendering a frame is a pure function
//! of the context and a `ClockReading`; the only thing that changes between frames is
//! the cached day label, and only on a day tick.

use log::debug;

use crate::angles::HandAngles;
use crate::face::draw_face;
use crate::geometry::FaceGeometry;
use crate::hands::draw_hands;
use crate::style::{DayPadding, FaceStyle};
use crate::surface::{Rect, ScreenPoint, Surface};
use crate::time_engine::{ClockReading, Tick, TimeUnits};
use crate::trig::{FixedTrig, Trig};

/// Day-of-month numeral, reformatted only when the day changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    day: u32,
    padding: DayPadding,
    text: String,
}

impl DayLabel {
    pub fn new(day: u32, padding: DayPadding) -> Self {
        Self {
            day,
            padding,
            text: padding.format(day),
        }
    }

    /// Returns whether the text was regenerated
    pub fn update(&mut self, day: u32) -> bool {
        if day == self.day {
            return false;
        }
        self.day = day;
        self.text = self.padding.format(day);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

pub struct RenderContext<T: Trig = FixedTrig> {
    style: FaceStyle,
    geometry: FaceGeometry,
    day_label: DayLabel,
    trig: T,
}

impl RenderContext<FixedTrig> {
    pub fn new(bounds: Rect, style: FaceStyle, day_of_month: u32) -> Self {
        Self::with_trig(bounds, style, day_of_month, FixedTrig)
    }
}

impl<T: Trig> RenderContext<T> {
    pub fn with_trig(bounds: Rect, style: FaceStyle, day_of_month: u32, trig: T) -> Self {
        let geometry = FaceGeometry::new(bounds, &style);
        let day_label = DayLabel::new(day_of_month, style.date_badge.padding);
        Self {
            style,
            geometry,
            day_label,
            trig,
        }
    }

    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    pub fn center(&self) -> ScreenPoint {
        self.geometry.center
    }

    pub fn day_label(&self) -> &str {
        self.day_label.as_str()
    }

    /// Handle a tick; the day label is refreshed only when the day changed
    pub fn on_tick(&mut self, tick: &Tick) {
        if tick.units_changed.contains(TimeUnits::DAY)
            && self.day_label.update(tick.reading.day_of_month)
        {
            debug!("day label now {:?}", self.day_label.as_str());
        }
    }

    pub fn angles(&self, reading: &ClockReading) -> HandAngles {
        if self.style.smooth_minute {
            HandAngles::resolve_smooth(reading)
        } else {
            HandAngles::resolve(reading)
        }
    }

    /// Draw one complete frame
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, reading: &ClockReading) {
        let angles = self.angles(reading);
        draw_face(
            surface,
            &self.trig,
            &self.geometry,
            &self.style,
            self.day_label.as_str(),
        );
        draw_hands(surface, &self.trig, &self.geometry, &self.style, &angles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DISPLAY_BOUNDS;
    use crate::hands::hand_specs;
    use crate::surface::{CommandLog, DrawCommand};
    use crate::time_engine::Ticker;
    use crate::trig::{FloatTrig, TURN_MAX};
    use pretty_assertions::assert_eq;

    fn traditional(day: u32) -> RenderContext {
        RenderContext::new(DISPLAY_BOUNDS, FaceStyle::traditional(), day)
    }

    fn label_of(log: &CommandLog) -> String {
        log.commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_day_label_padding_per_skin() {
        assert_eq!(traditional(5).day_label(), "5");
        let classic = RenderContext::new(DISPLAY_BOUNDS, FaceStyle::classic(), 5);
        assert_eq!(classic.day_label(), " 5");
    }

    #[test]
    fn test_day_label_changes_only_on_day_tick() {
        let mut ctx = traditional(5);
        let reading = ClockReading::new(12, 0, 1, 6);

        ctx.on_tick(&Tick {
            reading,
            units_changed: TimeUnits::SECOND,
        });
        assert_eq!(ctx.day_label(), "5");

        ctx.on_tick(&Tick {
            reading,
            units_changed: TimeUnits::SECOND | TimeUnits::DAY,
        });
        assert_eq!(ctx.day_label(), "6");
    }

    #[test]
    fn test_day_label_update_reports_change() {
        let mut label = DayLabel::new(9, DayPadding::SpacePadded);
        assert!(!label.update(9));
        assert!(label.update(10));
        assert_eq!(label.as_str(), "10");
        assert!(!label.update(10));
    }

    #[test]
    fn test_render_is_deterministic() {
        let ctx = traditional(17);
        let reading = ClockReading::new(8, 41, 7, 17);

        let mut first = CommandLog::new();
        let mut second = CommandLog::new();
        ctx.render(&mut first, &reading);
        ctx.render(&mut second, &reading);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_render_z_order() {
        let ctx = traditional(1);
        let mut log = CommandLog::new();
        ctx.render(&mut log, &ClockReading::new(1, 2, 3, 1));

        let cmds = &log.commands;
        let text = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        let last_width5 = cmds
            .iter()
            .rposition(|c| *c == DrawCommand::StrokeWidth(5))
            .unwrap();
        assert_eq!(cmds[0], DrawCommand::FillColor(ctx.style().colors.background));
        // rim uses width 5 as well; the last width-5 stroke belongs to the hand outlines
        assert!(last_width5 > text);
        assert_eq!(
            cmds.last().unwrap(),
            &DrawCommand::FillCircle(ctx.center(), ctx.style().pivot.inner_radius)
        );
    }

    #[test]
    fn test_quarter_past_three_scenario() {
        let reading = ClockReading::new(3, 15, 30, 20);
        let mut ticker = Ticker::new();
        let mut ctx = traditional(19);
        let tick = ticker.advance(reading).unwrap();
        ctx.on_tick(&tick);

        let angles = ctx.angles(&reading);
        assert_eq!(angles.hour, TURN_MAX * 195 / 720);
        assert_eq!(angles.minute, TURN_MAX / 4);
        assert_eq!(angles.second, TURN_MAX / 2);

        let geo = ctx.geometry();
        let specs = hand_specs(geo, ctx.style(), &angles);
        let minute = specs[1].endpoints(&FixedTrig).0;
        let second = specs.last().unwrap().endpoints(&FixedTrig);
        // minute hand due right, second hand due down with its tail up
        assert_eq!(minute, ScreenPoint::new(72 + 54, 84));
        assert_eq!(second.0, ScreenPoint::new(72, 84 + 60));
        assert_eq!(second.1, ScreenPoint::new(72, 84 - 9));

        let hour = specs[0].endpoints(&FixedTrig).0;
        assert!(hour.x > 72 + 25 && hour.y > 84, "hour tip {:?}", hour);

        let mut log = CommandLog::new();
        ctx.render(&mut log, &reading);
        assert_eq!(label_of(&log), "20");
        assert!(log.lines().any(|line| line == (minute, geo.center)));
    }

    #[test]
    fn test_float_backend_renders_same_shape() {
        let reading = ClockReading::new(3, 15, 30, 20);
        let fixed = traditional(20);
        let float = RenderContext::with_trig(DISPLAY_BOUNDS, FaceStyle::traditional(), 20, FloatTrig);

        let mut a = CommandLog::new();
        let mut b = CommandLog::new();
        fixed.render(&mut a, &reading);
        float.render(&mut b, &reading);

        assert_eq!(a.len(), b.len());
        for ((a0, a1), (b0, b1)) in a.lines().zip(b.lines()) {
            for (p, q) in [(a0, b0), (a1, b1)] {
                assert!((p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_oversized_style_from_toml_renders() {
        let text = format!(
            "face_radius = 40000\n{}",
            toml::to_string(&FaceStyle::traditional()).unwrap()
        );
        let style: FaceStyle = toml::from_str(&text).unwrap();
        assert!(style.validate(DISPLAY_BOUNDS).is_err());

        let ctx = RenderContext::new(DISPLAY_BOUNDS, style, 1);
        let mut log = CommandLog::new();
        ctx.render(&mut log, &ClockReading::new(3, 15, 30, 1));

        // minute hand due right, inset 13 from the face radius
        let tip = ScreenPoint::new(72 + 40_000 - 13, 84);
        assert!(log.lines().any(|line| line == (tip, ctx.center())));
        assert_eq!(log.lines().count(), 60 + 12 + 7);
    }

    #[test]
    fn test_smooth_minute_style() {
        let style = FaceStyle {
            smooth_minute: true,
            ..FaceStyle::traditional()
        };
        let ctx = RenderContext::new(DISPLAY_BOUNDS, style, 1);
        let angles = ctx.angles(&ClockReading::new(3, 15, 30, 1));
        assert_eq!(angles.minute, TURN_MAX * 930 / 3600);
    }
}
