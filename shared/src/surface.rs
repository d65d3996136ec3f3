//! Drawing surface - the primitive operations a frame is drawn with
//!
//! Device coordinates: origin at the top-left pixel, y grows downwards. The surface is
//! stateful like a watch graphics context: colors and stroke width stay set until
//! changed.

use serde::{Deserialize, Serialize};

/// Integer device coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point, truncated towards the origin for odd sizes
    pub const fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const DARK_GRAY: Color = Color::rgb(0x55, 0x55, 0x55);
    pub const LIGHT_GRAY: Color = Color::rgb(0xaa, 0xaa, 0xaa);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RAJAH: Color = Color::rgb(0xff, 0xaa, 0x55);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal text alignment inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// What happens to text that does not fit its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOverflow {
    /// Wrap words and clip anything past the box
    WordWrap,
    /// Clip at the end of the line
    TrailingEllipsis,
    /// Fill the box, clipping at its edges
    Fill,
}

/// Primitive operations the renderer needs from a display
pub trait Surface {
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_text_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: u8);

    /// Line from `p0` to `p1` in the stroke color and width; zero length is a no-op
    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint);
    fn draw_circle(&mut self, center: ScreenPoint, radius: i32);
    fn fill_circle(&mut self, center: ScreenPoint, radius: i32);
    fn fill_rect(&mut self, rect: Rect);
    fn draw_text(&mut self, text: &str, rect: Rect, overflow: TextOverflow, align: TextAlign);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawCommand {
    StrokeColor(Color),
    FillColor(Color),
    TextColor(Color),
    StrokeWidth(u8),
    Line(ScreenPoint, ScreenPoint),
    Circle(ScreenPoint, i32),
    FillCircle(ScreenPoint, i32),
    FillRect(Rect),
    Text {
        text: String,
        rect: Rect,
        overflow: TextOverflow,
        align: TextAlign,
    },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLog {
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Line segments only, in draw order
    pub fn lines(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line(p0, p1) => Some((*p0, *p1)),
            _ => None,
        })
    }

    /// Replay the recorded calls onto another surface
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::StrokeColor(c) => target.set_stroke_color(*c),
                DrawCommand::FillColor(c) => target.set_fill_color(*c),
                DrawCommand::TextColor(c) => target.set_text_color(*c),
                DrawCommand::StrokeWidth(w) => target.set_stroke_width(*w),
                DrawCommand::Line(p0, p1) => target.draw_line(*p0, *p1),
                DrawCommand::Circle(p, r) => target.draw_circle(*p, *r),
                DrawCommand::FillCircle(p, r) => target.fill_circle(*p, *r),
                DrawCommand::FillRect(rect) => target.fill_rect(*rect),
                DrawCommand::Text {
                    text,
                    rect,
                    overflow,
                    align,
                } => target.draw_text(text, *rect, *overflow, *align),
            }
        }
    }
}

impl Surface for CommandLog {
    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_text_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::TextColor(color));
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.commands.push(DrawCommand::StrokeWidth(width));
    }

    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint) {
        self.commands.push(DrawCommand::Line(p0, p1));
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: i32) {
        self.commands.push(DrawCommand::Circle(center, radius));
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: i32) {
        self.commands.push(DrawCommand::FillCircle(center, radius));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_text(&mut self, text: &str, rect: Rect, overflow: TextOverflow, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            overflow,
            align,
        });
    }
}
