//! Drawing module - the watch display emulated on a nannou `Draw`
//!
//! Device pixels are scaled up by an integer factor and mapped from the watch's
//! top-left, y-down coordinates to nannou's centered, y-up window coordinates.

use nannou::prelude::*;
use nannou::text::Font;
use shared::{Color, Rect as DeviceRect, ScreenPoint, Surface, TextAlign, TextOverflow};

/// Point size of the date numerals, in device pixels
pub const DATE_FONT_SIZE: f32 = 13.0;

/// Map a device pixel to window coordinates
pub fn to_window(device: DeviceRect, scale: f32, p: ScreenPoint) -> Point2 {
    let x = (p.x - device.x) as f32 - device.w as f32 / 2.0;
    let y = device.h as f32 / 2.0 - (p.y - device.y) as f32;
    pt2(x * scale, y * scale)
}

fn to_srgb(color: Color) -> Srgb<u8> {
    srgb(color.r, color.g, color.b)
}

/// Watch graphics context on top of nannou
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    device: DeviceRect,
    scale: f32,
    font: &'a Font,
    stroke: Srgb<u8>,
    fill: Srgb<u8>,
    text: Srgb<u8>,
    stroke_width: f32,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, device: DeviceRect, scale: f32, font: &'a Font) -> Self {
        Self {
            draw,
            device,
            scale,
            font,
            stroke: to_srgb(Color::WHITE),
            fill: to_srgb(Color::BLACK),
            text: to_srgb(Color::WHITE),
            stroke_width: 1.0,
        }
    }

    fn point(&self, p: ScreenPoint) -> Point2 {
        to_window(self.device, self.scale, p)
    }
}

impl Surface for NannouSurface<'_> {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = to_srgb(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = to_srgb(color);
    }

    fn set_text_color(&mut self, color: Color) {
        self.text = to_srgb(color);
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.stroke_width = width as f32;
    }

    fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint) {
        if p0 == p1 {
            return;
        }
        self.draw
            .line()
            .start(self.point(p0))
            .end(self.point(p1))
            .weight(self.stroke_width * self.scale)
            .caps_round()
            .color(self.stroke);
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: i32) {
        self.draw
            .ellipse()
            .xy(self.point(center))
            .radius(radius as f32 * self.scale)
            .no_fill()
            .stroke(self.stroke)
            .stroke_weight(self.stroke_width * self.scale);
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: i32) {
        self.draw
            .ellipse()
            .xy(self.point(center))
            .radius(radius as f32 * self.scale)
            .color(self.fill);
    }

    fn fill_rect(&mut self, rect: DeviceRect) {
        let w = rect.w as f32 * self.scale;
        let h = rect.h as f32 * self.scale;
        let top_left = self.point(ScreenPoint::new(rect.x, rect.y));
        self.draw
            .rect()
            .x_y(top_left.x + w / 2.0, top_left.y - h / 2.0)
            .w_h(w, h)
            .color(self.fill);
    }

    fn draw_text(&mut self, text: &str, rect: DeviceRect, overflow: TextOverflow, align: TextAlign) {
        let w = rect.w as f32 * self.scale;
        let h = rect.h as f32 * self.scale;
        let top_left = self.point(ScreenPoint::new(rect.x, rect.y));

        let drawing = self
            .draw
            .text(text)
            .x_y(top_left.x + w / 2.0, top_left.y - h / 2.0)
            .w_h(w, h)
            .font(self.font.clone())
            .font_size((DATE_FONT_SIZE * self.scale) as u32)
            .align_text_top()
            .color(self.text);

        let drawing = match align {
            TextAlign::Left => drawing.left_justify(),
            TextAlign::Center => drawing.center_justify(),
            TextAlign::Right => drawing.right_justify(),
        };

        match overflow {
            TextOverflow::WordWrap => drawing.wrap_by_word(),
            TextOverflow::TrailingEllipsis | TextOverflow::Fill => drawing.no_line_wrap(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: DeviceRect = DeviceRect::new(0, 0, 144, 168);

    #[test]
    fn test_to_window_maps_corners() {
        assert_eq!(to_window(DEVICE, 1.0, ScreenPoint::new(72, 84)), pt2(0.0, 0.0));
        assert_eq!(to_window(DEVICE, 1.0, ScreenPoint::new(0, 0)), pt2(-72.0, 84.0));
        assert_eq!(to_window(DEVICE, 3.0, ScreenPoint::new(144, 168)), pt2(216.0, -252.0));
    }

    #[test]
    fn test_to_srgb() {
        let c = to_srgb(Color::RAJAH);
        assert_eq!((c.red, c.green, c.blue), (0xff, 0xaa, 0x55));
    }
}
