//! Face style - the fixed visual parameters of a skin
//!
//! Both skins share one renderer; everything that differs between them lives here.
//! Hand lengths are insets measured inward from the face radius, so a style does not
//! depend on the display size.

use serde::{Deserialize, Serialize};

use crate::geometry::FACE_MARGIN;
use crate::surface::{Color, Rect, TextAlign};

/// A style whose dimensions do not fit the display it is drawn on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Face radius outside `1..=max`
    Radius { radius: i32, max: i32 },
    /// A length or offset outside `0..=max` (offsets: `-max..=max`)
    Length {
        field: &'static str,
        value: i32,
        max: i32,
    },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::Radius { radius, max } => {
                write!(f, "face radius {} is outside 1..={}", radius, max)
            }
            StyleError::Length { field, value, max } => {
                write!(f, "{} = {} does not fit a face radius of {}", field, value, max)
            }
        }
    }
}

impl std::error::Error for StyleError {}

/// Built-in skins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skin {
    /// Dark face, 60 minute ticks plus hour ticks, three-pass hands, second hand with tail
    #[default]
    Traditional,
    /// Light face, 12 tick stubs, two-pass hands, plain second hand
    Classic,
}

impl Skin {
    pub fn style(self) -> FaceStyle {
        match self {
            Skin::Traditional => FaceStyle::traditional(),
            Skin::Classic => FaceStyle::classic(),
        }
    }
}

impl std::fmt::Display for Skin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skin::Traditional => write!(f, "traditional"),
            Skin::Classic => write!(f, "classic"),
        }
    }
}

/// How the tick marks are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickStyle {
    /// Fine minute ticks at the rim, heavier hour ticks masked down to a ring
    Ring {
        minute_len: i32,
        minute_width: u8,
        hour_len: i32,
        hour_width: u8,
        mask_inset: i32,
    },
    /// Twelve spokes from the center, masked so only stubs remain
    Spokes { width: u8, mask_inset: i32 },
}

/// How the day of month is formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPadding {
    /// Plain integer, "5"
    Unpadded,
    /// Right-justified to two characters, " 5"
    SpacePadded,
}

impl DayPadding {
    pub fn format(self, day_of_month: u32) -> String {
        match self {
            DayPadding::Unpadded => format!("{}", day_of_month),
            DayPadding::SpacePadded => format!("{:>2}", day_of_month),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBadge {
    /// Badge center relative to the face center
    pub offset: (i32, i32),
    pub radius: i32,
    pub align: TextAlign,
    pub padding: DayPadding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandInsets {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Length of the second hand behind the pivot; zero for none
    pub second_tail: i32,
}

/// One stroke of a layered hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokePass {
    pub width: u8,
    pub color: Color,
}

impl StrokePass {
    pub const fn new(width: u8, color: Color) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pivot {
    pub outer_radius: i32,
    pub inner_radius: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub face: Color,
    pub rim: Color,
    pub minute_ticks: Color,
    pub hour_ticks: Color,
    pub badge_fill: Color,
    pub badge_rim: Color,
    pub date_text: Color,
    pub second_hand: Color,
    pub pivot: Color,
    pub screw: Color,
}

/// Complete description of one skin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceStyle {
    /// Fixed face radius; derived from the display bounds when unset
    #[serde(default)]
    pub face_radius: Option<i32>,
    pub ticks: TickStyle,
    /// Rim circle sits this far outside the face radius
    pub rim_offset: i32,
    pub rim_width: u8,
    pub date_badge: DateBadge,
    pub hands: HandInsets,
    /// Passes shared by the hour and minute hands, drawn widest first
    pub hand_passes: Vec<StrokePass>,
    pub second_width: u8,
    /// Let the minute hand advance with the seconds
    #[serde(default)]
    pub smooth_minute: bool,
    pub pivot: Pivot,
    pub colors: Palette,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::traditional()
    }
}

impl FaceStyle {
    /// Face radius on `bounds`: the fixed radius, or the largest circle inside the margin
    pub fn radius_for(&self, bounds: Rect) -> i32 {
        self.face_radius.unwrap_or_else(|| bounds.w.min(bounds.h) / 2 - FACE_MARGIN)
    }

    /// Check that every radius derived from this style lands on `bounds`
    ///
    /// Insets, tick lengths, pivot and badge sizes may not exceed the face radius, and
    /// the face may not exceed half the narrower display edge.
    pub fn validate(&self, bounds: Rect) -> Result<(), StyleError> {
        let max = bounds.w.min(bounds.h) / 2;
        let radius = self.radius_for(bounds);
        if !(1..=max).contains(&radius) {
            return Err(StyleError::Radius { radius, max });
        }

        let mut lengths = vec![
            ("rim_offset", self.rim_offset),
            ("date_badge.radius", self.date_badge.radius),
            ("hands.hour", self.hands.hour),
            ("hands.minute", self.hands.minute),
            ("hands.second", self.hands.second),
            ("hands.second_tail", self.hands.second_tail),
            ("pivot.outer_radius", self.pivot.outer_radius),
            ("pivot.inner_radius", self.pivot.inner_radius),
        ];
        match self.ticks {
            TickStyle::Ring {
                minute_len,
                hour_len,
                mask_inset,
                ..
            } => lengths.extend([
                ("ticks.minute_len", minute_len),
                ("ticks.hour_len", hour_len),
                ("ticks.mask_inset", mask_inset),
            ]),
            TickStyle::Spokes { mask_inset, .. } => lengths.push(("ticks.mask_inset", mask_inset)),
        }
        for (field, value) in lengths {
            if !(0..=radius).contains(&value) {
                return Err(StyleError::Length { field, value, max: radius });
            }
        }

        let (dx, dy) = self.date_badge.offset;
        for (field, value) in [("date_badge.offset.0", dx), ("date_badge.offset.1", dy)] {
            if !(-radius..=radius).contains(&value) {
                return Err(StyleError::Length { field, value, max: radius });
            }
        }
        Ok(())
    }

    pub fn traditional() -> Self {
        Self {
            face_radius: None,
            ticks: TickStyle::Ring {
                minute_len: 4,
                minute_width: 1,
                hour_len: 12,
                hour_width: 3,
                mask_inset: 9,
            },
            rim_offset: 2,
            rim_width: 5,
            date_badge: DateBadge {
                offset: (30, 29),
                radius: 10,
                align: TextAlign::Center,
                padding: DayPadding::Unpadded,
            },
            hands: HandInsets {
                hour: 40,
                minute: 13,
                second: 7,
                second_tail: 9,
            },
            hand_passes: vec![
                StrokePass::new(5, Color::BLACK),
                StrokePass::new(3, Color::WHITE),
                StrokePass::new(1, Color::LIGHT_GRAY),
            ],
            second_width: 1,
            smooth_minute: false,
            pivot: Pivot {
                outer_radius: 3,
                inner_radius: 2,
            },
            colors: Palette {
                background: Color::BLACK,
                face: Color::DARK_GRAY,
                rim: Color::WHITE,
                minute_ticks: Color::LIGHT_GRAY,
                hour_ticks: Color::WHITE,
                badge_fill: Color::BLACK,
                badge_rim: Color::LIGHT_GRAY,
                date_text: Color::LIGHT_GRAY,
                second_hand: Color::RAJAH,
                pivot: Color::RAJAH,
                screw: Color::BLACK,
            },
        }
    }

    pub fn classic() -> Self {
        Self {
            face_radius: None,
            ticks: TickStyle::Spokes {
                width: 2,
                mask_inset: 10,
            },
            rim_offset: 2,
            rim_width: 5,
            date_badge: DateBadge {
                offset: (33, 0),
                radius: 10,
                align: TextAlign::Left,
                padding: DayPadding::SpacePadded,
            },
            hands: HandInsets {
                hour: 40,
                minute: 13,
                second: 7,
                second_tail: 0,
            },
            hand_passes: vec![
                StrokePass::new(5, Color::BLACK),
                StrokePass::new(3, Color::WHITE),
            ],
            second_width: 1,
            smooth_minute: false,
            pivot: Pivot {
                outer_radius: 3,
                inner_radius: 2,
            },
            colors: Palette {
                background: Color::BLACK,
                face: Color::LIGHT_GRAY,
                rim: Color::DARK_GRAY,
                minute_ticks: Color::BLACK,
                hour_ticks: Color::BLACK,
                badge_fill: Color::WHITE,
                badge_rim: Color::BLACK,
                date_text: Color::BLACK,
                second_hand: Color::RED,
                pivot: Color::RED,
                screw: Color::BLACK,
            },
        }
    }
}
