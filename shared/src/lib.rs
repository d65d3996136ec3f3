//! Shared core for the analog watch faces
//!
//! Time sampling, configuration loading, and the frame renderer: hand angles, polar
//! projection over fixed-point trig, the face compositor and the layered hand
//! renderer, all drawing through the `Surface` trait.

pub mod angles;
pub mod config;
pub mod face;
pub mod geometry;
pub mod hands;
pub mod projector;
pub mod render;
pub mod style;
pub mod surface;
pub mod time_engine;
pub mod trig;

pub use angles::HandAngles;
pub use config::{config_dir, config_path, load_config, load_config_from, ConfigError};
pub use geometry::{FaceGeometry, DISPLAY_BOUNDS};
pub use hands::HandSpec;
pub use projector::project;
pub use render::{DayLabel, RenderContext};
pub use style::{FaceStyle, Skin, StyleError};
pub use surface::{Color, CommandLog, DrawCommand, Rect, ScreenPoint, Surface, TextAlign, TextOverflow};
pub use time_engine::{
    parse_timezone, sample_at, sample_in, sample_local, ClockReading, Tick, Ticker, TimeUnits,
};
pub use trig::{FixedTrig, FloatTrig, Trig, TRIG_MAX_RATIO, TURN_MAX};
