//! Analog Watchface
//!
//! Emulates a 144x168 watch display in a desktop window and redraws the analog face
//! every second from the wall clock.

mod drawing;

use std::path::PathBuf;
use std::time::Instant;

use chrono_tz::Tz;
use log::{debug, error, info, trace, warn};
use nannou::prelude::*;
use nannou::text::Font;
use serde::{Deserialize, Serialize};
use shared::{
    parse_timezone, sample_in, sample_local, ClockReading, FaceStyle, RenderContext, Skin, Ticker,
    DISPLAY_BOUNDS,
};

use crate::drawing::NannouSurface;

const CLOCK_NAME: &str = "analog_watchface";
const DEFAULT_SCALE: u32 = 3;

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

/// Configuration file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    skin: Skin,
    /// Window pixels per display pixel
    scale: u32,
    /// IANA zone name; system local time when unset
    timezone: Option<String>,
    /// TTF file for the date numerals; built-in font when unset
    font_path: Option<PathBuf>,
    /// Full style replacing the skin preset
    style: Option<FaceStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            scale: DEFAULT_SCALE,
            timezone: None,
            font_path: None,
            style: None,
        }
    }
}

impl Config {
    fn face_style(&self) -> FaceStyle {
        self.style.clone().unwrap_or_else(|| self.skin.style())
    }

    /// Name logged at startup: the skin, or "custom" for a style override
    fn style_name(&self) -> String {
        match self.style {
            Some(_) => "custom".to_string(),
            None => self.skin.to_string(),
        }
    }

    fn scale(&self) -> u32 {
        self.scale.clamp(1, 8)
    }

    /// Drop a style override that does not fit the display
    fn checked(mut self) -> Self {
        if let Some(style) = &self.style {
            if let Err(e) = style.validate(DISPLAY_BOUNDS) {
                warn!("Ignoring style override: {}; using the {} skin", e, self.skin);
                self.style = None;
            }
        }
        self
    }
}

/// Startup failures that end the process
#[derive(Debug)]
enum ShellError {
    FontLoad { path: PathBuf, reason: String },
    Window(String),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::FontLoad { path, reason } => {
                write!(f, "Failed to load font {}: {}", path.display(), reason)
            }
            ShellError::Window(reason) => write!(f, "Failed to open window: {}", reason),
        }
    }
}

impl std::error::Error for ShellError {}

/// Application state
struct Model {
    /// Face renderer for the window
    ctx: RenderContext,
    /// Detects second and day changes; its last reading is what every frame shows
    ticker: Ticker,
    timezone: Option<Tz>,
    font: Font,
    scale: f32,
}

fn load_config() -> Config {
    match shared::load_config::<Config>(CLOCK_NAME) {
        Ok(Some(config)) => config.checked(),
        Ok(None) => Config::default(),
        Err(e) => {
            warn!("Ignoring config: {}", e);
            Config::default()
        }
    }
}

fn resolve_timezone(config: &Config) -> Option<Tz> {
    let name = config.timezone.as_deref()?;
    match parse_timezone(name) {
        Ok(tz) => Some(tz),
        Err(e) => {
            warn!("{}; using system local time", e);
            None
        }
    }
}

fn load_font(config: &Config) -> Result<Font, ShellError> {
    match &config.font_path {
        Some(path) => nannou::text::font::from_file(path).map_err(|e| ShellError::FontLoad {
            path: path.clone(),
            reason: format!("{:?}", e),
        }),
        None => Ok(nannou::text::font::default_notosans()),
    }
}

fn sample(timezone: Option<Tz>) -> ClockReading {
    match timezone {
        Some(tz) => sample_in(tz),
        None => sample_local(),
    }
}

fn open_window(app: &App, scale: u32) -> Result<(), ShellError> {
    app.new_window()
        .title("Analog Watchface")
        .size(DISPLAY_BOUNDS.w as u32 * scale, DISPLAY_BOUNDS.h as u32 * scale)
        .resizable(false)
        .view(view)
        .build()
        .map(|_| ())
        .map_err(|e| ShellError::Window(format!("{:?}", e)))
}

fn fatal(e: ShellError) -> ! {
    error!("{}", e);
    std::process::exit(1);
}

fn model(app: &App) -> Model {
    let config = load_config();
    let scale = config.scale();

    if let Err(e) = open_window(app, scale) {
        fatal(e);
    }
    let font = load_font(&config).unwrap_or_else(|e| fatal(e));

    let timezone = resolve_timezone(&config);
    let mut ticker = Ticker::new();
    let reading = sample(timezone);
    let mut ctx = RenderContext::new(DISPLAY_BOUNDS, config.face_style(), reading.day_of_month);
    if let Some(tick) = ticker.advance(reading) {
        ctx.on_tick(&tick);
    }

    info!(
        "Started: style={} scale={} zone={}",
        config.style_name(),
        scale,
        timezone.map(|tz| tz.name()).unwrap_or("local")
    );

    Model {
        ctx,
        ticker,
        timezone,
        font,
        scale: scale as f32,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let reading = sample(model.timezone);
    if let Some(tick) = model.ticker.advance(reading) {
        debug!("tick {} units={:?}", tick.reading.format_time(), tick.units_changed);
        model.ctx.on_tick(&tick);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let started = Instant::now();
    let draw = app.draw();

    if let Some(reading) = model.ticker.last() {
        let mut surface = NannouSurface::new(&draw, DISPLAY_BOUNDS, model.scale, &model.font);
        model.ctx.render(&mut surface, &reading);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", e);
    }
    trace!("frame took {:?}", started.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.face_style(), FaceStyle::traditional());
    }

    #[test]
    fn test_config_selects_skin() {
        let config: Config = toml::from_str("skin = \"classic\"\nscale = 40\n").unwrap();
        assert_eq!(config.face_style(), FaceStyle::classic());
        assert_eq!(config.scale(), 8);
    }

    #[test]
    fn test_style_override_is_named_custom() {
        let config: Config = toml::from_str("skin = \"classic\"").unwrap();
        assert_eq!(config.style_name(), "classic");

        let config = Config {
            style: Some(FaceStyle::classic()),
            ..Config::default()
        }
        .checked();
        assert_eq!(config.style_name(), "custom");
        assert_eq!(config.face_style(), FaceStyle::classic());
    }

    #[test]
    fn test_oversized_style_falls_back_to_skin() {
        let oversized = Config {
            skin: Skin::Classic,
            style: Some(FaceStyle {
                face_radius: Some(40_000),
                ..FaceStyle::traditional()
            }),
            ..Config::default()
        };
        let text = toml::to_string(&oversized).unwrap();
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config.style.as_ref().and_then(|s| s.face_radius), Some(40_000));

        let config = config.checked();
        assert!(config.style.is_none());
        assert_eq!(config.face_style(), FaceStyle::classic());
        assert_eq!(config.style_name(), "classic");
    }

    #[test]
    fn test_bad_timezone_falls_back_to_local() {
        let config = Config {
            timezone: Some("Nowhere/Special".to_string()),
            ..Config::default()
        };
        assert!(resolve_timezone(&config).is_none());

        let config = Config {
            timezone: Some("Europe/Paris".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_timezone(&config), Some(chrono_tz::Europe::Paris));
    }

    #[test]
    fn test_missing_font_is_an_error() {
        let config = Config {
            font_path: Some(PathBuf::from("/nonexistent/sans_13.ttf")),
            ..Config::default()
        };
        match load_font(&config) {
            Err(ShellError::FontLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/sans_13.ttf"))
            }
            other => panic!("expected font error, got {:?}", other.map(|_| ())),
        }
    }
}
