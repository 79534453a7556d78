//! Front-end configuration.
//!
//! Defaults mirror a 640x640 window with Unicode glyphs and coordinate
//! labels. Each field can be overridden from the environment; unparsable
//! values are logged and ignored.

use tracing::warn;

pub const ENV_BOARD_PIXELS: &str = "DIDDY_BOARD_PIXELS";
pub const ENV_SHOW_COORDINATES: &str = "DIDDY_SHOW_COORDINATES";
pub const ENV_UNICODE: &str = "DIDDY_UNICODE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side length in pixels of the square drawing surface.
    pub board_pixels: u32,
    pub show_coordinates: bool,
    /// Unicode chess glyphs when true, two-letter tokens (`wp`, `bk`) otherwise.
    pub unicode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_pixels: 640,
            show_coordinates: true,
            unicode: true,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `DIDDY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BOARD_PIXELS) {
            match raw.trim().parse::<u32>() {
                Ok(pixels) if pixels >= 8 => config.board_pixels = pixels,
                _ => warn!(key = ENV_BOARD_PIXELS, value = %raw, "ignoring invalid board size"),
            }
        }
        if let Some(raw) = lookup(ENV_SHOW_COORDINATES) {
            match parse_flag(&raw) {
                Some(flag) => config.show_coordinates = flag,
                None => warn!(key = ENV_SHOW_COORDINATES, value = %raw, "ignoring invalid flag"),
            }
        }
        if let Some(raw) = lookup(ENV_UNICODE) {
            match parse_flag(&raw) {
                Some(flag) => config.unicode = flag,
                None => warn!(key = ENV_UNICODE, value = %raw, "ignoring invalid flag"),
            }
        }

        config
    }

    /// Pixel width of one square.
    #[inline]
    pub fn square_pixels(&self) -> u32 {
        self.board_pixels / 8
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
