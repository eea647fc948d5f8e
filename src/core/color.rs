//! Deterministic namespace colors
//!
//! Each namespace gets a 24-bit color taken from the first three bytes of
//! its MD5 digest, so the same namespace is tinted identically across runs
//! and processes.

use md5::{Digest, Md5};

/// Escape sequence resetting all terminal attributes.
#[cfg(feature = "color")]
const RESET: &str = "\x1b[0m";

/// An RGB color derived from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Derive a color from `s`.
    pub fn for_str(s: &str) -> Self {
        let digest = Md5::digest(s.as_bytes());
        Self {
            r: digest[0],
            g: digest[1],
            b: digest[2],
        }
    }

    /// Wrap `text` in the truecolor foreground escape for this color.
    ///
    /// Always the 24-bit form, independent of `COLORTERM` or terminal
    /// detection; enabling color is decided by `DEBUG_COLOR` alone.
    #[cfg(feature = "color")]
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[38;2;{};{};{}m{}{}", self.r, self.g, self.b, text, RESET)
    }

    #[cfg(not(feature = "color"))]
    pub fn paint(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Shorthand for [`Color::for_str`].
pub fn color_for(s: &str) -> Color {
    Color::for_str(s)
}

/// Decides how namespace and delay text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colorizer {
    /// Text passes through unchanged.
    #[default]
    Plain,
    /// Text is wrapped in the given color.
    Tinted(Color),
}

impl Colorizer {
    /// Colorizer tinted with the color of `namespace`.
    pub fn for_namespace(namespace: &str) -> Self {
        Colorizer::Tinted(Color::for_str(namespace))
    }

    pub fn colorize(&self, text: &str) -> String {
        match self {
            Colorizer::Plain => text.to_string(),
            Colorizer::Tinted(color) => color.paint(text),
        }
    }

    pub fn is_tinted(&self) -> bool {
        matches!(self, Colorizer::Tinted(_))
    }
}
