//! Color leaves and the lenient hex/rgba conversions used by the editor.
//!
//! A leaf is either a solid `#rrggbb` color or an alpha-blended
//! `rgba(r, g, b, a)` color. The string helpers at the bottom of this module
//! never fail: malformed input falls back to black.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ThemeError;

const FALLBACK_HEX: &str = "#000000";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb(red, green, blue)
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_u32(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorValue {
    Hex(Rgb),
    Rgba(Rgb, f64),
}

impl ColorValue {
    pub const fn from_u32(value: u32) -> Self {
        Self::Hex(Rgb::from_u32(value))
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Self::Hex(rgb) | Self::Rgba(rgb, _) => rgb,
        }
    }

    pub fn alpha(self) -> Option<f64> {
        match self {
            Self::Hex(_) => None,
            Self::Rgba(_, alpha) => Some(alpha),
        }
    }

    pub fn is_alpha(self) -> bool {
        matches!(self, Self::Rgba(..))
    }

    /// Replaces the color channels, keeping the alpha of a blended value.
    pub fn with_rgb(self, rgb: Rgb) -> Self {
        match self {
            Self::Hex(_) => Self::Hex(rgb),
            Self::Rgba(_, alpha) => Self::Rgba(rgb, alpha),
        }
    }

    /// Solid equivalent shown in the editor's hex field.
    pub fn display_hex(self) -> String {
        self.rgb().hex()
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(rgb) => write!(formatter, "#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2),
            Self::Rgba(rgb, alpha) => {
                write!(formatter, "rgba({}, {}, {}, {alpha})", rgb.0, rgb.1, rgb.2)
            }
        }
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if let Some(rgb) = parse_hex(trimmed) {
            return Ok(Self::Hex(rgb));
        }
        let invalid = || ThemeError::InvalidColor(text.to_string());
        let (rgb, alpha) = parse_rgb_function(trimmed).ok_or_else(invalid)?;
        match alpha {
            None => Ok(Self::Hex(rgb)),
            Some(alpha) => {
                let alpha = parse_alpha(alpha).ok_or_else(invalid)?;
                Ok(Self::Rgba(rgb, alpha))
            }
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

fn parse_hex(text: &str) -> Option<Rgb> {
    if !is_valid_hex(text) {
        return None;
    }
    Some(Rgb(
        channel(text, 1)?,
        channel(text, 3)?,
        channel(text, 5)?,
    ))
}

fn channel(text: &str, start: usize) -> Option<u8> {
    text.get(start..start + 2)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
}

/// Splits `rgb(r, g, b)` / `rgba(r, g, b, a)` into channels and the raw alpha text.
fn parse_rgb_function(text: &str) -> Option<(Rgb, Option<&str>)> {
    let arguments = text
        .strip_prefix("rgba(")
        .or_else(|| text.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = arguments.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let component = |part: &str| -> Option<u8> {
        if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let rgb = Rgb(
        component(parts[0])?,
        component(parts[1])?,
        component(parts[2])?,
    );
    Some((rgb, parts.get(3).copied()))
}

fn parse_alpha(text: &str) -> Option<f64> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|alpha| (0.0..=1.0).contains(alpha))
}

pub fn is_valid_hex(text: &str) -> bool {
    text.len() == 7
        && text.starts_with('#')
        && text[1..].bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Converts an rgb/rgba string to its solid hex equivalent.
///
/// Hex input is returned as-is; anything unrecognized becomes `#000000`.
pub fn rgba_to_hex(text: &str) -> String {
    if text.is_empty() {
        return FALLBACK_HEX.to_string();
    }
    if text.starts_with('#') {
        return text.to_string();
    }
    match parse_rgb_function(text.trim()) {
        Some((rgb, _)) => rgb.hex(),
        None => FALLBACK_HEX.to_string(),
    }
}

pub fn hex_to_rgba(text: &str, alpha: f64) -> String {
    if !text.starts_with('#') {
        return format!("rgba(0, 0, 0, {alpha})");
    }
    let red = channel(text, 1).unwrap_or(0);
    let green = channel(text, 3).unwrap_or(0);
    let blue = channel(text, 5).unwrap_or(0);
    format!("rgba({red}, {green}, {blue}, {alpha})")
}

/// Alpha component of an rgba string, 1 when there is none.
pub fn alpha_of(text: &str) -> f64 {
    parse_rgb_function(text.trim())
        .and_then(|(_, alpha)| alpha)
        .and_then(parse_alpha)
        .unwrap_or(1.0)
}

/// Keeps a leading `#` and the hex digits after it.
///
/// Returns `None` when the `#` was removed; such edits are ignored.
pub fn filter_hex_input(text: &str) -> Option<String> {
    let digits = text.strip_prefix('#')?;
    let mut filtered = String::with_capacity(text.len());
    filtered.push('#');
    filtered.extend(digits.chars().filter(char::is_ascii_hexdigit));
    Some(filtered)
}
