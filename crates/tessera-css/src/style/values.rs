//! CSS value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// [§ 2 Value Definition Syntax](https://www.w3.org/TR/css-values-4/#value-defs)
///
/// A specified value as written in a declaration. Only three shapes exist:
/// an identifier, a length, or a hex color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
    ///
    /// Examples: `block`, `auto`, `inline`. The empty keyword stands for
    /// "no value".
    Keyword(String),
    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    ///
    /// "Lengths refer to distance measurements"
    Length(f32, Unit),
    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    Color(ColorValue),
}

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    /// [§ 5.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
}

/// [§ 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-type)
///
/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The six-digit RGB notation (#RRGGBB)" is the only form accepted here.
    /// The leading `#` is optional. The result is fully opaque.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b, a: 255 })
    }
}

impl Value {
    /// The `auto` keyword.
    #[must_use]
    pub fn auto() -> Self {
        Self::Keyword("auto".to_string())
    }

    /// A `px` length.
    #[must_use]
    pub const fn px(amount: f32) -> Self {
        Self::Length(amount, Unit::Px)
    }

    /// The empty keyword returned for absent properties.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Keyword(String::new())
    }

    /// Returns `true` for the empty keyword.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Keyword(k) if k.is_empty())
    }

    /// Returns `true` for the `auto` keyword.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(k) if k == "auto")
    }

    /// Returns the keyword text, if this is a keyword.
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(k) => Some(k),
            Self::Length(..) | Self::Color(_) => None,
        }
    }

    /// [§ 5.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// The size in pixels. Keywords and colors have no size and yield 0.
    #[must_use]
    pub const fn to_px(&self) -> f32 {
        match self {
            Self::Length(amount, Unit::Px) => *amount,
            Self::Keyword(_) | Self::Color(_) => 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(k) => write!(f, "{k}"),
            Self::Length(amount, unit) => write!(f, "{amount}{unit}"),
            Self::Color(c) => write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_px() {
        assert!((Value::px(12.5).to_px() - 12.5).abs() < f32::EPSILON);
        assert!(Value::auto().to_px().abs() < f32::EPSILON);
        assert!(Value::Color(ColorValue { r: 1, g: 2, b: 3, a: 255 }).to_px().abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_hex_six_digits_only() {
        assert_eq!(
            ColorValue::from_hex("#cc0000"),
            Some(ColorValue { r: 0xcc, g: 0, b: 0, a: 255 })
        );
        assert_eq!(ColorValue::from_hex("#fff"), None);
        assert_eq!(ColorValue::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_display_round_trips_source_form() {
        assert_eq!(Value::px(10.0).to_string(), "10px");
        assert_eq!(Value::auto().to_string(), "auto");
        assert_eq!(
            Value::Color(ColorValue { r: 0xcc, g: 0xcc, b: 0xcc, a: 255 }).to_string(),
            "#cccccc"
        );
    }

    #[test]
    fn test_empty_keyword() {
        assert!(Value::empty().is_empty());
        assert!(!Value::auto().is_empty());
        assert!(!Value::px(0.0).is_empty());
    }
}
