//! Auto-or-length values used during width resolution.

use crate::style::Value;

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoOr {
    /// The value is 'auto' and must be resolved during layout.
    Auto,
    /// The value is a specific length in pixels.
    Length(f32),
}

impl AutoOr {
    /// Classify a specified value. Only the `auto` keyword is `Auto`; every
    /// other value contributes its pixel size (0 for non-lengths).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if value.is_auto() {
            Self::Auto
        } else {
            Self::Length(value.to_px())
        }
    }

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Get the length value, or `default` if 'auto'.
    #[must_use]
    pub const fn to_px_or(self, default: f32) -> f32 {
        match self {
            Self::Length(v) => v,
            Self::Auto => default,
        }
    }
}
