//! The `display` property
//!
//! [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumString};

use tessera_common::warning::warn_once;

use super::values::Value;

/// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
///
/// The subset of display values the box generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    /// "This value causes an element to generate a block box."
    Block,
    /// "This value causes an element to generate one or more inline boxes."
    Inline,
    /// "This value causes an element to not appear in the formatting
    /// structure (i.e., in visual media the element generates no boxes and
    /// has no effect on layout). Descendant elements do not generate any
    /// boxes either"
    None,
}

impl Display {
    /// Interpret a specified `display` value.
    ///
    /// [§ 9.2.4](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    /// "Initial: inline"
    ///
    /// Absent values, lengths and colors fall back to the initial value. An
    /// unknown keyword falls back too, with a one-time warning.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Keyword(keyword) if keyword.is_empty() => Self::Inline,
            Value::Keyword(keyword) => keyword.parse().unwrap_or_else(|_| {
                warn_once(
                    "CSS",
                    &format!("unsupported display value '{keyword}', treating as inline"),
                );
                Self::Inline
            }),
            Value::Length(..) | Value::Color(_) => Self::Inline,
        }
    }
}
