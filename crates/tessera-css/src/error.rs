//! Errors for stylesheet parsing and layout tree construction.

use thiserror::Error;

/// A fatal CSS syntax error.
///
/// Positions are character offsets into the stylesheet source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssParseError {
    /// A specific character was required but a different one was found.
    #[error("expected '{expected}' at offset {position}, found '{found}'")]
    UnexpectedCharacter {
        /// The character the grammar required.
        expected: char,
        /// The character actually present.
        found: char,
        /// Offset of `found`.
        position: usize,
    },

    /// Input ended inside a rule.
    #[error("unexpected end of stylesheet at offset {position}, expected '{expected}'")]
    UnexpectedEof {
        /// The character the grammar required next.
        expected: char,
        /// Length of the input.
        position: usize,
    },

    /// An identifier (selector part, property name or keyword) was required.
    #[error("expected an identifier at offset {position}")]
    MissingIdentifier {
        /// Offset where the identifier should start.
        position: usize,
    },

    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    ///
    /// A length carried a unit other than `px`.
    #[error("unsupported unit '{unit}' at offset {position}")]
    UnsupportedUnit {
        /// The unit text as written (empty for a bare number).
        unit: String,
        /// Offset of the unit.
        position: usize,
    },

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// A `#` color was not six hexadecimal digits.
    #[error("invalid color '#{text}' at offset {position}")]
    InvalidColor {
        /// The characters following `#`.
        text: String,
        /// Offset of the `#`.
        position: usize,
    },
}

/// A fatal error while building or laying out the box tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    ///
    /// "none: This value causes an element to not appear in the formatting
    /// structure". The document root has to generate a box.
    #[error("root element has display: none")]
    RootDisplayNone,

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Anonymous boxes have no element and therefore no style node.
    #[error("anonymous block box has no style node")]
    AnonymousStyleAccess,
}
