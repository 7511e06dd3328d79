//! Errors produced while parsing HTML source.

use thiserror::Error;

/// A fatal HTML syntax error.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlParseError {
    /// A specific character was required but a different one was found.
    #[error("expected '{expected}' at byte {position}, found '{found}'")]
    UnexpectedCharacter {
        /// The character the grammar required.
        expected: char,
        /// The character actually present.
        found: char,
        /// Byte offset of `found`.
        position: usize,
    },

    /// Input ended while a construct was still open.
    #[error("unexpected end of input at byte {position}, expected '{expected}'")]
    UnexpectedEof {
        /// The character the grammar required next.
        expected: char,
        /// Length of the input.
        position: usize,
    },

    /// A tag or attribute name was required but none was present.
    #[error("expected a name at byte {position}")]
    MissingName {
        /// Byte offset where the name should start.
        position: usize,
    },

    /// `</x>` closed an element opened as `<y>`.
    #[error("closing tag </{found}> at byte {position} does not match <{expected}>")]
    MismatchedClosingTag {
        /// Tag name of the open element.
        expected: String,
        /// Tag name found in the closing tag.
        found: String,
        /// Byte offset of the closing tag.
        position: usize,
    },

    /// An attribute value's opening quote was never closed.
    #[error("unterminated attribute value starting at byte {position}")]
    UnterminatedAttributeValue {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag at byte {position}")]
    StrayClosingTag {
        /// Byte offset of the `</`.
        position: usize,
    },
}
