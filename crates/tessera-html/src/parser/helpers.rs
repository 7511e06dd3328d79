//! Cursor helpers for the HTML parser.
//!
//! This module contains the input-handling primitives the grammar rules are
//! written against:
//! - Lookahead ("the next input character", "the next few characters are")
//! - Consumption ("consume the next input character", consume-while)
//! - Expectation (consume a required character or fail with a position)

use super::HTMLParser;
use crate::error::HtmlParseError;

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLParser {
    /// Returns the character at the current position without consuming it.
    pub(super) fn next_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.next_char()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// "If the next few characters are..."
    pub(super) fn starts_with(&self, target: &str) -> bool {
        self.input[self.position..].starts_with(target)
    }

    /// Whether all input has been consumed.
    pub(super) fn eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consume characters while `test` holds and return them.
    pub(super) fn consume_while(&mut self, test: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(c) = self.next_char() {
            if !test(c) {
                break;
            }
            result.push(c);
            self.position += c.len_utf8();
        }
        result
    }

    /// Consume and discard zero or more whitespace characters.
    pub(super) fn consume_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }

    /// Consume `expected` or fail with the offending character and position.
    pub(super) fn expect(&mut self, expected: char) -> Result<(), HtmlParseError> {
        let position = self.position;
        match self.consume() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(HtmlParseError::UnexpectedCharacter {
                expected,
                found,
                position,
            }),
            None => Err(HtmlParseError::UnexpectedEof { expected, position }),
        }
    }
}
