//! CSS Parser loosely following [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! The accepted grammar is a small subset of CSS:
//!
//! ```text
//! stylesheet  := (ws rule)* ws
//! rule        := selector (ws "," ws selector)* ws "{" declaration* ws "}"
//! selector    := ( "*" | ident | "#" ident | "." ident )+
//! declaration := ws ident ws ":" ws value ws ";"
//! value       := length | color | ident
//! length      := digit+ ("." digit+)? "px"
//! color       := "#" hex{6}
//! ident       := [A-Za-z0-9_-]+
//! ```
//!
//! Tokenization and parsing are fused: the parser walks characters directly.
//! Comments are treated as whitespace.

use crate::error::CssParseError;
use crate::selector::Selector;
use crate::style::{ColorValue, Unit, Value};

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The property value.
    pub value: Value,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// "A selector list is a comma-separated list of selectors." The rule
    /// applies if any of them matches.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block, in source order.
    pub declarations: Vec<Declaration>,
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed CSS stylesheet. Rule order is cascade order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}

/// Parse a stylesheet from source text.
///
/// # Errors
///
/// Returns a [`CssParseError`] for the first malformed construct.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, CssParseError> {
    CSSParser::new(source).parse_stylesheet()
}

/// CSS parser
pub struct CSSParser {
    /// The input being parsed
    input: Vec<char>,
    /// Current position in the input
    position: usize,
}

impl CSSParser {
    /// Create a new CSS parser with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// # Errors
    ///
    /// Returns a [`CssParseError`] for the first malformed construct.
    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, CssParseError> {
        let mut rules = Vec::new();
        loop {
            self.consume_whitespace();
            if self.eof() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        log::debug!("parsed stylesheet with {} rules", rules.len());
        Ok(Stylesheet { rules })
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
    fn parse_rule(&mut self) -> Result<Rule, CssParseError> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;
        Ok(Rule {
            selectors,
            declarations,
        })
    }

    /// [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
    ///
    /// Parse selectors up to (not including) the `{`.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>, CssParseError> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(self.parse_selector()?);
            self.consume_whitespace();
            match self.peek() {
                Some(',') => {
                    let _ = self.consume();
                    self.consume_whitespace();
                }
                Some('{') => break,
                Some(found) => {
                    return Err(CssParseError::UnexpectedCharacter {
                        expected: '{',
                        found,
                        position: self.position,
                    });
                }
                None => return Err(self.eof_error('{')),
            }
        }
        Ok(selectors)
    }

    /// [§ 3.1 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    ///
    /// Parse a compound selector such as `div#main.note`.
    fn parse_selector(&mut self) -> Result<Selector, CssParseError> {
        let start = self.position;
        let mut selector = Selector::default();

        loop {
            match self.peek() {
                Some('#') => {
                    let _ = self.consume();
                    selector.id = Some(self.parse_identifier()?);
                }
                Some('.') => {
                    let _ = self.consume();
                    selector.class.push(self.parse_identifier()?);
                }
                // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
                // Imposes no constraint, so it leaves the tag name empty.
                Some('*') => {
                    let _ = self.consume();
                }
                Some(c) if is_identifier_char(c) => {
                    selector.tag_name = Some(self.parse_identifier()?);
                }
                _ => break,
            }
        }

        if self.position == start {
            return Err(CssParseError::MissingIdentifier { position: start });
        }
        Ok(selector)
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-a-list-of-declarations)
    ///
    /// Parse a `{ ... }` block, consuming both braces.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, CssParseError> {
        self.expect('{')?;
        let mut declarations = Vec::new();
        loop {
            self.consume_whitespace();
            match self.peek() {
                Some('}') => {
                    let _ = self.consume();
                    break;
                }
                None => return Err(self.eof_error('}')),
                Some(_) => {
                    declarations.push(self.parse_declaration()?);
                    self.consume_whitespace();
                    self.expect(';')?;
                }
            }
        }
        Ok(declarations)
    }

    /// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
    ///
    /// Parse `name: value` without the trailing `;`.
    fn parse_declaration(&mut self) -> Result<Declaration, CssParseError> {
        let name = self.parse_identifier()?;
        self.consume_whitespace();
        self.expect(':')?;
        self.consume_whitespace();
        let value = self.parse_value()?;
        Ok(Declaration { name, value })
    }

    /// Parse a length, a hex color or a keyword, chosen by the first character.
    fn parse_value(&mut self) -> Result<Value, CssParseError> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => self.parse_length(),
            Some('#') => self.parse_color(),
            Some(_) => Ok(Value::Keyword(self.parse_identifier()?)),
            None => Err(self.eof_error(';')),
        }
    }

    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    ///
    /// "a <number> immediately followed by a unit identifier"
    fn parse_length(&mut self) -> Result<Value, CssParseError> {
        let mut number = self.consume_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            let _ = self.consume();
            number.push('.');
            number.push_str(&self.consume_while(|c| c.is_ascii_digit()));
        }
        // Digits with an optional fraction always form a valid float.
        let amount: f32 = number.parse().unwrap_or_default();

        let unit_position = self.position;
        let unit = self.consume_while(|c| c.is_ascii_alphabetic() || c == '%');
        if !unit.eq_ignore_ascii_case("px") {
            return Err(CssParseError::UnsupportedUnit {
                unit,
                position: unit_position,
            });
        }
        Ok(Value::Length(amount, Unit::Px))
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    fn parse_color(&mut self) -> Result<Value, CssParseError> {
        let position = self.position;
        self.expect('#')?;
        let text = self.consume_while(|c| c.is_ascii_alphanumeric());
        ColorValue::from_hex(&text)
            .map(Value::Color)
            .ok_or(CssParseError::InvalidColor { text, position })
    }

    /// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
    ///
    /// Parse a non-empty run of identifier characters.
    fn parse_identifier(&mut self) -> Result<String, CssParseError> {
        let position = self.position;
        let identifier = self.consume_while(is_identifier_char);
        if identifier.is_empty() {
            return Err(if self.eof() {
                self.eof_error(';')
            } else {
                CssParseError::MissingIdentifier { position }
            });
        }
        Ok(identifier)
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Consume and return the current character.
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Whether all input has been consumed.
    fn eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consume characters while `test` holds and return them.
    fn consume_while(&mut self, test: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if !test(c) {
                break;
            }
            result.push(c);
            self.position += 1;
        }
        result
    }

    /// Consume whitespace and comments.
    ///
    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    /// "If the next two input code point are U+002F SOLIDUS (/) followed by a
    /// U+002A ASTERISK (*), consume them and all following code points up to
    /// and including the first U+002A ASTERISK (*) followed by a U+002F
    /// SOLIDUS (/), or up to an EOF code point."
    fn consume_whitespace(&mut self) {
        loop {
            let _ = self.consume_while(char::is_whitespace);
            if !(self.peek() == Some('/') && self.peek_at(1) == Some('*')) {
                break;
            }
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        let _ = self.consume();
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    /// Consume `expected` or fail with the offending character and position.
    fn expect(&mut self, expected: char) -> Result<(), CssParseError> {
        let position = self.position;
        match self.consume() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(CssParseError::UnexpectedCharacter {
                expected,
                found,
                position,
            }),
            None => Err(self.eof_error(expected)),
        }
    }

    fn eof_error(&self, expected: char) -> CssParseError {
        CssParseError::UnexpectedEof {
            expected,
            position: self.input.len(),
        }
    }
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// Restricted to ASCII letters, digits, `-` and `_`.
const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
