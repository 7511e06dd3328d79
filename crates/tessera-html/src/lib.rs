//! HTML parser for the Tessera engine.
//!
//! # Scope
//!
//! This crate turns a well-formed subset of HTML into a [`tessera_dom::Node`]
//! tree:
//! - Elements with a matching closing tag (`<p>...</p>`)
//! - Quoted attributes (`class="a b"`, `id='main'`)
//! - Text runs
//!
//! Parsing is strict: the first malformed construct aborts with an
//! [`HtmlParseError`] and no partial tree is returned.
//!
//! # Not Yet Implemented
//!
//! - Comments and DOCTYPE
//! - Void and self-closing elements (`<br>`, `<img/>`)
//! - Character references (`&amp;`)
//! - Unquoted attribute values
//! - Implied end tags and error recovery

/// Parse errors.
pub mod error;
/// Recursive-descent parser and tree printing.
pub mod parser;

pub use error::HtmlParseError;
pub use parser::{HTMLParser, format_tree, parse, print_tree};
