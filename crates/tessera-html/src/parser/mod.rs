//! Recursive-descent HTML parser.
//!
//! The grammar accepted here is deliberately tiny:
//!
//! ```text
//! nodes     := (whitespace* node)*            -- stops at EOF or "</"
//! node      := element | text
//! element   := "<" name attribute* ">" nodes "</" name ">"
//! attribute := name "=" ( '"' [^"]* '"' | "'" [^']* "'" )
//! text      := [^<]+
//! name      := [A-Za-z0-9_]+
//! ```

mod helpers;

use tessera_dom::{AttributesMap, Node, NodeType, elem, text};

use crate::error::HtmlParseError;

/// Parse an HTML string into a single root node.
///
/// If the source contains exactly one top-level node it is returned as is.
/// Otherwise the top-level nodes are wrapped in a synthetic `<html>` element.
///
/// # Errors
///
/// Returns an [`HtmlParseError`] for the first malformed construct.
pub fn parse(source: &str) -> Result<Node, HtmlParseError> {
    HTMLParser::new(source).run()
}

/// HTML parser state.
///
/// The cursor lives in the struct, so independent parsers never share state.
pub struct HTMLParser {
    /// Source text.
    input: String,
    /// Byte offset of the next unread character.
    position: usize,
}

impl HTMLParser {
    /// Create a new parser over `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            position: 0,
        }
    }

    /// Parse the whole input and return the document root.
    ///
    /// # Errors
    ///
    /// Returns an [`HtmlParseError`] for the first malformed construct.
    pub fn run(mut self) -> Result<Node, HtmlParseError> {
        let mut nodes = self.parse_nodes()?;

        // parse_nodes() only stops early at "</". At the top level there is
        // no element left to close.
        if !self.eof() {
            return Err(HtmlParseError::StrayClosingTag {
                position: self.position,
            });
        }

        let root = if nodes.len() == 1 {
            nodes.remove(0)
        } else {
            elem("html", AttributesMap::new(), nodes)
        };

        log::debug!("parsed HTML document with {} nodes", root.subtree_len());
        Ok(root)
    }

    /// Parse a sequence of sibling nodes.
    fn parse_nodes(&mut self) -> Result<Vec<Node>, HtmlParseError> {
        let mut nodes = Vec::new();
        loop {
            self.consume_whitespace();
            if self.eof() || self.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    /// Parse a single node: an element if the next character is `<`, text otherwise.
    fn parse_node(&mut self) -> Result<Node, HtmlParseError> {
        if self.next_char() == Some('<') {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    /// Parse an element, its attributes, its children and its closing tag.
    fn parse_element(&mut self) -> Result<Node, HtmlParseError> {
        // Opening tag.
        self.expect('<')?;
        let tag_name = self.parse_name()?;
        let attrs = self.parse_attributes()?;
        self.expect('>')?;

        // Contents.
        let children = self.parse_nodes()?;

        // Closing tag.
        let close_position = self.position;
        self.expect('<')?;
        self.expect('/')?;
        let closing_name = self.parse_name()?;
        if closing_name != tag_name {
            return Err(HtmlParseError::MismatchedClosingTag {
                expected: tag_name,
                found: closing_name,
                position: close_position,
            });
        }
        self.expect('>')?;

        Ok(elem(tag_name, attrs, children))
    }

    /// Parse a tag or attribute name.
    fn parse_name(&mut self) -> Result<String, HtmlParseError> {
        let position = self.position;
        let name = self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
        if name.is_empty() {
            return Err(HtmlParseError::MissingName { position });
        }
        Ok(name)
    }

    /// Parse a list of `name="value"` pairs up to the closing `>`.
    ///
    /// A repeated attribute name keeps the last value.
    fn parse_attributes(&mut self) -> Result<AttributesMap, HtmlParseError> {
        let mut attributes = AttributesMap::new();
        loop {
            self.consume_whitespace();
            match self.next_char() {
                Some('>') => break,
                None => {
                    return Err(HtmlParseError::UnexpectedEof {
                        expected: '>',
                        position: self.position,
                    });
                }
                Some(_) => {
                    let (name, value) = self.parse_attr()?;
                    let _ = attributes.insert(name, value);
                }
            }
        }
        Ok(attributes)
    }

    /// Parse a single `name="value"` pair.
    fn parse_attr(&mut self) -> Result<(String, String), HtmlParseError> {
        let name = self.parse_name()?;
        self.expect('=')?;
        let value = self.parse_attr_value()?;
        Ok((name, value))
    }

    /// Parse a quoted attribute value.
    fn parse_attr_value(&mut self) -> Result<String, HtmlParseError> {
        let position = self.position;
        let open_quote = match self.consume() {
            Some(q @ ('"' | '\'')) => q,
            Some(found) => {
                return Err(HtmlParseError::UnexpectedCharacter {
                    expected: '"',
                    found,
                    position,
                });
            }
            None => {
                return Err(HtmlParseError::UnexpectedEof {
                    expected: '"',
                    position,
                });
            }
        };

        let value = self.consume_while(|c| c != open_quote);
        if self.eof() {
            return Err(HtmlParseError::UnterminatedAttributeValue { position });
        }
        self.expect(open_quote)?;
        Ok(value)
    }

    /// Parse a text node running up to the next `<`.
    fn parse_text(&mut self) -> Node {
        text(self.consume_while(|c| c != '<'))
    }
}

/// Render a node tree as an indented outline, one node per line.
///
/// Elements print as `<tag attr="value">` with attributes sorted by name so
/// output is stable. Text prints quoted with newlines escaped and spaces shown
/// as `·`.
#[must_use]
pub fn format_tree(node: &Node) -> String {
    let mut out = String::new();
    format_node(node, 0, &mut out);
    out
}

fn format_node(node: &Node, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);
    match &node.node_type {
        NodeType::Element(data) => {
            if data.attrs.is_empty() {
                out.push_str(&format!("{prefix}<{}>\n", data.tag_name));
            } else {
                let mut attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect();
                attrs.sort();
                out.push_str(&format!("{prefix}<{} {}>\n", data.tag_name, attrs.join(" ")));
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            out.push_str(&format!("{prefix}\"{display}\"\n"));
        }
    }
    for child in &node.children {
        format_node(child, indent + 1, out);
    }
}

/// Print a node tree to stdout (see [`format_tree`]).
pub fn print_tree(node: &Node) {
    print!("{}", format_tree(node));
}
