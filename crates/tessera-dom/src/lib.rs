//! Document tree for the Tessera engine.
//!
//! This crate provides the owned node tree produced by the HTML parser and
//! consumed, read-only, by style resolution. The shape loosely follows the
//! [DOM Living Standard](https://dom.spec.whatwg.org/) but keeps only what the
//! layout pipeline needs: elements with attributes, and text.
//!
//! # Design
//!
//! Each [`Node`] owns its children directly. Later stages (the style tree and
//! the layout tree) borrow nodes instead of copying them, so the document must
//! outlive every tree derived from it.

use std::collections::{HashMap, HashSet};

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    ///
    /// Always empty for text nodes.
    pub children: Vec<Node>,

    /// "Each node has an associated node type"
    pub node_type: NodeType,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(String),
}

/// Element-specific data.
///
/// NOTE: We only store the local name and attributes. Namespaces and custom
/// element state are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    ///
    /// A missing attribute yields the empty set.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map(|classlist| classlist.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

impl Node {
    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Text(data) => Some(data.as_str()),
            NodeType::Element(_) => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

// Constructor functions for convenience:

/// Create a text node. Text nodes never have children.
#[must_use]
pub fn text(data: impl Into<String>) -> Node {
    Node {
        children: Vec::new(),
        node_type: NodeType::Text(data.into()),
    }
}

/// Create an element node with the given attributes and children.
#[must_use]
pub fn elem(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Node>) -> Node {
    Node {
        children,
        node_type: NodeType::Element(ElementData {
            tag_name: tag_name.into(),
            attrs,
        }),
    }
}
