//! CSS cascade and the style tree
//!
//! This module implements a reduced form of
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/):
//! matching rules apply in stylesheet order and the last declaration wins.
//! Specificity, origins and inheritance are not modelled.

use std::collections::HashMap;

use tessera_dom::{ElementData, Node, NodeType};

use crate::parser::{Rule, Stylesheet};
use crate::style::{Display, Value};

/// Map from property name to specified value.
pub type PropertyMap = HashMap<String, Value>;

/// A document node paired with its specified values.
///
/// The style tree mirrors the document tree one to one and borrows it, so
/// the document must outlive the style tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleNode<'a> {
    /// The document node this style belongs to.
    pub node: &'a Node,
    /// Specified values after the cascade. Empty for text nodes.
    pub specified_values: PropertyMap,
    /// One style node per document child, in document order.
    pub children: Vec<StyleNode<'a>>,
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// Build the style tree for `root` and everything below it.
#[must_use]
pub fn style_tree<'a>(root: &'a Node, stylesheet: &Stylesheet) -> StyleNode<'a> {
    StyleNode {
        node: root,
        specified_values: specified_values(root, stylesheet),
        children: root
            .children
            .iter()
            .map(|child| style_tree(child, stylesheet))
            .collect(),
    }
}

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Compute the specified values for a single node.
///
/// "The last declaration in document order wins." Rules are applied in
/// stylesheet order, declarations in rule order, and each one overwrites any
/// earlier value for the same property.
#[must_use]
pub fn specified_values(node: &Node, stylesheet: &Stylesheet) -> PropertyMap {
    let mut values = PropertyMap::new();
    let NodeType::Element(element) = &node.node_type else {
        return values;
    };
    for rule in matching_rules(element, stylesheet) {
        for declaration in &rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    values
}

/// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
///
/// Rules with at least one selector matching `element`, in stylesheet order.
pub fn matching_rules<'s>(
    element: &ElementData,
    stylesheet: &'s Stylesheet,
) -> impl Iterator<Item = &'s Rule> {
    stylesheet
        .rules
        .iter()
        .filter(|rule| rule.selectors.iter().any(|selector| selector.matches(element)))
}

impl StyleNode<'_> {
    /// The specified value of `name`, or the empty keyword if there is none.
    #[must_use]
    pub fn value(&self, name: &str) -> Value {
        self.specified_values
            .get(name)
            .cloned()
            .unwrap_or_else(Value::empty)
    }

    /// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    ///
    /// See [`Display::from_value`].
    #[must_use]
    pub fn display(&self) -> Display {
        self.specified_values
            .get("display")
            .map_or(Display::Inline, Display::from_value)
    }

    /// Look up `name`, then the shorthand `fallback_name`, then `default`.
    ///
    /// Used for longhands such as `margin-left` that fall back to the
    /// `margin` shorthand.
    #[must_use]
    pub fn lookup(&self, name: &str, fallback_name: &str, default: &Value) -> Value {
        [name, fallback_name]
            .into_iter()
            .map(|property| self.value(property))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| default.clone())
    }

    /// Tag name of the underlying element, if it is one.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.node.as_element().map(|data| data.tag_name.as_str())
    }
}
