//! CSS selector representation and matching
//!
//! Only compound selectors built from type, universal, ID and class
//! selectors are supported, per
//! [Selectors Level 4 § 5-6](https://www.w3.org/TR/selectors-4/#elemental-selectors).
//! There are no combinators and no specificity: rules apply in stylesheet
//! order.

use std::fmt;

use tessera_dom::ElementData;

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Example: `div#main.note.wide`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// `None` means no constraint. The universal selector `*` also parses
    /// to `None`.
    pub tag_name: Option<String>,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    pub id: Option<String>,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Every listed class must be present on the element.
    pub class: Vec<String>,
}

impl Selector {
    /// A type selector such as `div`.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// "A selector is said to match an element when..." every simple
    /// selector in the compound matches it:
    /// - the tag name is unconstrained or equal to the element's;
    /// - the ID is unconstrained or equal to the element's `id` attribute;
    /// - each class appears in the element's `class` attribute.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
        if self
            .tag_name
            .as_ref()
            .is_some_and(|name| *name != element.tag_name)
        {
            return false;
        }

        // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
        // "An ID selector represents an element instance that has an identifier
        // that matches the identifier in the ID selector."
        if self
            .id
            .as_ref()
            .is_some_and(|id| element.id() != Some(id.as_str()))
        {
            return false;
        }

        // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
        if self.class.is_empty() {
            return true;
        }
        let element_classes = element.classes();
        self.class
            .iter()
            .all(|class| element_classes.contains(class.as_str()))
    }

    /// Returns `true` if this selector imposes no condition at all.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.tag_name.is_none() && self.id.is_none() && self.class.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return write!(f, "*");
        }
        if let Some(tag) = &self.tag_name {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.class {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}
