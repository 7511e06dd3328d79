//! Integration tests for CSS selector matching.

use tessera_css::{Selector, parse_stylesheet};
use tessera_dom::{AttributesMap, ElementData};

fn make_element(tag: &str, id: Option<&str>, classes: &[&str]) -> ElementData {
    let mut attrs = AttributesMap::new();
    if let Some(id_val) = id {
        let _ = attrs.insert("id".to_string(), id_val.to_string());
    }
    if !classes.is_empty() {
        let _ = attrs.insert("class".to_string(), classes.join(" "));
    }
    ElementData {
        tag_name: tag.to_string(),
        attrs,
    }
}

/// Parse a single selector through the stylesheet parser.
fn selector(text: &str) -> Selector {
    let sheet = parse_stylesheet(&format!("{text} {{ }}")).unwrap();
    sheet.rules[0].selectors[0].clone()
}

#[test]
fn test_compound_selector_requires_every_part() {
    let selector = selector("div#wrap.active");

    assert!(!selector.matches(&make_element("div", Some("wrap"), &[])));
    assert!(selector.matches(&make_element("div", Some("wrap"), &["active", "extra"])));
    assert!(!selector.matches(&make_element("span", Some("wrap"), &["active"])));
    assert!(!selector.matches(&make_element("div", Some("other"), &["active"])));
}

#[test]
fn test_class_order_does_not_matter() {
    let selector = selector(".a.b");
    assert!(selector.matches(&make_element("p", None, &["b", "a"])));
    assert!(!selector.matches(&make_element("p", None, &["a"])));
}

#[test]
fn test_class_without_attribute_never_matches() {
    assert!(!selector(".note").matches(&make_element("p", None, &[])));
}

#[test]
fn test_universal_and_empty_tag_are_equivalent() {
    let universal = selector("*");
    let class_only = selector(".x");

    assert_eq!(universal.tag_name, None);
    assert_eq!(class_only.tag_name, None);
    assert!(universal.matches(&make_element("anything", None, &[])));
    assert!(selector("*.x").matches(&make_element("em", None, &["x"])));
    assert_eq!(selector("*.x"), class_only);
}

#[test]
fn test_tag_match_is_exact() {
    assert!(!selector("DIV").matches(&make_element("div", None, &[])));
}

#[test]
fn test_id_with_hyphen_and_underscore() {
    let selector = selector("#main-content_2");
    assert_eq!(selector.id.as_deref(), Some("main-content_2"));
    assert!(selector.matches(&make_element("section", Some("main-content_2"), &[])));
}
