//! Integration tests for the HTML parser.

use tessera_dom::{Node, NodeType};
use tessera_html::{HtmlParseError, parse};

/// Helper to get element by tag name (first match, depth-first)
fn find_element<'a>(node: &'a Node, tag: &str) -> Option<&'a Node> {
    if let Some(data) = node.as_element()
        && data.tag_name == tag
    {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_element(child, tag))
}

/// Helper to get text content of a node (concatenated)
fn text_content(node: &Node) -> String {
    match &node.node_type {
        NodeType::Text(data) => data.clone(),
        NodeType::Element(_) => node.children.iter().map(text_content).collect(),
    }
}

#[test]
fn test_single_element_is_root() {
    let root = parse("<div><p>a</p></div>").unwrap();

    let data = root.as_element().expect("root should be an element");
    assert_eq!(data.tag_name, "div");
    assert_eq!(root.children.len(), 1);

    let p = &root.children[0];
    assert_eq!(p.as_element().unwrap().tag_name, "p");
    assert_eq!(p.children.len(), 1);
    assert_eq!(p.children[0].as_text(), Some("a"));
}

#[test]
fn test_multiple_top_level_nodes_wrapped_in_html() {
    let root = parse("<h1>Title</h1><p>Body</p>").unwrap();

    let data = root.as_element().unwrap();
    assert_eq!(data.tag_name, "html");
    assert!(data.attrs.is_empty());
    assert_eq!(root.children.len(), 2);
}

#[test]
fn test_empty_input_is_empty_html() {
    let root = parse("").unwrap();
    assert_eq!(root.as_element().unwrap().tag_name, "html");
    assert!(root.children.is_empty());
}

#[test]
fn test_attributes_both_quote_styles() {
    let root = parse(r#"<div id="main" class='note wide'></div>"#).unwrap();
    let data = root.as_element().unwrap();

    assert_eq!(data.id(), Some("main"));
    let classes = data.classes();
    assert!(classes.contains("note"));
    assert!(classes.contains("wide"));
}

#[test]
fn test_attribute_value_may_contain_other_quote() {
    let root = parse(r#"<a title='say "hi"'></a>"#).unwrap();
    assert_eq!(
        root.as_element().unwrap().attrs.get("title").map(String::as_str),
        Some(r#"say "hi""#)
    );
}

#[test]
fn test_nested_text_and_whitespace() {
    let html = "<html>\n  <body>\n    <h1>Title</h1>\n    <div id=\"main\" class=\"test\">\n      <p>Hello <em>world</em>!</p>\n    </div>\n  </body>\n</html>";
    let root = parse(html).unwrap();

    let p = find_element(&root, "p").expect("p should exist");
    assert_eq!(text_content(p), "Hello world!");

    let em = find_element(&root, "em").unwrap();
    assert_eq!(text_content(em), "world");

    let div = find_element(&root, "div").unwrap();
    assert_eq!(div.as_element().unwrap().id(), Some("main"));
}

#[test]
fn test_text_nodes_have_no_children() {
    let root = parse("<p>one<b>two</b>three</p>").unwrap();
    assert_eq!(root.children.len(), 3);
    for child in &root.children {
        if child.as_text().is_some() {
            assert!(child.children.is_empty());
        }
    }
}

#[test]
fn test_mismatched_closing_tag() {
    let err = parse("<div><p>a</div></p>").unwrap_err();
    assert!(
        matches!(
            err,
            HtmlParseError::MismatchedClosingTag { ref expected, ref found, .. }
                if expected == "p" && found == "div"
        ),
        "got {err:?}"
    );
}

#[test]
fn test_unterminated_attribute_value() {
    let err = parse(r#"<div class="open></div>"#).unwrap_err();
    assert_eq!(err, HtmlParseError::UnterminatedAttributeValue { position: 11 });
}

#[test]
fn test_unquoted_attribute_value_rejected() {
    let err = parse("<div id=main></div>").unwrap_err();
    assert!(matches!(
        err,
        HtmlParseError::UnexpectedCharacter { expected: '"', found: 'm', .. }
    ));
}

#[test]
fn test_missing_closing_tag_is_eof() {
    let err = parse("<div><p>a</p>").unwrap_err();
    assert!(matches!(
        err,
        HtmlParseError::UnexpectedEof { expected: '<', .. }
    ));
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    let err = parse("<p>a</p></div>").unwrap_err();
    assert_eq!(err, HtmlParseError::StrayClosingTag { position: 8 });
}

#[test]
fn test_error_messages_render() {
    let err = parse("<div></span>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "closing tag </span> at byte 5 does not match <div>"
    );
}
