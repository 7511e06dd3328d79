//! Integration tests for box generation and block width resolution.
//!
//! [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)

use tessera_css::{
    BoxDimensions, BoxType, LayoutBox, LayoutError, StyleNode, build_layout_tree, layout_tree,
    parse_stylesheet, style_tree,
};
use tessera_dom::Node;

const EPSILON: f32 = 1e-4;

fn parse_html(html: &str) -> Node {
    tessera_html::parse(html).expect("test HTML should parse")
}

fn containing_block(width: f32, height: f32) -> BoxDimensions {
    let mut cb = BoxDimensions::default();
    cb.content.width = width;
    cb.content.height = height;
    cb
}

/// Lay out a single `<div>` styled with `declarations` in a container of `width`.
fn layout_div(declarations: &str, width: f32) -> BoxDimensions {
    let dom = parse_html("<div></div>");
    let sheet = parse_stylesheet(&format!("div {{ display: block; {declarations} }}")).unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = layout_tree(&styled, &containing_block(width, 600.0)).unwrap();
    root.dimensions
}

fn assert_px(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Box kinds of a box's children, for shape assertions.
fn kinds(layout_box: &LayoutBox<'_>) -> Vec<String> {
    layout_box
        .children
        .iter()
        .map(|child| child.box_type.to_string())
        .collect()
}

fn tag<'a>(layout_box: &LayoutBox<'a>) -> Option<&'a str> {
    layout_box
        .style_node()
        .ok()
        .and_then(StyleNode::tag_name)
}

// ---------------------------------------------------------------------------
// Box generation
// ---------------------------------------------------------------------------

#[test]
fn test_end_to_end_anonymous_wrapper() {
    let dom = parse_html("<div><p>a</p></div>");
    let sheet =
        parse_stylesheet("div { display: block; width: 100px; } p { display: inline; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert!(matches!(root.box_type, BoxType::Block(_)));
    assert_eq!(tag(&root), Some("div"));
    assert_eq!(kinds(&root), ["anonymous"]);

    let anonymous = &root.children[0];
    assert_eq!(kinds(anonymous), ["inline"]);
    assert_eq!(tag(&anonymous.children[0]), Some("p"));
}

#[test]
fn test_anonymous_grouping() {
    let dom = parse_html(
        r#"<div><h1 class="b"></h1><em></em><em></em><h2 class="b"></h2><em></em></div>"#,
    );
    let sheet = parse_stylesheet("div, .b { display: block; } em { display: inline; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert_eq!(kinds(&root), ["block", "anonymous", "block", "anonymous"]);
    assert_eq!(root.children[1].children.len(), 2);
    assert_eq!(root.children[3].children.len(), 1);
}

#[test]
fn test_display_none_subtree_is_skipped() {
    let dom = parse_html("<div><p><em>gone</em></p><span>kept</span></div>");
    let sheet = parse_stylesheet("div { display: block; } p { display: none; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert_eq!(kinds(&root), ["anonymous"]);
    assert_eq!(tag(&root.children[0].children[0]), Some("span"));
    assert_eq!(root.box_count(), 4);
}

#[test]
fn test_root_display_none_is_an_error() {
    let dom = parse_html("<div></div>");
    let sheet = parse_stylesheet("div { display: none; }").unwrap();
    let styled = style_tree(&dom, &sheet);

    assert_eq!(build_layout_tree(&styled), Err(LayoutError::RootDisplayNone));
    assert_eq!(
        layout_tree(&styled, &containing_block(100.0, 100.0)),
        Err(LayoutError::RootDisplayNone)
    );
}

#[test]
fn test_inline_box_holds_inline_children_directly() {
    let dom = parse_html("<span><b>x</b><i>y</i></span>");
    let sheet = parse_stylesheet("").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert_eq!(root.box_type.to_string(), "inline");
    assert_eq!(kinds(&root), ["inline", "inline"]);
}

#[test]
fn test_block_inside_inline_is_a_direct_child() {
    let dom = parse_html("<span><div></div></span>");
    let sheet = parse_stylesheet("div { display: block; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert_eq!(kinds(&root), ["block"]);
}

#[test]
fn test_anonymous_style_access() {
    let dom = parse_html("<div>text</div>");
    let sheet = parse_stylesheet("div { display: block; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = build_layout_tree(&styled).unwrap();

    assert!(root.style_node().is_ok());
    assert_eq!(
        root.children[0].style_node(),
        Err(LayoutError::AnonymousStyleAccess)
    );
}

// ---------------------------------------------------------------------------
// Width resolution
// ---------------------------------------------------------------------------

#[test]
fn test_auto_margins_center() {
    let dims = layout_div("width: 100px; margin-left: auto; margin-right: auto;", 300.0);
    assert_px(dims.content.width, 100.0, "width");
    assert_px(dims.margin.left, 100.0, "margin-left");
    assert_px(dims.margin.right, 100.0, "margin-right");
}

#[test]
fn test_margin_shorthand_auto_centers() {
    let dims = layout_div("width: 100px; margin: auto; padding: 10px;", 300.0);
    assert_px(dims.margin.left, 90.0, "margin-left");
    assert_px(dims.margin.right, 90.0, "margin-right");
    assert_px(dims.padding.left, 10.0, "padding-left");
    assert_px(dims.margin_box().width, 300.0, "margin box");
}

#[test]
fn test_over_constrained_zeroes_auto_left_margin() {
    let dims = layout_div("width: 300px; margin-left: auto;", 200.0);
    assert_px(dims.margin.left, 0.0, "margin-left");
    assert_px(dims.content.width, 300.0, "width");
    assert_px(dims.margin.right, -100.0, "margin-right");
}

#[test]
fn test_over_constrained_zeroes_both_auto_margins() {
    let dims = layout_div("width: 300px; margin: auto;", 200.0);
    assert_px(dims.margin.left, 0.0, "margin-left");
    assert_px(dims.margin.right, -100.0, "margin-right");
}

#[test]
fn test_auto_width_fills_container() {
    let dims = layout_div(
        "width: auto; margin: 10px; border-width: 2px; padding-left: 5px;",
        200.0,
    );
    assert_px(dims.content.width, 200.0 - 20.0 - 4.0 - 5.0, "width");
    assert_px(dims.margin.left, 10.0, "margin-left");
    assert_px(dims.margin.right, 10.0, "margin-right");
    assert_px(dims.border.left, 2.0, "border-left");
    assert_px(dims.border.right, 2.0, "border-right");
    assert_px(dims.padding.right, 0.0, "padding-right");
    assert_px(dims.margin_box().width, 200.0, "margin box");
}

#[test]
fn test_auto_width_zeroes_auto_margins() {
    let dims = layout_div("width: auto; margin-left: auto; margin-right: 30px;", 100.0);
    assert_px(dims.margin.left, 0.0, "margin-left");
    assert_px(dims.content.width, 70.0, "width");
}

#[test]
fn test_auto_width_with_negative_underflow() {
    let dims = layout_div("width: auto; padding: 80px; margin-right: 10px;", 100.0);
    assert_px(dims.content.width, 0.0, "width");
    assert_px(dims.margin.right, 10.0 - 70.0, "margin-right");
}

#[test]
fn test_fixed_margins_adjust_right_margin() {
    let dims = layout_div("width: 100px; margin-left: 20px; margin-right: 5px;", 300.0);
    assert_px(dims.margin.left, 20.0, "margin-left");
    assert_px(dims.margin.right, 5.0 + 175.0, "margin-right");
}

#[test]
fn test_single_auto_margin_takes_the_rest() {
    let right_auto = layout_div("width: 100px; margin-left: 20px; margin-right: auto;", 300.0);
    assert_px(right_auto.margin.right, 180.0, "margin-right");

    let left_auto = layout_div("width: 100px; margin-left: auto; margin-right: 20px;", 300.0);
    assert_px(left_auto.margin.left, 180.0, "margin-left");
    assert_px(left_auto.margin.right, 20.0, "margin-right");
}

#[test]
fn test_absent_width_counts_as_zero() {
    let dims = layout_div("", 250.0);
    assert_px(dims.content.width, 0.0, "width");
    assert_px(dims.margin.right, 250.0, "margin-right");
}

#[test]
fn test_non_length_values_count_as_zero() {
    let dims = layout_div("width: 50px; border-width: thick; padding: #ff0000;", 100.0);
    assert_px(dims.border.left, 0.0, "border-left");
    assert_px(dims.padding.left, 0.0, "padding-left");
    assert_px(dims.margin.right, 50.0, "margin-right");
}

#[test]
fn test_vertical_edges_and_position_untouched() {
    let dims = layout_div("width: 10px; margin: 4px; padding: 3px;", 100.0);
    assert_px(dims.margin.top, 0.0, "margin-top");
    assert_px(dims.padding.bottom, 0.0, "padding-bottom");
    assert_px(dims.content.height, 0.0, "height");
    assert_px(dims.content.x, 0.0, "x");
}

#[test]
fn test_containing_block_is_not_modified() {
    let dom = parse_html("<div></div>");
    let sheet = parse_stylesheet("div { display: block; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let cb = containing_block(120.0, 90.0);

    let _root = layout_tree(&styled, &cb).unwrap();
    assert_px(cb.content.height, 90.0, "caller's height");
}

#[test]
fn test_only_root_is_laid_out() {
    let dom = parse_html("<div><div></div></div>");
    let sheet = parse_stylesheet("div { display: block; width: 40px; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = layout_tree(&styled, &containing_block(100.0, 0.0)).unwrap();

    assert_px(root.dimensions.content.width, 40.0, "root width");
    assert_eq!(root.children[0].dimensions, BoxDimensions::default());
}

#[test]
fn test_manual_layout_of_child() {
    let dom = parse_html("<div><div></div></div>");
    let sheet = parse_stylesheet("div { display: block; width: 40px; margin: auto; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let mut root = layout_tree(&styled, &containing_block(100.0, 0.0)).unwrap();

    let parent = root.dimensions;
    root.children[0].layout(&parent).unwrap();
    assert_px(root.children[0].dimensions.margin.left, 0.0, "child margin-left");
}

#[test]
fn test_anonymous_layout_is_a_no_op() {
    let mut anonymous = LayoutBox::new(BoxType::Anonymous);
    assert!(anonymous.layout(&containing_block(100.0, 0.0)).is_ok());
    assert_eq!(anonymous.dimensions, BoxDimensions::default());
}
