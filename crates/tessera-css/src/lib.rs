//! CSS parser, selector matching, cascade, and block layout for the Tessera engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Parser** (a subset of [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Style rules with comma-separated compound selectors
//!   - Declarations whose values are keywords, `px` lengths or `#rrggbb` colors
//!   - Comment handling
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, and universal selectors
//!   - Compound selectors
//!
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Rules apply in stylesheet order, last declaration wins
//!   - A style tree that mirrors the document tree
//!
//! - **Layout** ([CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html))
//!   - Block, inline and anonymous box generation
//!   - Block width and horizontal margin resolution per
//!     [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
//!
//! # Not Yet Implemented
//!
//! - Specificity and cascade origins
//! - Inheritance
//! - Relative length units (em, rem, %, vw)
//! - Combinators, pseudo-classes and attribute selectors
//! - Block heights, positioning and inline formatting
//!
//! # Example
//!
//! ```
//! use tessera_css::{BoxDimensions, BoxType, layout_tree, parse_stylesheet, style_tree};
//! use tessera_dom::{AttributesMap, elem};
//!
//! let document = elem("div", AttributesMap::new(), vec![]);
//! let stylesheet = parse_stylesheet("div { display: block; width: 100px; margin: auto; }")?;
//! let styles = style_tree(&document, &stylesheet);
//!
//! let mut viewport = BoxDimensions::default();
//! viewport.content.width = 300.0;
//! let root = layout_tree(&styles, &viewport)?;
//!
//! assert!(matches!(root.box_type, BoxType::Block(_)));
//! assert_eq!(root.dimensions.margin.left, 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Cascade and style tree per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Parse and layout errors.
pub mod error;
/// Box generation and width resolution per [CSS 2.1 § 9-10](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Selector matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Specified value types.
pub mod style;

// Re-exports for convenience
pub use cascade::{PropertyMap, StyleNode, matching_rules, specified_values, style_tree};
pub use error::{CssParseError, LayoutError};
pub use layout::{
    AutoOr, BoxDimensions, BoxType, EdgeSizes, LayoutBox, Rect, build_layout_tree, layout_tree,
};
pub use parser::{CSSParser, Declaration, Rule, Stylesheet, parse_stylesheet};
pub use selector::Selector;
pub use style::{ColorValue, Display, Unit, Value};
