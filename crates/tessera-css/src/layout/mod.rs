//! CSS Layout Engine
//!
//! This module builds the box tree for a style tree and resolves block
//! widths, following the CSS 2.1 visual formatting model.
//!
//! # Relevant Specifications
//!
//! - [CSS 2.1 Box model](https://www.w3.org/TR/CSS2/box.html)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`values`] - Auto-or-length values
//! - [`layout_box`] - Layout box types, box generation and width resolution

pub mod box_model;
pub mod layout_box;
pub mod values;

// Re-exports for convenience
pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox, build_layout_tree, layout_tree};
pub use values::AutoOr;
