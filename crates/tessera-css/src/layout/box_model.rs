//! CSS Box Model types.
//!
//! [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)

use serde::Serialize;

/// [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
///
/// "Each box has a content area (e.g., text, an image, etc.) and optional
/// surrounding padding, border, and margin areas"
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxDimensions {
    /// Position and size of the content area.
    pub content: Rect,
    /// Padding widths around the content.
    pub padding: EdgeSizes,
    /// Border widths around the padding.
    pub border: EdgeSizes,
    /// Margin widths around the border.
    pub margin: EdgeSizes,
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// Per-side widths of a padding, border or margin area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl Rect {
    /// Grow the rectangle outward by `edge` on every side.
    #[must_use]
    pub fn expanded_by(self, edge: EdgeSizes) -> Self {
        Self {
            x: self.x - edge.left,
            y: self.y - edge.top,
            width: self.width + edge.left + edge.right,
            height: self.height + edge.top + edge.bottom,
        }
    }
}

impl BoxDimensions {
    // [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
    //
    // Areas from innermost to outermost:
    //   content ⊂ padding box ⊂ border box ⊂ margin box
    //
    // Each outer box is the inner one grown by the corresponding edges.

    /// "The content edge surrounds the rectangle given by the width and
    /// height of the box"
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        self.content
    }

    /// "The padding edge surrounds the box padding."
    ///
    /// ```text
    /// x     = content.x - padding.left
    /// width = content.width + padding.left + padding.right
    /// ```
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        self.content.expanded_by(self.padding)
    }

    /// "The border edge surrounds the box's border."
    #[must_use]
    pub fn border_box(&self) -> Rect {
        self.padding_box().expanded_by(self.border)
    }

    /// "The margin edge surrounds the box margin."
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        self.border_box().expanded_by(self.margin)
    }
}
