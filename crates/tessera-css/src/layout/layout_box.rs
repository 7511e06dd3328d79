//! Layout box types and layout algorithms.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use strum_macros::Display;

use crate::cascade::StyleNode;
use crate::error::LayoutError;
use crate::style::{self, Value};

use super::box_model::BoxDimensions;
use super::values::AutoOr;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "A box's type affects, in part, its behavior in the visual formatting
/// model."
#[derive(Debug, Clone, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BoxType<'a> {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    ///
    /// "Block-level elements are those elements of the source document that
    /// are formatted visually as blocks"
    Block(&'a StyleNode<'a>),

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    ///
    /// "Inline-level elements are those elements of the source document that
    /// do not form new blocks of content"
    Inline(&'a StyleNode<'a>),

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "if a block container box has a block-level box inside it, then we
    /// force it to have only block-level boxes inside it." Runs of inline
    /// boxes are wrapped in an anonymous box that has no element and no
    /// style.
    Anonymous,
}

/// A node in the layout tree.
///
/// "Each box is associated with its generating element." Block and inline
/// boxes borrow their style node. Dimensions start zeroed and are filled in
/// by [`LayoutBox::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox<'a> {
    /// The type of box, carrying the style node for non-anonymous boxes.
    pub box_type: BoxType<'a>,
    /// Used values after layout.
    pub dimensions: BoxDimensions,
    /// Child boxes in document order.
    pub children: Vec<LayoutBox<'a>>,
}

/// Build the layout tree for `style_root` and lay out its root box.
///
/// The containing block is copied and its height reset to 0 before layout:
/// block heights depend on content, which is not measured here.
///
/// # Errors
///
/// See [`build_layout_tree`] and [`LayoutBox::layout`].
pub fn layout_tree<'a>(
    style_root: &'a StyleNode<'a>,
    containing_block: &BoxDimensions,
) -> Result<LayoutBox<'a>, LayoutError> {
    let mut containing_block = *containing_block;
    containing_block.content.height = 0.0;

    let mut root_box = build_layout_tree(style_root)?;
    root_box.layout(&containing_block)?;
    log::debug!(
        "laid out {} boxes in a {}px wide containing block",
        root_box.box_count(),
        containing_block.content.width
    );
    Ok(root_box)
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// Build the box tree for a style tree without computing any dimensions.
///
/// ```text
/// block child   -> appended to the current box
/// inline child  -> appended to the current box's inline container
/// none child    -> skipped together with its subtree
/// ```
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root itself has
/// `display: none`.
pub fn build_layout_tree<'a>(style_node: &'a StyleNode<'a>) -> Result<LayoutBox<'a>, LayoutError> {
    // STEP 1: Create the root box.
    let box_type = match style_node.display() {
        style::Display::Block => BoxType::Block(style_node),
        style::Display::Inline => BoxType::Inline(style_node),
        style::Display::None => return Err(LayoutError::RootDisplayNone),
    };
    Ok(build_box(box_type, style_node))
}

/// Create a box for `style_node` and generate boxes for its children.
fn build_box<'a>(box_type: BoxType<'a>, style_node: &'a StyleNode<'a>) -> LayoutBox<'a> {
    let mut root = LayoutBox::new(box_type);

    // STEP 2: Create the descendant boxes.
    for child in &style_node.children {
        match child.display() {
            style::Display::Block => root.children.push(build_box(BoxType::Block(child), child)),
            style::Display::Inline => root
                .inline_container()
                .children
                .push(build_box(BoxType::Inline(child), child)),
            // [§ 9.2.4](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
            // "Descendant elements do not generate any boxes either"
            style::Display::None => {}
        }
    }
    root
}

impl<'a> LayoutBox<'a> {
    /// Create a box with zeroed dimensions and no children.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            box_type,
            dimensions: BoxDimensions::default(),
            children: Vec::new(),
        }
    }

    /// The style node this box was generated from.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::AnonymousStyleAccess`] for anonymous boxes.
    pub const fn style_node(&self) -> Result<&'a StyleNode<'a>, LayoutError> {
        match self.box_type {
            BoxType::Block(node) | BoxType::Inline(node) => Ok(node),
            BoxType::Anonymous => Err(LayoutError::AnonymousStyleAccess),
        }
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Where a new inline child goes:
    /// - an inline or anonymous box holds inline children itself;
    /// - a block box reuses its trailing anonymous box, or appends a new one.
    ///
    /// Consecutive inline children therefore share one anonymous box, and any
    /// block child in between starts a fresh one.
    pub fn inline_container(&mut self) -> &mut Self {
        match self.box_type {
            BoxType::Inline(_) | BoxType::Anonymous => self,
            BoxType::Block(_) => {
                if !matches!(
                    self.children.last(),
                    Some(Self {
                        box_type: BoxType::Anonymous,
                        ..
                    })
                ) {
                    self.children.push(Self::new(BoxType::Anonymous));
                }
                // The branch above guarantees a last child.
                let last = self.children.len() - 1;
                &mut self.children[last]
            }
        }
    }

    /// Lay out this box in `containing_block`.
    ///
    /// Block boxes resolve their width and horizontal edges. Inline and
    /// anonymous boxes are left untouched, and children are not visited.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from style access.
    pub fn layout(&mut self, containing_block: &BoxDimensions) -> Result<(), LayoutError> {
        match self.box_type {
            BoxType::Block(_) => self.layout_block(containing_block),
            BoxType::Inline(_) | BoxType::Anonymous => Ok(()),
        }
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    fn layout_block(&mut self, containing_block: &BoxDimensions) -> Result<(), LayoutError> {
        self.calculate_block_width(containing_block)
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Calculate the width and horizontal edges of a block-level box.
    pub(crate) fn calculate_block_width(
        &mut self,
        containing_block: &BoxDimensions,
    ) -> Result<(), LayoutError> {
        // [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
        //
        // "The following constraints must hold among the used values of the
        // other properties:
        //
        //   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
        //   'padding-right' + 'border-right-width' + 'margin-right'
        //   = width of containing block"
        let style = self.style_node()?;
        let zero = Value::px(0.0);

        // STEP 1: Read the specified values. Longhands fall back to their
        // shorthand, then to 0px. Border and padding cannot be 'auto', only
        // margins and width can. An absent width is 0px, not 'auto'.
        let width = AutoOr::from_value(&style.value("width"));
        let mut margin_left = AutoOr::from_value(&style.lookup("margin-left", "margin", &zero));
        let mut margin_right = AutoOr::from_value(&style.lookup("margin-right", "margin", &zero));

        let border_left = style.lookup("border-left-width", "border-width", &zero).to_px();
        let border_right = style.lookup("border-right-width", "border-width", &zero).to_px();

        let padding_left = style.lookup("padding-left", "padding", &zero).to_px();
        let padding_right = style.lookup("padding-right", "padding", &zero).to_px();

        #[cfg(feature = "layout-trace")]
        log::trace!(
            target: "tessera::layout",
            "width inputs for <{}>: width={width:?} margin=({margin_left:?}, {margin_right:?}) \
             border=({border_left}, {border_right}) padding=({padding_left}, {padding_right})",
            style.tag_name().unwrap_or("#text"),
        );

        // STEP 2: Sum everything, counting 'auto' as zero.
        let total = [
            width.to_px_or(0.0),
            margin_left.to_px_or(0.0),
            margin_right.to_px_or(0.0),
            border_left,
            border_right,
            padding_left,
            padding_right,
        ]
        .iter()
        .sum::<f32>();

        // STEP 3: Handle over-constrained case
        //
        // "If 'width' is not 'auto' and 'border-left-width' + 'padding-left' +
        // 'width' + 'padding-right' + 'border-right-width' (plus any of
        // 'margin-left' or 'margin-right' that are not 'auto') is larger than
        // the width of the containing block, then any 'auto' values for
        // 'margin-left' or 'margin-right' are, for the following rules,
        // treated as zero."
        if !width.is_auto() && total > containing_block.content.width {
            if margin_left.is_auto() {
                margin_left = AutoOr::Length(0.0);
            }
            if margin_right.is_auto() {
                margin_right = AutoOr::Length(0.0);
            }
        }

        // STEP 4: How much space is left over. Computed once, before any of
        // the rules below adjust a value.
        let underflow = containing_block.content.width - total;

        // STEP 5: Apply the constraint rules to calculate used values.
        let (used_width, used_margin_left, used_margin_right) =
            match (width, margin_left, margin_right) {
                // RULE D: "If all of the above have a computed value other
                // than 'auto', the values are said to be 'over-constrained'
                // ... the specified value of 'margin-right' is ignored and the
                // value is calculated so as to make the equality true."
                (AutoOr::Length(w), AutoOr::Length(left), AutoOr::Length(right)) => {
                    (w, left, right + underflow)
                }

                // RULE C: "If there is exactly one value specified as 'auto',
                // its used value follows from the equality."
                (AutoOr::Length(w), AutoOr::Length(left), AutoOr::Auto) => (w, left, underflow),
                (AutoOr::Length(w), AutoOr::Auto, AutoOr::Length(right)) => (w, underflow, right),

                // RULE A: "If 'width' is set to 'auto', any other 'auto'
                // values become '0' and 'width' follows from the resulting
                // equality."
                (AutoOr::Auto, left, right) => {
                    let left = left.to_px_or(0.0);
                    let right = right.to_px_or(0.0);
                    if underflow >= 0.0 {
                        (underflow, left, right)
                    } else {
                        // Width can't be negative, so adjust the right margin.
                        (0.0, left, right + underflow)
                    }
                }

                // RULE B: "If both 'margin-left' and 'margin-right' are
                // 'auto', their used values are equal. This horizontally
                // centers the element with respect to the edges of the
                // containing block."
                (AutoOr::Length(w), AutoOr::Auto, AutoOr::Auto) => {
                    (w, underflow / 2.0, underflow / 2.0)
                }
            };

        // STEP 6: Store the used values in self.dimensions
        let dimensions = &mut self.dimensions;
        dimensions.content.width = used_width;
        dimensions.padding.left = padding_left;
        dimensions.padding.right = padding_right;
        dimensions.border.left = border_left;
        dimensions.border.right = border_right;
        dimensions.margin.left = used_margin_left;
        dimensions.margin.right = used_margin_right;

        log::trace!(
            target: "tessera::layout",
            "resolved width {used_width}px margins ({used_margin_left}, {used_margin_right})"
        );
        Ok(())
    }

    /// Number of boxes in this subtree, including `self`.
    #[must_use]
    pub fn box_count(&self) -> usize {
        1 + self.children.iter().map(Self::box_count).sum::<usize>()
    }
}
