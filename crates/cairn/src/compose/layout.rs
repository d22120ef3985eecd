use cairn_core::geometry::{Insets, Point, Size};

use crate::graph::SizeOverride;

/// Measured part sizes and settings a node's geometry is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutInput {
    label: Size,
    subnodes: Option<Size>,
    decoration_height: Option<f32>,
    size_override: SizeOverride,
    padding: Insets,
    subnode_bias: f32,
    decoration_adjustment: f32,
}

impl LayoutInput {
    pub fn new(label: Size) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Sets the bounding size of the composed sub-elements.
    pub fn with_subnodes(mut self, size: Size) -> Self {
        self.subnodes = Some(size);
        self
    }

    /// Sets the height a decoration adds to the content.
    pub fn with_decoration(mut self, height: f32, adjustment: f32) -> Self {
        self.decoration_height = Some(height);
        self.decoration_adjustment = adjustment;
        self
    }

    pub fn with_size_override(mut self, size_override: SizeOverride) -> Self {
        self.size_override = size_override;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_subnode_bias(mut self, bias: f32) -> Self {
        self.subnode_bias = bias;
        self
    }
}

/// Where every part of a node goes, relative to the node's center.
///
/// # Examples
///
/// ```
/// # use cairn::compose::{LayoutInput, NodeLayout};
/// # use cairn_core::geometry::{Insets, Point, Size};
/// let input = LayoutInput::new(Size::new(20.0, 10.0))
///     .with_padding(Insets::new(5.0, 10.0, 5.0, 10.0))
///     .with_decoration(14.0, 0.0);
/// let layout = NodeLayout::compute(&input);
///
/// assert_eq!(layout.bbox(), Size::new(40.0, 34.0));
/// assert_eq!(layout.decoration_offset(), Some(Point::new(0.0, -17.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    content: Size,
    bbox: Size,
    label_offset: Point,
    subnode_offset: Option<Point>,
    decoration_offset: Option<Point>,
}

impl NodeLayout {
    pub fn compute(input: &LayoutInput) -> Self {
        let padding = input.padding;
        let subnodes = input.subnodes.unwrap_or_default();

        let mut content = input.label;
        if let Some(size) = input.subnodes {
            content = content.merge_vertical(size);
        }
        // Height only; the badge sits on the top edge.
        if let Some(height) = input.decoration_height {
            content = content.with_height(content.height() + height);
        }

        let bbox = input.size_override.apply(content).add_padding(padding);

        let label_offset = Point::new(
            padding.horizontal_skew(),
            padding.vertical_skew() - subnodes.height() / 2.0,
        );
        let subnode_offset = input.subnodes.map(|size| {
            Point::new(
                -(size.width() / 2.0 - input.subnode_bias),
                padding.vertical_skew() + size.height() / 2.0,
            )
        });
        let decoration_offset = input
            .decoration_height
            .map(|_| Point::new(0.0, -bbox.height() / 2.0 + input.decoration_adjustment));

        Self {
            content,
            bbox,
            label_offset,
            subnode_offset,
            decoration_offset,
        }
    }

    /// Merged size of label, sub-elements, and decoration before overrides
    pub fn content(&self) -> Size {
        self.content
    }

    /// The padded box handed to the shape renderer
    pub fn bbox(&self) -> Size {
        self.bbox
    }

    pub fn label_offset(&self) -> Point {
        self.label_offset
    }

    pub fn subnode_offset(&self) -> Option<Point> {
        self.subnode_offset
    }

    pub fn decoration_offset(&self) -> Option<Point> {
        self.decoration_offset
    }
}
