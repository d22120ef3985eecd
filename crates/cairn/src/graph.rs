//! The graph model the composition pipeline reads and augments.
//!
//! # Overview
//!
//! - [`GraphAccess`] - Accessor contract the pipeline is written against
//! - [`Graph`] - An insertion-ordered in-memory graph implementing it
//! - [`Node`] - The per-node record: inputs from the caller plus the
//!   measured size written back by the pipeline
//! - [`Label`] - Opaque label content handed to a label composer
//!
//! Positions are assigned upstream; nothing here computes layout.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use cairn_core::{
    color::Color,
    draw::{Decoration, Paint, Style},
    geometry::{Insets, Point, Size},
    identifier::Id,
};

/// Read/write access to a graph's nodes.
///
/// The pipeline only reads node records and writes each node's measured
/// size; membership stays under the caller's control.
pub trait GraphAccess {
    /// Node identifiers in the order the pipeline should visit them.
    fn node_ids(&self) -> Vec<Id>;

    fn node(&self, id: Id) -> Option<&Node>;

    fn node_mut(&mut self, id: Id) -> Option<&mut Node>;

    /// Returns true if `id` is the parent of at least one other node.
    fn is_group(&self, id: Id) -> bool;
}

/// Content of a label or sub-element.
///
/// Deserializes from either a bare string or a table with an `html` key:
///
/// ```toml
/// label = "Build"
/// subnodes = ["lint", { html = "<b>test</b>" }]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Html { html: String },
}

impl Label {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Self::Html {
            html: markup.into(),
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Label {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

/// Explicit dimensions that replace the measured content size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizeOverride {
    width: Option<f32>,
    height: Option<f32>,
}

impl SizeOverride {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> Option<f32> {
        self.width
    }

    pub fn height(self) -> Option<f32> {
        self.height
    }

    /// Replaces each overridden dimension of `content` outright.
    ///
    /// ```
    /// # use cairn::graph::SizeOverride;
    /// # use cairn_core::geometry::Size;
    /// let size = SizeOverride::new(Some(100.0), None).apply(Size::new(40.0, 20.0));
    /// assert_eq!(size, Size::new(100.0, 20.0));
    /// ```
    pub fn apply(self, content: Size) -> Size {
        let mut size = content;
        if let Some(width) = self.width {
            size = size.with_width(width);
        }
        if let Some(height) = self.height {
            size = size.with_height(height);
        }
        size
    }
}

/// A node record.
///
/// Everything except the measured size is supplied by the caller. After a
/// successful pass [`measured_size`](Self::measured_size) holds the size of
/// the rendered shape; [`size_override`](Self::size_override) is never
/// touched by the pipeline.
///
/// # Examples
///
/// ```
/// # use cairn::graph::{Label, Node};
/// # use cairn_core::geometry::{Insets, Point};
/// let node = Node::new("circle", "Start")
///     .with_padding(Insets::uniform(5.0))
///     .with_class("entry contributing")
///     .with_position(Point::new(40.0, 40.0));
///
/// assert_eq!(node.shape(), "circle");
/// assert_eq!(node.label(), &Label::text("Start"));
/// assert!(node.measured_size().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Node {
    shape: String,
    label: Label,
    subnodes: Vec<Label>,
    decoration: Option<Decoration>,
    padding: Insets,
    #[serde(rename = "size")]
    size_override: SizeOverride,
    #[serde(skip)]
    measured_size: Option<Size>,
    class: Option<String>,
    style: Style,
    fill: Option<Color>,
    stroke: Option<Color>,
    id: Option<String>,
    label_id: Option<String>,
    position: Point,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            shape: "rect".to_string(),
            label: Label::default(),
            subnodes: Vec::new(),
            decoration: None,
            padding: Insets::default(),
            size_override: SizeOverride::default(),
            measured_size: None,
            class: None,
            style: Style::default(),
            fill: None,
            stroke: None,
            id: None,
            label_id: None,
            position: Point::default(),
        }
    }
}

impl Node {
    pub fn new(shape: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            shape: shape.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_subnodes(mut self, subnodes: Vec<Label>) -> Self {
        self.subnodes = subnodes;
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_size_override(mut self, size_override: SizeOverride) -> Self {
        self.size_override = size_override;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the `id` attribute of the node's group.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the `id` attribute of the node's label group.
    pub fn with_label_id(mut self, label_id: impl Into<String>) -> Self {
        self.label_id = Some(label_id.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn subnodes(&self) -> &[Label] {
        &self.subnodes
    }

    pub fn decoration(&self) -> Option<&Decoration> {
        self.decoration.as_ref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn size_override(&self) -> SizeOverride {
        self.size_override
    }

    /// Size of the rendered shape from the last successful pass
    pub fn measured_size(&self) -> Option<Size> {
        self.measured_size
    }

    pub(crate) fn set_measured_size(&mut self, size: Size) {
        self.measured_size = Some(size);
    }

    /// The space-separated class tags, or `""`
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }

    /// Returns true if `tag` is one of the node's class tags.
    pub fn has_class(&self, tag: &str) -> bool {
        self.class().split_whitespace().any(|t| t == tag)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn label_id(&self) -> Option<&str> {
        self.label_id.as_deref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Fill, stroke, and style to apply to the node's shape
    pub fn paint(&self) -> Paint {
        Paint::new(self.fill, self.stroke, self.style.clone())
    }
}

/// An in-memory graph with insertion-ordered nodes and an optional parent
/// relation.
///
/// ```
/// # use cairn::graph::{Graph, GraphAccess, Node};
/// # use cairn_core::identifier::Id;
/// let mut graph = Graph::new();
/// graph.add_node("cluster", Node::default());
/// graph.add_node("a", Node::new("rect", "A"));
/// graph.set_parent("a", "cluster");
///
/// assert!(graph.is_group(Id::new("cluster")));
/// assert!(!graph.is_group(Id::new("a")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<Id, Node>,
    parents: HashMap<Id, Id>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the node record for `id`.
    pub fn add_node(&mut self, id: impl Into<Id>, node: Node) {
        self.nodes.insert(id.into(), node);
    }

    /// Removes a node and any parent link that mentions it.
    pub fn remove_node(&mut self, id: impl Into<Id>) -> Option<Node> {
        let id = id.into();
        self.parents.retain(|child, parent| *child != id && *parent != id);
        self.nodes.shift_remove(&id)
    }

    pub fn set_parent(&mut self, child: impl Into<Id>, parent: impl Into<Id>) {
        self.parents.insert(child.into(), parent.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (Id, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}

impl GraphAccess for Graph {
    fn node_ids(&self) -> Vec<Id> {
        self.nodes.keys().copied().collect()
    }

    fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    fn is_group(&self, id: Id) -> bool {
        self.parents.values().any(|parent| *parent == id)
    }
}
