//! The retained rendering surface.
//!
//! A [`Scene`] keeps one [`NodeElement`] per composed node, keyed by node
//! id, across passes. It is also the side table that answers edge-clipping
//! queries: each element records its shape's [`Outline`] and the node's
//! center, so [`Scene::intersect`] needs nothing from the node record.

use indexmap::IndexMap;

use cairn_core::{
    draw::{Outline, SvgNode},
    geometry::{Bounds, Point},
    identifier::Id,
};

/// Where an element is in its lifecycle.
///
/// ```text
/// absent ──▶ Entering ──┐
///                       ├──▶ Composed ──▶ Removed
/// present ─▶ Updated ───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// Created this pass, not yet composed
    Entering,
    /// Existed before this pass, children cleared, not yet composed
    Updated,
    /// Fully composed and visible
    Composed,
    /// Faded out and detached from the scene
    Removed,
}

/// The rendered group of one node.
#[derive(Debug)]
pub struct NodeElement {
    id: Id,
    state: ElementState,
    opacity: f32,
    class: String,
    dom_id: Option<String>,
    center: Point,
    children: Vec<SvgNode>,
    outline: Option<Outline>,
    shape_bounds: Bounds,
}

impl NodeElement {
    fn new(id: Id) -> Self {
        Self {
            id,
            state: ElementState::Entering,
            opacity: 1.0,
            class: String::new(),
            dom_id: None,
            center: Point::default(),
            children: Vec::new(),
            outline: None,
            shape_bounds: Bounds::default(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn state(&self) -> ElementState {
        self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The group's class attribute, e.g. `"update node entry"`
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The group's `id` attribute
    pub fn dom_id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Shape, label, sub-element, and decoration groups, in paint order
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Bounds of the drawn shape in scene coordinates
    pub fn bounds(&self) -> Bounds {
        self.shape_bounds.translate(self.center)
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub(crate) fn set_state(&mut self, state: ElementState) {
        self.state = state;
    }

    pub(crate) fn set_attributes(&mut self, class: String, dom_id: Option<String>) {
        self.class = class;
        self.dom_id = dom_id;
    }

    pub(crate) fn set_content(
        &mut self,
        children: Vec<SvgNode>,
        center: Point,
        outline: Outline,
        shape_bounds: Bounds,
    ) {
        self.children = children;
        self.center = center;
        self.outline = Some(outline);
        self.shape_bounds = shape_bounds;
    }
}

/// Rendered node elements keyed by node id, in first-composed order.
#[derive(Debug, Default)]
pub struct Scene {
    elements: IndexMap<Id, NodeElement>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn element(&self, id: Id) -> Option<&NodeElement> {
        self.elements.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.elements.keys().copied()
    }

    pub fn elements(&self) -> impl Iterator<Item = &NodeElement> {
        self.elements.values()
    }

    /// Creates the element for `id` in the [`Entering`](ElementState::Entering)
    /// state, or moves an existing one to [`Updated`](ElementState::Updated)
    /// and clears its children.
    pub(crate) fn enter_or_update(&mut self, id: Id) -> &mut NodeElement {
        self.elements
            .entry(id)
            .and_modify(|element| {
                element.state = ElementState::Updated;
                element.children.clear();
            })
            .or_insert_with(|| NodeElement::new(id))
    }

    /// Detaches the element for `id` from the scene.
    pub(crate) fn remove(&mut self, id: Id) -> Option<NodeElement> {
        self.elements.shift_remove(&id)
    }

    /// Finds where the line from node `id`'s center toward `point` crosses
    /// its shape's boundary.
    ///
    /// Returns `None` if the node has not been composed.
    pub fn intersect(&self, id: Id, point: Point) -> Option<Point> {
        let element = self.elements.get(&id)?;
        element
            .outline
            .as_ref()
            .map(|outline| outline.intersect(element.center, point))
    }

    /// Union of every element's bounds, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        self.elements
            .values()
            .map(NodeElement::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}
