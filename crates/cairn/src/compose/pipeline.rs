use std::collections::HashSet;

use log::{debug, info, trace};
use svg::node::element as svg_element;

use cairn_core::{
    draw::{DecorationRenderer, IconRegistry, Outline, ShapeRegistry, SvgNode},
    error::DrawError,
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use super::{
    LabelComposer, LayoutInput, ListSubnodeComposer, NodeLayout, SubnodeComposer,
    TextLabelComposer,
};
use crate::{
    config::{AppConfig, CompositionConfig},
    error::RenderError,
    graph::{GraphAccess, Node},
    scene::{ElementState, Scene},
    transition::{Immediate, Transition},
};

/// What a successful pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    composed: Vec<Id>,
    exited: Vec<Id>,
}

impl PassReport {
    /// Nodes composed, in visiting order
    pub fn composed(&self) -> &[Id] {
        &self.composed
    }

    /// Nodes whose elements were faded out and detached
    pub fn exited(&self) -> &[Id] {
        &self.exited
    }
}

/// A node's parts, drawn and laid out but not yet in the scene.
struct BuiltNode {
    children: Vec<SvgNode>,
    outline: Outline,
    shape_bounds: Bounds,
    measured: Size,
    center: Point,
}

/// Composes every simple node of a graph into a [`Scene`].
///
/// The pipeline owns the registries and collaborators it dispatches to.
/// Defaults come from an [`AppConfig`]; each collaborator can be replaced.
///
/// # Examples
///
/// ```
/// # use cairn::compose::NodePipeline;
/// # use cairn::config::AppConfig;
/// # use cairn::graph::{Graph, GraphAccess, Node};
/// # use cairn::scene::Scene;
/// # use cairn_core::geometry::Insets;
/// # use cairn_core::identifier::Id;
/// let mut graph = Graph::new();
/// graph.add_node("start", Node::new("circle", "Start").with_padding(Insets::uniform(4.0)));
///
/// let pipeline = NodePipeline::new(&AppConfig::default());
/// let mut scene = Scene::new();
/// let report = pipeline.run(&mut graph, &mut scene).unwrap();
///
/// assert_eq!(report.composed(), &[Id::new("start")]);
/// assert!(graph.node(Id::new("start")).unwrap().measured_size().is_some());
/// ```
#[derive(Debug)]
pub struct NodePipeline {
    shapes: ShapeRegistry,
    icons: IconRegistry,
    decorations: DecorationRenderer,
    composition: CompositionConfig,
    labels: Box<dyn LabelComposer>,
    subnodes: Box<dyn SubnodeComposer>,
    transition: Box<dyn Transition>,
}

impl NodePipeline {
    /// Creates a pipeline with the built-in shapes and icons, the default
    /// composers styled by `config.text()`, and immediate transitions.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            shapes: ShapeRegistry::with_defaults(),
            icons: IconRegistry::with_defaults(),
            decorations: DecorationRenderer::new(config.decoration().clone()),
            composition: config.composition().clone(),
            labels: Box::new(TextLabelComposer::new(config.text().clone())),
            subnodes: Box::new(ListSubnodeComposer::new(config.text().clone(), 0.0)),
            transition: Box::new(Immediate),
        }
    }

    pub fn with_shapes(mut self, shapes: ShapeRegistry) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_label_composer(mut self, composer: impl LabelComposer + 'static) -> Self {
        self.labels = Box::new(composer);
        self
    }

    pub fn with_subnode_composer(mut self, composer: impl SubnodeComposer + 'static) -> Self {
        self.subnodes = Box::new(composer);
        self
    }

    pub fn with_transition(mut self, transition: impl Transition + 'static) -> Self {
        self.transition = Box::new(transition);
        self
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeRegistry {
        &mut self.shapes
    }

    pub fn icons_mut(&mut self) -> &mut IconRegistry {
        &mut self.icons
    }

    /// Runs one pass over `graph`.
    ///
    /// Simple nodes are composed in the order [`GraphAccess::node_ids`]
    /// lists them; group nodes are skipped. Elements left in `scene` for
    /// nodes no longer listed are faded out and detached.
    ///
    /// # Errors
    ///
    /// The first failing node aborts the pass. Nodes composed before it stay
    /// in the scene, its own element is discarded, and neither later nodes
    /// nor stale elements are processed.
    pub fn run<G>(&self, graph: &mut G, scene: &mut Scene) -> Result<PassReport, RenderError>
    where
        G: GraphAccess + ?Sized,
    {
        let simple: Vec<Id> = graph
            .node_ids()
            .into_iter()
            .filter(|id| !graph.is_group(*id))
            .collect();
        info!(nodes = simple.len(); "Composing nodes");

        let mut report = PassReport::default();
        for &id in &simple {
            self.compose_node(id, graph, scene)?;
            report.composed.push(id);
        }

        let live: HashSet<Id> = simple.into_iter().collect();
        let stale: Vec<Id> = scene.ids().filter(|id| !live.contains(id)).collect();
        for id in stale {
            if let Some(mut element) = scene.remove(id) {
                self.transition.fade_out_and_remove(&mut element);
                element.set_state(ElementState::Removed);
                debug!(node_id:% = id; "Removed stale node element");
                report.exited.push(id);
            }
        }

        info!(
            composed = report.composed.len(),
            exited = report.exited.len();
            "Composition pass complete"
        );
        Ok(report)
    }

    fn compose_node<G>(&self, id: Id, graph: &mut G, scene: &mut Scene) -> Result<(), RenderError>
    where
        G: GraphAccess + ?Sized,
    {
        let node = graph.node(id).ok_or(RenderError::MissingNode(id))?;
        let updating = scene.contains(id);

        let built = match self.build(id, node) {
            Ok(built) => built,
            Err(err) => {
                scene.remove(id);
                return Err(err);
            }
        };

        let mut class = if updating {
            "update node".to_string()
        } else {
            "node".to_string()
        };
        if !node.class().is_empty() {
            class.push(' ');
            class.push_str(node.class());
        }
        let dom_id = node.id().map(str::to_string);

        let element = scene.enter_or_update(id);
        if element.state() == ElementState::Entering {
            self.transition.enter(element);
        }
        element.set_attributes(class, dom_id);
        element.set_content(built.children, built.center, built.outline, built.shape_bounds);
        self.transition.settle(element);
        element.set_state(ElementState::Composed);

        graph
            .node_mut(id)
            .ok_or(RenderError::MissingNode(id))?
            .set_measured_size(built.measured);
        Ok(())
    }

    fn build(&self, id: Id, node: &Node) -> Result<BuiltNode, RenderError> {
        let shape = self
            .shapes
            .resolve(node.shape())
            .ok_or_else(|| RenderError::UnknownShape {
                node: id,
                shape: node.shape().to_string(),
            })?;

        let label = self
            .labels
            .compose(node.label())
            .map_err(|source| RenderError::Compose { node: id, source })?;

        let subnodes = if node.subnodes().is_empty() {
            None
        } else {
            let composed = self
                .subnodes
                .compose(node.subnodes())
                .map_err(|source| RenderError::Compose { node: id, source })?;
            Some(composed)
        };

        let decoration = node
            .decoration()
            .map(|decoration| self.decorations.render(decoration, &self.icons))
            .transpose()
            .map_err(|err| match err {
                DrawError::UnknownIcon(icon) => RenderError::UnknownIcon { node: id, icon },
            })?;

        let mut input = LayoutInput::new(label.size())
            .with_size_override(node.size_override())
            .with_padding(node.padding())
            .with_subnode_bias(self.composition.subnode_bias());
        if let Some(subnodes) = &subnodes {
            input = input.with_subnodes(subnodes.size());
        }
        if let Some(decoration) = &decoration {
            let adjustment = self.composition.offsets().adjustment(node);
            input = input.with_decoration(decoration.height(), adjustment);
        }
        let layout = NodeLayout::compute(&input);
        trace!(node_id:% = id, layout:?; "Computed node layout");

        let bbox = layout.bbox();
        if !bbox.is_valid() {
            return Err(RenderError::InvalidGeometry {
                node: id,
                width: bbox.width(),
                height: bbox.height(),
            });
        }

        let rendered = shape.render(bbox, &node.paint());
        let measured = rendered.size();
        let shape_bounds = rendered.bounds();
        let (shape_element, outline) = rendered.into_parts();

        // The shape paints first, under every other part.
        let mut children: Vec<SvgNode> = vec![shape_element];

        let mut label_group = svg_element::Group::new()
            .set("class", "label")
            .set("transform", layout.label_offset().to_translate());
        if let Some(label_id) = node.label_id() {
            label_group = label_group.set("id", label_id);
        }
        children.push(Box::new(label_group.add(label.into_element())));

        if let (Some(subnodes), Some(offset)) = (subnodes, layout.subnode_offset()) {
            let group = svg_element::Group::new()
                .set("class", "subnodes")
                .set("transform", offset.to_translate())
                .add(subnodes.into_element());
            children.push(Box::new(group));
        }

        if let (Some(decoration), Some(offset)) = (decoration, layout.decoration_offset()) {
            let group = decoration
                .into_group()
                .set("transform", offset.to_translate());
            children.push(Box::new(group));
        }

        debug!(
            node_id:% = id,
            shape = node.shape(),
            width = measured.width(),
            height = measured.height();
            "Composed node"
        );

        Ok(BuiltNode {
            children,
            outline,
            shape_bounds,
            measured,
            center: node.position(),
        })
    }
}
