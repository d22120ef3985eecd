//! Cairn - node composition for pre-laid-out directed graph diagrams.
//!
//! Given a graph whose node positions were computed upstream, Cairn draws
//! every node sized to its content: label, stacked sub-elements, an
//! optional decoration badge, explicit size overrides, and padding. The
//! shape around that box comes from a registry of renderers, and its
//! measured size is written back to the node for the host's edge routing.

pub mod compose;
pub mod config;
pub mod export;
pub mod graph;
pub mod scene;
pub mod transition;

mod error;

pub use cairn_core::{color, draw, geometry, identifier};

pub use error::{CairnError, ComposeError, RenderError};

use std::path::Path;

use log::{debug, info};

use compose::{NodePipeline, PassReport};
use config::AppConfig;
use graph::GraphAccess;
use scene::Scene;

/// Renders graphs into a retained [`Scene`] and exports it.
///
/// The scene survives between calls to [`render`](Self::render), so a
/// second pass over a changed graph updates existing elements and fades out
/// the ones whose nodes are gone.
///
/// # Examples
///
/// ```
/// use cairn::{Renderer, config::AppConfig, graph::{Graph, Node}};
/// use cairn::geometry::{Insets, Point};
///
/// let mut graph = Graph::new();
/// graph.add_node(
///     "build",
///     Node::new("rect", "Build")
///         .with_padding(Insets::uniform(8.0))
///         .with_position(Point::new(60.0, 30.0)),
/// );
///
/// let mut renderer = Renderer::new(AppConfig::default());
/// renderer.render(&mut graph).expect("Failed to render");
///
/// let svg = renderer.to_svg().expect("Failed to export");
/// assert!(svg.contains("class=\"node\""));
/// ```
#[derive(Debug)]
pub struct Renderer {
    config: AppConfig,
    pipeline: NodePipeline,
    scene: Scene,
}

impl Renderer {
    /// Creates a renderer with the default pipeline for `config`.
    pub fn new(config: AppConfig) -> Self {
        let pipeline = NodePipeline::new(&config);
        Self {
            config,
            pipeline,
            scene: Scene::new(),
        }
    }

    /// Replaces the pipeline, e.g. to register extra shapes.
    pub fn with_pipeline(mut self, pipeline: NodePipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn pipeline_mut(&mut self) -> &mut NodePipeline {
        &mut self.pipeline
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs one composition pass over `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`CairnError::Render`] if any node fails to compose.
    pub fn render<G>(&mut self, graph: &mut G) -> Result<PassReport, CairnError>
    where
        G: GraphAccess + ?Sized,
    {
        info!("Rendering graph");
        let report = self.pipeline.run(graph, &mut self.scene)?;
        debug!(elements = self.scene.len(); "Scene updated");
        Ok(report)
    }

    /// Exports the current scene as an SVG string.
    pub fn to_svg(&self) -> Result<String, CairnError> {
        let exporter = export::svg::Svg::new(self.config.style())?;
        let doc = exporter.render_document(&self.scene);
        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Exports the current scene to an SVG file.
    pub fn write_svg(&self, path: &Path) -> Result<(), CairnError> {
        let exporter = export::svg::Svg::new(self.config.style())?;
        let doc = exporter.render_document(&self.scene);
        exporter.write_document(&doc, path)?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
