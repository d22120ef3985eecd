//! SVG document export.
//!
//! Each node element becomes a `<g>` carrying its class, id, and opacity,
//! translated to the node's layout position. The viewBox is fitted to the
//! union of the rendered shapes plus the configured margin.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use cairn_core::{
    color::Color,
    geometry::{Bounds, Insets},
};

use crate::{config::StyleConfig, export, scene::Scene};

/// SVG exporter for scenes.
#[derive(Debug, Clone)]
pub struct Svg {
    margin: f32,
    background: Option<Color>,
}

impl Svg {
    /// Creates an exporter from the style section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the background color is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, export::Error> {
        let background = style.background_color().map_err(export::Error::Render)?;
        Ok(Self {
            margin: style.margin(),
            background,
        })
    }

    /// Renders every element of `scene` into a document.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let bounds = scene
            .bounds()
            .unwrap_or_default()
            .add_padding(Insets::uniform(self.margin));
        debug!(width = bounds.width(), height = bounds.height(); "SVG dimensions");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if let Some(background) = &self.background {
            doc = doc.add(self.render_background(bounds, background));
        }

        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for element in scene.elements() {
            let mut group = svg_element::Group::new()
                .set("class", element.class())
                .set("transform", element.center().to_translate())
                .set("opacity", element.opacity());
            if let Some(id) = element.dom_id() {
                group = group.set("id", id);
            }
            for child in element.children() {
                group = group.add(child.clone());
            }
            nodes = nodes.add(group);
        }

        doc.add(nodes)
    }

    fn render_background(&self, bounds: Bounds, color: &Color) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", color)
            .set("fill-opacity", color.alpha())
    }

    /// Writes an SVG document to `path`.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        info!(file_name:? = path; "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name:? = path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name:? = path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compose::NodePipeline,
        config::AppConfig,
        graph::{Graph, Node, SizeOverride},
    };
    use cairn_core::geometry::Point;

    fn scene_with_two_nodes() -> Scene {
        let mut graph = Graph::new();
        graph.add_node(
            "a",
            Node::new("rect", "")
                .with_id("node-a")
                .with_size_override(SizeOverride::new(Some(40.0), Some(20.0)))
                .with_position(Point::new(0.0, 0.0)),
        );
        graph.add_node(
            "b",
            Node::new("rect", "")
                .with_size_override(SizeOverride::new(Some(40.0), Some(20.0)))
                .with_position(Point::new(100.0, 50.0)),
        );

        let mut scene = Scene::new();
        NodePipeline::new(&AppConfig::default())
            .run(&mut graph, &mut scene)
            .unwrap();
        scene
    }

    #[test]
    fn test_view_box_fits_nodes_and_margin() {
        let style = StyleConfig::new(None, 10.0);
        let doc = Svg::new(&style).unwrap().render_document(&scene_with_two_nodes());
        let markup = doc.to_string();

        // Nodes span (-20,-10) to (120,60)
        assert!(markup.contains("viewBox=\"-30 -20 160 90\""));
        assert!(markup.contains("transform=\"translate(100,50)\""));
        assert!(markup.contains("id=\"node-a\""));
        assert!(markup.contains("class=\"node\""));
    }

    #[test]
    fn test_background_rect() {
        let style = StyleConfig::new(Some("white".to_string()), 0.0);
        let markup = Svg::new(&style)
            .unwrap()
            .render_document(&scene_with_two_nodes())
            .to_string();
        assert!(markup.contains("fill=\"white\""));
    }

    #[test]
    fn test_invalid_background_rejected() {
        let style = StyleConfig::new(Some("not-a-color".to_string()), 0.0);
        assert!(matches!(Svg::new(&style), Err(export::Error::Render(_))));
    }

    #[test]
    fn test_empty_scene_is_margin_only() {
        let style = StyleConfig::new(None, 5.0);
        let markup = Svg::new(&style).unwrap().render_document(&Scene::new()).to_string();
        assert!(markup.contains("viewBox=\"-5 -5 10 10\""));
    }

    #[test]
    fn test_write_document_to_missing_directory() {
        let exporter = Svg::new(&StyleConfig::default()).unwrap();
        let doc = exporter.render_document(&scene_with_two_nodes());
        let path = std::env::temp_dir()
            .join("cairn-missing-dir-for-export")
            .join("out.svg");

        let err = exporter.write_document(&doc, &path).unwrap_err();
        assert!(matches!(err, export::Error::Io(_)));
    }

    #[test]
    fn test_write_document_round_trips_markup() {
        let exporter = Svg::new(&StyleConfig::default()).unwrap();
        let doc = exporter.render_document(&scene_with_two_nodes());
        let path = std::env::temp_dir().join("cairn-export-write-test.svg");

        exporter.write_document(&doc, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("id=\"node-a\""));
        let _ = std::fs::remove_file(&path);
    }
}
