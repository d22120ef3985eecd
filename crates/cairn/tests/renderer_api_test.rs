//! Integration tests for the Renderer API
//!
//! These tests go through the default text composers, so they check
//! structure rather than exact label sizes.

use cairn::{
    CairnError, RenderError, Renderer,
    config::AppConfig,
    draw::{Decoration, RectangleShape},
    geometry::{Insets, Point},
    graph::{Graph, GraphAccess, Label, Node},
    identifier::Id,
};

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(
        "build",
        Node::new("rect", "Build")
            .with_padding(Insets::uniform(8.0))
            .with_position(Point::new(60.0, 40.0))
            .with_id("node-build"),
    );
    graph.add_node(
        "test",
        Node::new("stack", "Test")
            .with_class("contributing")
            .with_subnodes(vec![Label::text("unit"), Label::html("<i>e2e</i>")])
            .with_decoration(Decoration::new().with_icon("arrow-right"))
            .with_position(Point::new(200.0, 40.0)),
    );
    graph
}

#[test]
fn test_renderer_default_constructs() {
    let renderer = Renderer::default();
    assert!(renderer.scene().is_empty());
}

#[test]
fn test_render_and_export() {
    let mut graph = sample_graph();
    let mut renderer = Renderer::new(AppConfig::default());

    let report = renderer.render(&mut graph).expect("Failed to render");
    assert_eq!(report.composed().len(), 2);

    for id in graph.node_ids() {
        let size = graph.node(id).unwrap().measured_size().unwrap();
        assert!(size.width() > 0.0 && size.height() > 0.0);
    }

    let svg = renderer.to_svg().expect("Failed to export");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("id=\"node-build\""));
    assert!(svg.contains("class=\"node contributing\""));
    assert!(svg.contains("decoration__icon"));
    assert!(svg.contains("<foreignObject"));
}

#[test]
fn test_write_svg_file() {
    let mut graph = sample_graph();
    let mut renderer = Renderer::default();
    renderer.render(&mut graph).unwrap();

    let path = std::env::temp_dir().join(format!("cairn-renderer-{}.svg", std::process::id()));
    renderer.write_svg(&path).expect("Failed to write SVG");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_render_error_is_wrapped() {
    let mut graph = Graph::new();
    graph.add_node("x", Node::new("trapezoid", "X"));

    let err = Renderer::default().render(&mut graph).unwrap_err();
    assert!(matches!(
        err,
        CairnError::Render(RenderError::UnknownShape { .. })
    ));
    assert_eq!(err.to_string(), "node `x` uses unknown shape `trapezoid`");
}

#[test]
fn test_custom_shape_registration() {
    let mut graph = Graph::new();
    graph.add_node("x", Node::new("rounded", "X"));

    let mut renderer = Renderer::default();
    renderer
        .pipeline_mut()
        .shapes_mut()
        .register("rounded", RectangleShape::new().with_corner_radius(4.0));

    renderer.render(&mut graph).expect("Failed to render");
    let svg = renderer.to_svg().unwrap();
    assert!(svg.contains("rx=\"4\""));
}

#[test]
fn test_second_render_updates_scene() {
    let mut graph = sample_graph();
    let mut renderer = Renderer::default();
    renderer.render(&mut graph).unwrap();

    graph.remove_node("test");
    let report = renderer.render(&mut graph).unwrap();

    assert_eq!(report.exited(), &[Id::new("test")]);
    assert_eq!(renderer.scene().len(), 1);
    assert!(renderer.to_svg().unwrap().contains("class=\"update node\""));
}
