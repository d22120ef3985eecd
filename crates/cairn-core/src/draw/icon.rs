//! Icon symbols drawn inside decoration badges.
//!
//! Icons are looked up by name in an [`IconRegistry`]. The registry ships
//! with `arrow-right`; hosts register their own catalog on top.

use std::{collections::HashMap, fmt};

use svg::node::element as svg_element;

/// Path data plus the rotation the icon is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPath {
    data: String,
    rotation: f32,
}

impl IconPath {
    pub fn new(data: impl Into<String>, rotation: f32) -> Self {
        Self {
            data: data.into(),
            rotation,
        }
    }

    /// The SVG path `d` attribute
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Rotation in degrees, applied after translation
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Builds a `<path>` centered on `(0, y)`.
    pub fn to_element(&self, y: f32) -> svg_element::Path {
        svg_element::Path::new()
            .set("d", self.data.as_str())
            .set(
                "transform",
                format!("translate(0,{y}) rotate({})", self.rotation),
            )
    }
}

/// A strategy that produces the path of one icon.
pub trait IconRenderer: fmt::Debug {
    fn render(&self) -> IconPath;
}

/// A triangle pointing right.
///
/// Drawn as the d3 `triangle-up` symbol of the given area, an equilateral
/// triangle with base `2·rx` and height `√3·rx`, rotated a quarter turn.
#[derive(Debug, Clone)]
pub struct ArrowRightIcon {
    area: f32,
}

impl ArrowRightIcon {
    pub fn new(area: f32) -> Self {
        Self { area }
    }
}

impl Default for ArrowRightIcon {
    fn default() -> Self {
        Self::new(34.0)
    }
}

impl IconRenderer for ArrowRightIcon {
    fn render(&self) -> IconPath {
        let sqrt3 = 3.0_f32.sqrt();
        let rx = (self.area / sqrt3).sqrt();
        let ry = rx * sqrt3 / 2.0;

        let data = format!("M0,{}L{rx},{ry}L{},{ry}Z", -ry, -rx);
        IconPath::new(data, 90.0)
    }
}

/// Maps icon names to renderers.
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Box<dyn IconRenderer>>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `arrow-right` icon.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("arrow-right", ArrowRightIcon::default());
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, renderer: impl IconRenderer + 'static) {
        self.icons.insert(name.into(), Box::new(renderer));
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn IconRenderer> {
        self.icons.get(name).map(|renderer| renderer.as_ref())
    }
}
