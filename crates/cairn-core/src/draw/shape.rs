//! Shape renderers and the registry that selects them by name.
//!
//! A node names its shape (`"rect"`, `"circle"`, ...). The composition
//! pipeline resolves that name in a [`ShapeRegistry`] and hands the resolved
//! [`ShapeRenderer`] the node's final padded box. The renderer draws a
//! primitive centered on the node's local origin that encloses the box, and
//! reports the [`Outline`] edge clipping should use.
//!
//! # Built-in shapes
//!
//! | Name | Renderer | Encloses a `w × h` box with |
//! |------|----------|-----------------------------|
//! | `rect` | [`RectangleShape`] | a `w × h` rectangle |
//! | `ellipse` | [`EllipseShape`] | an ellipse with radii `w/2`, `h/2` |
//! | `circle` | [`CircleShape`] | a circle of radius `max(w, h)/2` |
//! | `diamond` | [`DiamondShape`] | a rhombus scaled by `√2/2` per half-axis |
//! | `stack` | [`StackShape`] | a rectangle with offset layers behind it |

use std::{collections::HashMap, fmt};

use crate::{
    draw::{Outline, Paint, SvgNode},
    geometry::{Bounds, Size},
};

mod circle;
mod diamond;
mod ellipse;
mod rectangle;
mod stack;

pub use circle::CircleShape;
pub use diamond::DiamondShape;
pub use ellipse::EllipseShape;
pub use rectangle::RectangleShape;
pub use stack::StackShape;

/// A strategy that draws one kind of node shape.
pub trait ShapeRenderer: fmt::Debug {
    /// Draws the shape around the local origin so that it encloses `bbox`.
    ///
    /// `bbox` holds finite, non-negative dimensions.
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape;
}

/// The output of a [`ShapeRenderer`].
#[derive(Debug)]
pub struct RenderedShape {
    element: SvgNode,
    bounds: Bounds,
    outline: Outline,
}

impl RenderedShape {
    pub fn new(element: impl Into<SvgNode>, bounds: Bounds, outline: Outline) -> Self {
        Self {
            element: element.into(),
            bounds,
            outline,
        }
    }

    /// Bounds of everything drawn, relative to the local origin
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The measured size of the drawn shape
    pub fn size(&self) -> Size {
        self.bounds.to_size()
    }

    /// The boundary used for edge clipping
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Splits the shape into its SVG element and outline.
    pub fn into_parts(self) -> (SvgNode, Outline) {
        (self.element, self.outline)
    }
}

/// Maps shape names to renderers.
///
/// # Examples
///
/// ```
/// # use cairn_core::draw::{ShapeRegistry, Paint};
/// # use cairn_core::geometry::Size;
/// let registry = ShapeRegistry::with_defaults();
/// let circle = registry.resolve("circle").expect("circle is built in");
///
/// let shape = circle.render(Size::new(30.0, 10.0), &Paint::default());
/// assert_eq!(shape.size(), Size::new(30.0, 30.0));
/// assert!(registry.resolve("hexagon").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Box<dyn ShapeRenderer>>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in shape.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("rect", RectangleShape::new());
        registry.register("ellipse", EllipseShape::new());
        registry.register("circle", CircleShape::new());
        registry.register("diamond", DiamondShape::new());
        registry.register("stack", StackShape::default());
        registry
    }

    /// Registers `renderer` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, renderer: impl ShapeRenderer + 'static) {
        self.shapes.insert(name.into(), Box::new(renderer));
    }

    /// Looks up the renderer for `name`.
    pub fn resolve(&self, name: &str) -> Option<&dyn ShapeRenderer> {
        self.shapes.get(name).map(|renderer| renderer.as_ref())
    }

    /// Returns the registered shape names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.shapes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
