//! Drawing primitives for node composition.
//!
//! # Overview
//!
//! - [`ShapeRegistry`] / [`ShapeRenderer`] - node shapes selected by name
//! - [`Outline`] - the boundary a shape reports for edge clipping
//! - [`DecorationRenderer`] - badges drawn on a node's top edge
//! - [`IconRegistry`] / [`IconRenderer`] - symbols drawn inside decorations
//! - [`Text`] / [`TextStyle`] - measured label text
//! - [`Paint`] / [`Style`] - fill, stroke, and inline style for shapes

mod decoration;
mod icon;
mod outline;
mod paint;
mod shape;
pub mod text;

pub use decoration::{
    Decoration, DecorationConfig, DecorationElement, DecorationPosition, DecorationRenderer,
};
pub use icon::{ArrowRightIcon, IconPath, IconRegistry, IconRenderer};
pub use outline::Outline;
pub use paint::{Paint, Style};
pub use shape::{
    CircleShape, DiamondShape, EllipseShape, RectangleShape, RenderedShape, ShapeRegistry,
    ShapeRenderer, StackShape,
};
pub use text::{Text, TextStyle};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;
