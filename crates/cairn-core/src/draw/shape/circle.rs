use svg::node::element as svg_element;

use super::{RenderedShape, ShapeRenderer};
use crate::{
    draw::{Outline, Paint},
    geometry::{Point, Size},
};

/// Circle whose diameter is the larger side of the box.
#[derive(Debug, Clone, Default)]
pub struct CircleShape;

impl CircleShape {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeRenderer for CircleShape {
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape {
        let r = bbox.width().max(bbox.height()) / 2.0;

        let circle = svg_element::Circle::new()
            .set("x", -bbox.width() / 2.0)
            .set("y", -bbox.height() / 2.0)
            .set("r", r);
        let circle = crate::apply_paint!(circle, paint);

        let diameter = Size::new(r * 2.0, r * 2.0);
        RenderedShape::new(
            circle,
            Point::default().to_bounds(diameter),
            Outline::Ellipse { rx: r, ry: r },
        )
    }
}
