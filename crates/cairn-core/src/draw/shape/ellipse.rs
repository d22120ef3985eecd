use svg::node::element as svg_element;

use super::{RenderedShape, ShapeRenderer};
use crate::{
    draw::{Outline, Paint},
    geometry::{Point, Size},
};

/// Ellipse inscribed in the box.
#[derive(Debug, Clone, Default)]
pub struct EllipseShape;

impl EllipseShape {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeRenderer for EllipseShape {
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape {
        let rx = bbox.width() / 2.0;
        let ry = bbox.height() / 2.0;

        let ellipse = svg_element::Ellipse::new()
            .set("cx", 0)
            .set("cy", 0)
            .set("rx", rx)
            .set("ry", ry);
        let ellipse = crate::apply_paint!(ellipse, paint);

        RenderedShape::new(
            ellipse,
            Point::default().to_bounds(bbox),
            Outline::Ellipse { rx, ry },
        )
    }
}
