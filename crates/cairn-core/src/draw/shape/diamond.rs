use std::f32::consts::FRAC_1_SQRT_2;

use svg::node::element as svg_element;

use super::{RenderedShape, ShapeRenderer};
use crate::{
    draw::{Outline, Paint},
    geometry::{Point, Size},
};

/// Rhombus centered on the box.
///
/// Each half-axis is `√2/2` of the matching box side, so a box of `w × h`
/// yields a diamond of `w·√2 × h·√2`. The corners of the box fall
/// outside the diamond.
#[derive(Debug, Clone, Default)]
pub struct DiamondShape;

impl DiamondShape {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeRenderer for DiamondShape {
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape {
        // w·√2/2 == w/√2
        let half_w = bbox.width() * FRAC_1_SQRT_2;
        let half_h = bbox.height() * FRAC_1_SQRT_2;

        let points = vec![
            Point::new(0.0, -half_h),
            Point::new(-half_w, 0.0),
            Point::new(0.0, half_h),
            Point::new(half_w, 0.0),
        ];
        let points_attr = points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = svg_element::Polygon::new().set("points", points_attr);
        let polygon = crate::apply_paint!(polygon, paint);

        RenderedShape::new(
            polygon,
            Point::default().to_bounds(Size::new(half_w * 2.0, half_h * 2.0)),
            Outline::Polygon(points),
        )
    }
}
