use svg::node::element as svg_element;

use super::{RenderedShape, ShapeRenderer};
use crate::{
    draw::{Outline, Paint},
    geometry::{Point, Size},
};

/// Rectangle exactly the size of the box, with optional rounded corners.
#[derive(Debug, Clone, Default)]
pub struct RectangleShape {
    corner_radius: Option<f32>,
}

impl RectangleShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corner radius (builder style)
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }
}

impl ShapeRenderer for RectangleShape {
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape {
        let mut rect = svg_element::Rectangle::new()
            .set("x", -bbox.width() / 2.0)
            .set("y", -bbox.height() / 2.0)
            .set("width", bbox.width())
            .set("height", bbox.height());

        if let Some(radius) = self.corner_radius {
            rect = rect.set("rx", radius).set("ry", radius);
        }

        let rect = crate::apply_paint!(rect, paint);
        RenderedShape::new(rect, Point::default().to_bounds(bbox), Outline::Rect(bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_matches_box() {
        let shape = RectangleShape::new().render(Size::new(40.0, 20.0), &Paint::default());
        assert_eq!(shape.size(), Size::new(40.0, 20.0));
        assert_eq!(shape.bounds().min_point(), Point::new(-20.0, -10.0));
        assert_eq!(shape.outline(), &Outline::Rect(Size::new(40.0, 20.0)));
    }

    #[test]
    fn test_rect_markup() {
        let shape = RectangleShape::new()
            .with_corner_radius(3.0)
            .render(Size::new(40.0, 20.0), &Paint::default());
        let (element, _) = shape.into_parts();
        let markup = element.to_string();
        assert!(markup.starts_with("<rect"));
        assert!(markup.contains("x=\"-20\""));
        assert!(markup.contains("rx=\"3\""));
    }
}
