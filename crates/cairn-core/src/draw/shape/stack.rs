use svg::node::element as svg_element;

use super::{RenderedShape, ShapeRenderer};
use crate::{
    draw::{Outline, Paint},
    geometry::{Bounds, Point, Size},
};

/// A rectangle with copies of itself layered behind, offset up and to the
/// right, drawn as a pile of cards.
///
/// The front rectangle encloses the box; with the default two layers at a
/// 2-unit step the measured size grows by 4 in each dimension and the
/// topmost edge sits 4 units above the front rectangle.
#[derive(Debug, Clone)]
pub struct StackShape {
    layers: usize,
    step: f32,
}

impl StackShape {
    /// Creates a stack with `layers` back layers, each shifted by `step`.
    pub fn new(layers: usize, step: f32) -> Self {
        Self { layers, step }
    }
}

impl Default for StackShape {
    fn default() -> Self {
        Self::new(2, 2.0)
    }
}

impl ShapeRenderer for StackShape {
    fn render(&self, bbox: Size, paint: &Paint) -> RenderedShape {
        let front = Point::default().to_bounds(bbox);
        let mut bounds: Bounds = front;
        let mut group = svg_element::Group::new().set("class", "stack");

        // Back to front so the front rectangle paints last.
        for layer in (0..=self.layers).rev() {
            let shift = layer as f32 * self.step;
            let layer_bounds = front.translate(Point::new(shift, -shift));
            bounds = bounds.merge(&layer_bounds);

            let rect = svg_element::Rectangle::new()
                .set("x", layer_bounds.min_x())
                .set("y", layer_bounds.min_y())
                .set("width", bbox.width())
                .set("height", bbox.height());
            group = group.add(crate::apply_paint!(rect, paint));
        }

        RenderedShape::new(group, bounds, Outline::Rect(bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_default_grows_by_four() {
        let shape = StackShape::default().render(Size::new(40.0, 20.0), &Paint::default());
        assert_eq!(shape.size(), Size::new(44.0, 24.0));
        assert_eq!(shape.bounds().min_y(), -14.0);
        assert_eq!(shape.bounds().max_x(), 24.0);
    }

    #[test]
    fn test_stack_clips_against_front_rect() {
        let shape = StackShape::default().render(Size::new(40.0, 20.0), &Paint::default());
        assert_eq!(shape.outline(), &Outline::Rect(Size::new(40.0, 20.0)));
    }

    #[test]
    fn test_stack_draws_every_layer() {
        let shape = StackShape::new(3, 1.0).render(Size::new(10.0, 10.0), &Paint::default());
        let (element, _) = shape.into_parts();
        assert_eq!(element.to_string().matches("<rect").count(), 4);
    }
}
