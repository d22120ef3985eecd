//! Shape outlines and boundary intersection.
//!
//! Every shape renderer reports the [`Outline`] it drew. Edge-clipping code
//! asks the outline where the ray from the node's center toward an external
//! point crosses the shape's boundary.

use crate::geometry::{Point, Size};

/// The geometric boundary of a rendered shape, relative to its center.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Axis-aligned rectangle of the given size
    Rect(Size),
    /// Ellipse with the given radii; a circle has `rx == ry`
    Ellipse { rx: f32, ry: f32 },
    /// Closed polygon through the given points
    Polygon(Vec<Point>),
}

impl Outline {
    /// Finds where the ray from `center` toward `point` leaves the outline.
    ///
    /// When `point` coincides with `center`, or the ray never crosses the
    /// outline, `point` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cairn_core::draw::Outline;
    /// # use cairn_core::geometry::{Point, Size};
    /// let outline = Outline::Rect(Size::new(40.0, 20.0));
    /// let hit = outline.intersect(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
    /// assert_eq!(hit, Point::new(120.0, 100.0));
    /// ```
    pub fn intersect(&self, center: Point, point: Point) -> Point {
        if point.sub_point(center).hypot() < 0.001 {
            return point;
        }

        match self {
            Self::Rect(size) => intersect_rect(center, *size, point),
            Self::Ellipse { rx, ry } => intersect_ellipse(center, *rx, *ry, point),
            Self::Polygon(points) => intersect_polygon(center, points, point),
        }
    }
}

fn intersect_rect(center: Point, size: Size, point: Point) -> Point {
    let dx = point.x() - center.x();
    let dy = point.y() - center.y();
    let mut half_w = size.width() / 2.0;
    let mut half_h = size.height() / 2.0;

    let (sx, sy) = if dy.abs() * half_w > dx.abs() * half_h {
        // Crosses the top or bottom edge
        if dy < 0.0 {
            half_h = -half_h;
        }
        (half_h * dx / dy, half_h)
    } else {
        // Crosses the left or right edge
        if dx < 0.0 {
            half_w = -half_w;
        }
        let sy = if dx == 0.0 { 0.0 } else { half_w * dy / dx };
        (half_w, sy)
    };

    Point::new(center.x() + sx, center.y() + sy)
}

fn intersect_ellipse(center: Point, rx: f32, ry: f32, point: Point) -> Point {
    let px = center.x() - point.x();
    let py = center.y() - point.y();

    let det = (rx * rx * py * py + ry * ry * px * px).sqrt();
    if det == 0.0 {
        return point;
    }

    let mut dx = (rx * ry * px / det).abs();
    if point.x() < center.x() {
        dx = -dx;
    }
    let mut dy = (rx * ry * py / det).abs();
    if point.y() < center.y() {
        dy = -dy;
    }

    Point::new(center.x() + dx, center.y() + dy)
}

fn intersect_polygon(center: Point, points: &[Point], point: Point) -> Point {
    let crossings = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .filter_map(|(p1, p2)| {
            intersect_segments(center, point, center.add_point(*p1), center.add_point(*p2))
        });

    // Closest crossing to the external point
    crossings
        .min_by(|a, b| {
            let da = a.sub_point(point).hypot();
            let db = b.sub_point(point).hypot();
            da.total_cmp(&db)
        })
        .unwrap_or(point)
}

/// Intersection of segments `a1-a2` and `b1-b2`, endpoints included.
fn intersect_segments(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let r = a2.sub_point(a1);
    let s = b2.sub_point(b1);
    let denom = r.x() * s.y() - r.y() * s.x();
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let q = b1.sub_point(a1);
    let t = (q.x() * s.y() - q.y() * s.x()) / denom;
    let u = (q.x() * r.y() - q.y() * r.x()) / denom;

    const TOLERANCE: f32 = 1e-5;
    let within = |v: f32| (-TOLERANCE..=1.0 + TOLERANCE).contains(&v);
    if !within(t) || !within(u) {
        return None;
    }

    Some(Point::new(
        r.x().mul_add(t, a1.x()), // a1.x + t * r.x
        r.y().mul_add(t, a1.y()), // a1.y + t * r.y
    ))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 0.001);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 0.001);
    }

    fn diamond(half_w: f32, half_h: f32) -> Outline {
        Outline::Polygon(vec![
            Point::new(0.0, -half_h),
            Point::new(-half_w, 0.0),
            Point::new(0.0, half_h),
            Point::new(half_w, 0.0),
        ])
    }

    #[test]
    fn test_rect_from_each_side() {
        let outline = Outline::Rect(Size::new(40.0, 40.0));
        let c = Point::new(100.0, 100.0);

        assert_point_eq(outline.intersect(c, Point::new(200.0, 100.0)), Point::new(120.0, 100.0));
        assert_point_eq(outline.intersect(c, Point::new(0.0, 100.0)), Point::new(80.0, 100.0));
        assert_point_eq(outline.intersect(c, Point::new(100.0, 200.0)), Point::new(100.0, 120.0));
        assert_point_eq(outline.intersect(c, Point::new(100.0, 0.0)), Point::new(100.0, 80.0));
    }

    #[test]
    fn test_rect_diagonal_hits_corner() {
        let outline = Outline::Rect(Size::new(40.0, 40.0));
        let hit = outline.intersect(Point::new(100.0, 100.0), Point::new(200.0, 200.0));
        assert_point_eq(hit, Point::new(120.0, 120.0));
    }

    #[test]
    fn test_rect_wide_box_shallow_angle() {
        // 100x20 box, ray with slope 1/2 leaves through the bottom edge
        let outline = Outline::Rect(Size::new(100.0, 20.0));
        let hit = outline.intersect(Point::default(), Point::new(40.0, 20.0));
        assert_point_eq(hit, Point::new(20.0, 10.0));
    }

    #[test]
    fn test_circle_intersection() {
        let outline = Outline::Ellipse { rx: 10.0, ry: 10.0 };
        let hit = outline.intersect(Point::new(50.0, 50.0), Point::new(50.0, 0.0));
        assert_point_eq(hit, Point::new(50.0, 40.0));

        let hit = outline.intersect(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert_point_eq(hit, Point::new(6.0, 8.0));
    }

    #[test]
    fn test_ellipse_axes() {
        let outline = Outline::Ellipse { rx: 20.0, ry: 5.0 };
        let c = Point::default();
        assert_point_eq(outline.intersect(c, Point::new(-100.0, 0.0)), Point::new(-20.0, 0.0));
        assert_point_eq(outline.intersect(c, Point::new(0.0, 100.0)), Point::new(0.0, 5.0));
    }

    #[test]
    fn test_diamond_vertex_and_edge() {
        let outline = diamond(20.0, 10.0);
        let c = Point::new(10.0, 10.0);

        assert_point_eq(outline.intersect(c, Point::new(100.0, 10.0)), Point::new(30.0, 10.0));
        assert_point_eq(outline.intersect(c, Point::new(10.0, -50.0)), Point::new(10.0, 0.0));

        // Along the diagonal of slope 1: |x|/20 + |y|/10 = 1 gives x = y = 20/3
        let hit = outline.intersect(Point::default(), Point::new(50.0, 50.0));
        assert_point_eq(hit, Point::new(20.0 / 3.0, 20.0 / 3.0));
    }

    #[test]
    fn test_point_inside_polygon_falls_back() {
        let outline = diamond(20.0, 10.0);
        let inside = Point::new(1.0, 1.0);
        assert_point_eq(outline.intersect(Point::default(), inside), inside);
    }

    #[test]
    fn test_same_point_falls_back() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Outline::Rect(Size::new(10.0, 10.0)).intersect(p, p), p);
        assert_eq!(Outline::Ellipse { rx: 1.0, ry: 1.0 }.intersect(p, p), p);
    }
}
