//! Geometric primitives for node composition.
//!
//! This module provides the value types the composition pipeline measures and
//! positions with.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, either a node center or a local offset
//! - [`Size`] - A width/height pair; every bounding box the pipeline merges is a [`Size`]
//! - [`Bounds`] - An axis-aligned rectangle with minimum and maximum coordinates
//! - [`Insets`] - Asymmetric padding for the four sides of a node
//!
//! # Coordinate System
//!
//! Coordinates follow SVG: the origin is top-left, X grows to the right and Y
//! grows downward. Every node is composed around its own local origin, which
//! is the center of its shape.
//!
//! ```text
//!          -h/2
//!     ┌──────┬──────┐
//!     │      │      │
//! -w/2├──────●──────┤ +w/2     ● = local origin (0, 0)
//!     │      │      │
//!     └──────┴──────┘
//!          +h/2
//! ```

use serde::Deserialize;

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use cairn_core::geometry::Point;
/// let center = Point::new(10.0, 20.0);
/// let offset = Point::new(5.0, -5.0);
///
/// let moved = center.add_point(offset);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Treats this point as a center and returns the bounds of `size` around it
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }

    /// Formats this point as an SVG `translate(x,y)` transform
    ///
    /// ```
    /// # use cairn_core::geometry::Point;
    /// assert_eq!(Point::new(0.0, -8.5).to_translate(), "translate(0,-8.5)");
    /// ```
    pub fn to_translate(self) -> String {
        format!("translate({},{})", self.x, self.y)
    }
}

/// The dimensions of an element.
///
/// The composition pipeline treats every measured part (label, sub-elements,
/// decoration) as a [`Size`] and merges them with [`Size::merge_vertical`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a copy with the width replaced
    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// Returns a copy with the height replaced
    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    /// Returns a new Size with the insets added to both dimensions
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if both dimensions are finite and non-negative
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Stacks `other` below this size: heights add, the wider width wins.
    ///
    /// ```
    /// # use cairn_core::geometry::Size;
    /// let label = Size::new(20.0, 10.0);
    /// let items = Size::new(35.0, 24.0);
    ///
    /// let stacked = label.merge_vertical(items);
    /// assert_eq!(stacked, Size::new(35.0, 34.0));
    /// ```
    pub fn merge_vertical(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

/// A rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Converts bounds to a Size
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// ```
    /// # use cairn_core::geometry::{Bounds, Point, Size};
    /// let body = Bounds::new_from_center(Point::default(), Size::new(40.0, 20.0));
    /// let layer = body.translate(Point::new(4.0, -4.0));
    ///
    /// let stacked = body.merge(&layer);
    /// assert_eq!(stacked.to_size(), Size::new(44.0, 24.0));
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Grows the bounds outward by the given insets
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left,
            min_y: self.min_y - insets.top,
            max_x: self.max_x + insets.right,
            max_y: self.max_y + insets.bottom,
        }
    }
}

/// Spacing around a node's content with independent values per side.
///
/// Missing sides deserialize as `0`, so a node description may omit padding
/// entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }

    /// Half the difference between left and right; the horizontal shift that
    /// keeps content centered inside asymmetric padding
    pub fn horizontal_skew(self) -> f32 {
        (self.left - self.right) / 2.0
    }

    /// Half the difference between top and bottom
    pub fn vertical_skew(self) -> f32 {
        (self.top - self.bottom) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_translate_format() {
        assert_eq!(Point::new(-7.5, 3.0).to_translate(), "translate(-7.5,3)");
    }

    #[test]
    fn test_size_merge_vertical() {
        let merged = Size::new(20.0, 10.0).merge_vertical(Size::new(12.0, 6.0));
        assert_eq!(merged.width(), 20.0);
        assert_eq!(merged.height(), 16.0);
    }

    #[test]
    fn test_size_add_padding_asymmetric() {
        let padded = Size::new(20.0, 10.0).add_padding(Insets::new(5.0, 10.0, 5.0, 10.0));
        assert_eq!(padded, Size::new(40.0, 20.0));
    }

    #[test]
    fn test_size_with_dimension() {
        let size = Size::new(20.0, 10.0);
        assert_eq!(size.with_width(100.0), Size::new(100.0, 10.0));
        assert_eq!(size.with_height(3.0), Size::new(20.0, 3.0));
    }

    #[test]
    fn test_size_is_valid() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 0.0).is_valid());
        assert!(!Size::new(f32::NAN, 1.0).is_valid());
        assert!(!Size::new(1.0, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 60.0), Size::new(20.0, 30.0));
        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 75.0);
    }

    #[test]
    fn test_bounds_merge_and_padding() {
        let a = Bounds::new_from_center(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        let b = Bounds::new_from_center(Point::new(10.0, 25.0), Size::new(10.0, 10.0));
        let merged = a.merge(&b).add_padding(Insets::uniform(1.0));
        assert_eq!(merged.min_point(), Point::new(-1.0, -1.0));
        assert_eq!(merged.to_size(), Size::new(17.0, 32.0));
    }

    #[test]
    fn test_insets_skew() {
        let insets = Insets::new(8.0, 2.0, 4.0, 10.0);
        assert_eq!(insets.horizontal_skew(), 4.0);
        assert_eq!(insets.vertical_skew(), 2.0);
    }

    #[test]
    fn test_insets_deserialize_defaults_missing_sides() {
        let value = serde::de::value::MapDeserializer::<_, serde::de::value::Error>::new(
            [("left", 3.0_f32)].into_iter(),
        );
        let insets = Insets::deserialize(value).unwrap();
        assert_eq!(insets, Insets::new(0.0, 0.0, 0.0, 3.0));
    }
}
