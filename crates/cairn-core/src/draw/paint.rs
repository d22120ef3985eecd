//! Fill, stroke, and free-form style applied to a node's shape.
//!
//! A node's `style` map is opaque to the composition pipeline: it is carried
//! through unchanged and written onto the shape element as an inline `style`
//! attribute. Use [`apply_paint!`](crate::apply_paint!) to attach a [`Paint`]
//! to any `svg` element builder.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::color::Color;

/// Ordered CSS declarations, e.g. `{ "stroke-width" = "2px" }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Style(IndexMap<String, String>);

impl Style {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one declaration (builder style).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Returns true if no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the declarations as an inline CSS string, or `None` when empty.
    ///
    /// ```
    /// # use cairn_core::draw::Style;
    /// let style = Style::new().with("fill", "#fee").with("stroke-width", "2px");
    /// assert_eq!(style.to_css().as_deref(), Some("fill:#fee;stroke-width:2px"));
    /// assert_eq!(Style::new().to_css(), None);
    /// ```
    pub fn to_css(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .0
            .iter()
            .map(|(property, value)| format!("{property}:{value}"))
            .collect();
        Some(declarations.join(";"))
    }
}

/// The visual inputs a shape renderer applies to the primitives it draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    fill: Option<Color>,
    stroke: Option<Color>,
    style: Style,
}

impl Paint {
    pub fn new(fill: Option<Color>, stroke: Option<Color>, style: Style) -> Self {
        Self {
            fill,
            stroke,
            style,
        }
    }

    /// Returns the fill color, if one was set on the node
    pub fn fill(&self) -> Option<&Color> {
        self.fill.as_ref()
    }

    /// Returns the stroke color, if one was set on the node
    pub fn stroke(&self) -> Option<&Color> {
        self.stroke.as_ref()
    }

    /// Returns the opaque style map
    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// Applies a [`Paint`] to an `svg` element builder.
///
/// Unset fill and stroke colors are left off so stylesheet rules still apply;
/// a non-empty style map becomes the `style` attribute.
///
/// ```
/// use cairn_core::{apply_paint, color::Color, draw::{Paint, Style}};
/// use svg::node::element::Rectangle;
///
/// let paint = Paint::new(Some(Color::new("red").unwrap()), None, Style::new().with("opacity", "0.5"));
/// let rect = apply_paint!(Rectangle::new(), &paint);
///
/// let markup = rect.to_string();
/// assert!(markup.contains("style=\"opacity:0.5\""));
/// assert!(!markup.contains("stroke="));
/// ```
#[macro_export]
macro_rules! apply_paint {
    ($element:expr, $paint:expr) => {{
        let mut elem = $element;

        if let Some(fill) = $paint.fill() {
            elem = elem.set("fill", fill.to_string());
        }
        if let Some(stroke) = $paint.stroke() {
            elem = elem.set("stroke", stroke.to_string());
        }
        if let Some(css) = $paint.style().to_css() {
            elem = elem.set("style", css);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_style_keeps_declaration_order() {
        let style = Style::new().with("b", "2").with("a", "1");
        assert_eq!(style.to_css().unwrap(), "b:2;a:1");
    }

    #[test]
    fn test_style_replaces_existing_property() {
        let style = Style::new().with("fill", "red").with("fill", "blue");
        assert_eq!(style.to_css().unwrap(), "fill:blue");
    }

    #[test]
    fn test_apply_paint_sets_colors() {
        let paint = Paint::new(
            Some(Color::new("white").unwrap()),
            Some(Color::default()),
            Style::new(),
        );
        let circle = apply_paint!(svg_element::Circle::new(), &paint).to_string();
        assert!(circle.contains("fill="));
        assert!(circle.contains("stroke=\"black\""));
        assert!(!circle.contains("style="));
    }

    #[test]
    fn test_apply_paint_empty_is_noop() {
        let rect = apply_paint!(svg_element::Rectangle::new(), &Paint::default()).to_string();
        assert_eq!(rect, svg_element::Rectangle::new().to_string());
    }
}
