//! Decoration badges attached to the top edge of a node.
//!
//! A decoration is a small filled box with a three-sided border and an
//! optional icon inside. The [`DecorationRenderer`] draws it around its own
//! local origin; the composition pipeline decides where the group goes.
//!
//! ```text
//!   -w/2          w/2
//!     │ ┌───────┐ │   y = 1
//!     │ │   ▶   │ │
//!     │ └───────┘ │   y = h + 1
//!     └───────────┘
//! ```

use log::trace;
use serde::Deserialize;
use svg::node::element as svg_element;

use crate::{draw::IconRegistry, error::DrawError, geometry::Size};

/// Edge of the node a decoration is attached to.
///
/// Only [`Top`](Self::Top) is drawn; the other positions produce an empty
/// group so hosts can add them later without changing node descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Per-node decoration request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Decoration {
    width: Option<f32>,
    height: Option<f32>,
    position: Option<DecorationPosition>,
    class: Option<String>,
    icon: Option<String>,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_position(mut self, position: DecorationPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

/// Defaults for decorations that leave a field unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    pub width: f32,
    pub height: f32,
    pub position: DecorationPosition,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            width: 26.0,
            height: 14.0,
            position: DecorationPosition::Top,
        }
    }
}

/// A drawn decoration, not yet positioned.
#[derive(Debug)]
pub struct DecorationElement {
    group: svg_element::Group,
    size: Size,
    position: DecorationPosition,
}

impl DecorationElement {
    /// Size of the drawn box; zero for positions that draw nothing
    pub fn size(&self) -> Size {
        self.size
    }

    /// The height the decoration adds to the node's content
    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn position(&self) -> DecorationPosition {
        self.position
    }

    pub fn into_group(self) -> svg_element::Group {
        self.group
    }
}

/// Draws [`Decoration`]s against a [`DecorationConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecorationRenderer {
    config: DecorationConfig,
}

impl DecorationRenderer {
    pub fn new(config: DecorationConfig) -> Self {
        Self { config }
    }

    /// Draws `decoration`, resolving its icon in `icons`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnknownIcon`] when the icon name is not
    /// registered, whatever the position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cairn_core::draw::{Decoration, DecorationRenderer, IconRegistry};
    /// # use cairn_core::geometry::Size;
    /// let renderer = DecorationRenderer::default();
    /// let badge = renderer
    ///     .render(&Decoration::new().with_icon("arrow-right"), &IconRegistry::with_defaults())
    ///     .unwrap();
    /// assert_eq!(badge.size(), Size::new(26.0, 14.0));
    /// ```
    pub fn render(
        &self,
        decoration: &Decoration,
        icons: &IconRegistry,
    ) -> Result<DecorationElement, DrawError> {
        let width = positive_or(decoration.width, self.config.width);
        let height = positive_or(decoration.height, self.config.height);
        let position = decoration.position.unwrap_or(self.config.position);

        let icon = decoration
            .icon()
            .map(|name| {
                icons
                    .resolve(name)
                    .map(|renderer| renderer.render())
                    .ok_or_else(|| DrawError::UnknownIcon(name.to_string()))
            })
            .transpose()?;

        let class = match decoration.class() {
            Some(extra) => format!("decoration {extra}"),
            None => "decoration".to_string(),
        };
        let mut group = svg_element::Group::new().set("class", class);

        if position != DecorationPosition::Top {
            trace!(position:?; "Decoration position draws nothing");
            return Ok(DecorationElement {
                group,
                size: Size::default(),
                position,
            });
        }

        let half = width / 2.0;
        let rect = svg_element::Rectangle::new()
            .set("x", -half)
            .set("y", 1)
            .set("width", width)
            .set("height", height);
        let border = svg_element::Polyline::new()
            .set("class", "decoration__border")
            .set(
                "points",
                format!(
                    "{},0 {},{} {},{} {},0",
                    -half,
                    -half,
                    height + 1.0,
                    half,
                    height + 1.0,
                    half
                ),
            );
        group = group.add(rect).add(border);

        if let Some(icon) = icon {
            group = group.add(
                icon.to_element(height / 2.0)
                    .set("class", "decoration__icon"),
            );
        }

        trace!(width = width, height = height; "Rendered decoration");
        Ok(DecorationElement {
            group,
            size: Size::new(width, height),
            position,
        })
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| *v > 0.0).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(decoration: Decoration) -> Result<DecorationElement, DrawError> {
        DecorationRenderer::default().render(&decoration, &IconRegistry::with_defaults())
    }

    #[test]
    fn test_defaults_applied() {
        let badge = render(Decoration::new()).unwrap();
        assert_eq!(badge.size(), Size::new(26.0, 14.0));
        assert_eq!(badge.position(), DecorationPosition::Top);
    }

    #[test]
    fn test_non_positive_dimensions_fall_back() {
        let badge = render(Decoration::new().with_width(0.0).with_height(-3.0)).unwrap();
        assert_eq!(badge.size(), Size::new(26.0, 14.0));
    }

    #[test]
    fn test_top_markup() {
        let badge = render(Decoration::new().with_width(30.0).with_height(10.0)).unwrap();
        let markup = badge.into_group().to_string();

        assert!(markup.contains("class=\"decoration\""));
        assert!(markup.contains("x=\"-15\""));
        assert!(markup.contains("y=\"1\""));
        assert!(markup.contains("class=\"decoration__border\""));
        assert!(markup.contains("points=\"-15,0 -15,11 15,11 15,0\""));
        assert!(!markup.contains("decoration__icon"));
    }

    #[test]
    fn test_extra_class_and_icon() {
        let badge = render(
            Decoration::new()
                .with_class("warning")
                .with_icon("arrow-right"),
        )
        .unwrap();
        let markup = badge.into_group().to_string();

        assert!(markup.contains("class=\"decoration warning\""));
        assert!(markup.contains("class=\"decoration__icon\""));
        assert!(markup.contains("translate(0,7) rotate(90)"));
    }

    #[test]
    fn test_unknown_icon_is_an_error() {
        let err = render(Decoration::new().with_icon("sparkles")).unwrap_err();
        assert_eq!(err, DrawError::UnknownIcon("sparkles".to_string()));
        assert_eq!(err.to_string(), "unknown icon `sparkles`");
    }

    #[test]
    fn test_unknown_icon_checked_for_undrawn_positions() {
        let result = render(
            Decoration::new()
                .with_position(DecorationPosition::Left)
                .with_icon("sparkles"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_other_positions_are_empty() {
        for position in [
            DecorationPosition::Bottom,
            DecorationPosition::Left,
            DecorationPosition::Right,
        ] {
            let badge = render(Decoration::new().with_position(position)).unwrap();
            assert!(badge.size().is_zero());
            assert_eq!(badge.height(), 0.0);
            assert!(!badge.into_group().to_string().contains("<rect"));
        }
    }

    #[test]
    fn test_config_overrides_defaults() {
        let renderer = DecorationRenderer::new(DecorationConfig {
            width: 40.0,
            height: 20.0,
            position: DecorationPosition::Top,
        });
        let badge = renderer
            .render(&Decoration::new(), &IconRegistry::new())
            .unwrap();
        assert_eq!(badge.size(), Size::new(40.0, 20.0));
    }

    #[test]
    fn test_position_deserializes_lowercase() {
        use serde::de::{IntoDeserializer, value::Error};

        let de: serde::de::value::StrDeserializer<'_, Error> = "bottom".into_deserializer();
        let position = DecorationPosition::deserialize(de).unwrap();
        assert_eq!(position, DecorationPosition::Bottom);
    }
}
