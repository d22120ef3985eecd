//! Configuration types for Cairn rendering.
//!
//! All types implement [`serde::Deserialize`] with every section and field
//! optional, so a configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`DecorationConfig`] - Default decoration width, height, and position.
//! - [`CompositionConfig`] - Sub-element bias and decoration offset table.
//! - [`TextStyle`] - Font family, size, and line height for labels.
//! - [`StyleConfig`] - Document background and margin.
//!
//! # Example
//!
//! ```toml
//! [decoration]
//! width = 30
//!
//! [composition]
//! subnode_bias = 12
//!
//! [composition.offsets.classes]
//! contributing = -1
//! pinned = -2
//!
//! [text]
//! font_family = "Inter"
//! font_size = 12
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

pub use cairn_core::draw::{DecorationConfig, TextStyle};
use cairn_core::color::Color;

use crate::graph::Node;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    decoration: DecorationConfig,

    #[serde(default)]
    composition: CompositionConfig,

    #[serde(default)]
    text: TextStyle,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(
        decoration: DecorationConfig,
        composition: CompositionConfig,
        text: TextStyle,
        style: StyleConfig,
    ) -> Self {
        Self {
            decoration,
            composition,
            text,
            style,
        }
    }

    pub fn decoration(&self) -> &DecorationConfig {
        &self.decoration
    }

    pub fn composition(&self) -> &CompositionConfig {
        &self.composition
    }

    pub fn text(&self) -> &TextStyle {
        &self.text
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Constants the composition pipeline lays parts out with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Horizontal shift applied to the sub-element group
    subnode_bias: f32,
    offsets: DecorationOffsets,
}

impl CompositionConfig {
    pub fn new(subnode_bias: f32, offsets: DecorationOffsets) -> Self {
        Self {
            subnode_bias,
            offsets,
        }
    }

    pub fn subnode_bias(&self) -> f32 {
        self.subnode_bias
    }

    pub fn offsets(&self) -> &DecorationOffsets {
        &self.offsets
    }
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            subnode_bias: 10.0,
            offsets: DecorationOffsets::default(),
        }
    }
}

/// Vertical adjustments for a node's decoration, keyed by class tag and by
/// shape name. Every matching entry is added up.
///
/// ```
/// # use cairn::config::DecorationOffsets;
/// # use cairn::graph::Node;
/// let offsets = DecorationOffsets::default();
///
/// let plain = Node::new("rect", "a");
/// let both = Node::new("stack", "b").with_class("contributing");
/// assert_eq!(offsets.adjustment(&plain), 0.0);
/// assert_eq!(offsets.adjustment(&both), -5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecorationOffsets {
    classes: IndexMap<String, f32>,
    shapes: IndexMap<String, f32>,
}

impl DecorationOffsets {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
            shapes: IndexMap::new(),
        }
    }

    pub fn with_class(mut self, tag: impl Into<String>, amount: f32) -> Self {
        self.classes.insert(tag.into(), amount);
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>, amount: f32) -> Self {
        self.shapes.insert(shape.into(), amount);
        self
    }

    /// Sums the entries matching the node's class tags and shape.
    pub fn adjustment(&self, node: &Node) -> f32 {
        let by_class: f32 = self
            .classes
            .iter()
            .filter(|(tag, _)| node.has_class(tag))
            .map(|(_, amount)| amount)
            .sum();
        let by_shape = self.shapes.get(node.shape()).copied().unwrap_or(0.0);
        by_class + by_shape
    }
}

impl Default for DecorationOffsets {
    fn default() -> Self {
        Self::new()
            .with_class("contributing", -1.0)
            .with_shape("stack", -4.0)
    }
}

/// Visual styling of the exported document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color, as a color string
    background_color: Option<String>,
    /// Space around the union of node bounds
    margin: f32,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, margin: f32) -> Self {
        Self {
            background_color,
            margin,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            margin: 20.0,
        }
    }
}
