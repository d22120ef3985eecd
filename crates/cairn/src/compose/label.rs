//! Label and sub-element composers.
//!
//! Composers turn opaque [`Label`] content into SVG and report the bounding
//! size of what they drew. They never see or touch node geometry.

use std::fmt;

use svg::{Node as _, node::Text as SvgText, node::element as svg_element};

use cairn_core::{
    draw::{SvgNode, Text, TextStyle, text::plain_text},
    geometry::{Point, Size},
};

use crate::{error::ComposeError, graph::Label};

/// Composed content and its bounding size.
#[derive(Debug)]
pub struct Composed {
    element: SvgNode,
    size: Size,
}

impl Composed {
    pub fn new(element: impl Into<SvgNode>, size: Size) -> Self {
        Self {
            element: element.into(),
            size,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn into_element(self) -> SvgNode {
        self.element
    }
}

/// Draws a node's label.
pub trait LabelComposer: fmt::Debug {
    /// Draws `label` centered on the local origin.
    fn compose(&self, label: &Label) -> Result<Composed, ComposeError>;
}

/// Draws a node's ordered sub-elements as one block.
pub trait SubnodeComposer: fmt::Debug {
    /// Draws `subnodes`, which is never empty.
    fn compose(&self, subnodes: &[Label]) -> Result<Composed, ComposeError>;
}

/// Default label composer.
///
/// Text labels become an SVG `<text>` with one line per `tspan`. HTML labels
/// are measured by the text they display and drawn inside a
/// `<foreignObject>`.
#[derive(Debug, Clone, Default)]
pub struct TextLabelComposer {
    style: TextStyle,
}

impl TextLabelComposer {
    pub fn new(style: TextStyle) -> Self {
        Self { style }
    }

    fn compose_html(&self, markup: &str) -> Composed {
        let content = plain_text(markup);
        let size = Text::new(&self.style, &content).calculate_size();

        let mut div = svg_element::Element::new("div");
        div.assign("xmlns", "http://www.w3.org/1999/xhtml");
        div.assign(
            "style",
            format!(
                "display:inline-block;white-space:pre;font-family:{};font-size:{}px",
                self.style.font_family(),
                self.style.font_size()
            ),
        );
        div.append(SvgText::new(content));

        let object = svg_element::ForeignObject::new()
            .set("x", -size.width() / 2.0)
            .set("y", -size.height() / 2.0)
            .set("width", size.width())
            .set("height", size.height())
            .add(div);

        Composed::new(object, size)
    }
}

impl LabelComposer for TextLabelComposer {
    fn compose(&self, label: &Label) -> Result<Composed, ComposeError> {
        match label {
            Label::Text(content) => {
                let text = Text::new(&self.style, content);
                Ok(Composed::new(text.render(), text.calculate_size()))
            }
            Label::Html { html } => Ok(self.compose_html(html)),
        }
    }
}

/// Default sub-element composer: a left-aligned column of labels.
///
/// The column starts at `x = 0` and is vertically centered on the origin,
/// with `gap` units between items.
#[derive(Debug, Clone, Default)]
pub struct ListSubnodeComposer {
    items: TextLabelComposer,
    gap: f32,
}

impl ListSubnodeComposer {
    pub fn new(style: TextStyle, gap: f32) -> Self {
        Self {
            items: TextLabelComposer::new(style),
            gap,
        }
    }
}

impl SubnodeComposer for ListSubnodeComposer {
    fn compose(&self, subnodes: &[Label]) -> Result<Composed, ComposeError> {
        let items = subnodes
            .iter()
            .map(|label| self.items.compose(label))
            .collect::<Result<Vec<_>, _>>()?;

        let gaps = self.gap * items.len().saturating_sub(1) as f32;
        let size = items
            .iter()
            .fold(Size::default(), |acc, item| acc.merge_vertical(item.size()))
            .with_height(items.iter().map(|item| item.size().height()).sum::<f32>() + gaps);

        let mut group = svg_element::Group::new();
        let mut top = -size.height() / 2.0;
        for item in items {
            let item_size = item.size();
            let center = Point::new(item_size.width() / 2.0, top + item_size.height() / 2.0);
            group = group.add(
                svg_element::Group::new()
                    .set("class", "subnode")
                    .set("transform", center.to_translate())
                    .add(item.into_element()),
            );
            top += item_size.height() + self.gap;
        }

        Ok(Composed::new(group, size))
    }
}
