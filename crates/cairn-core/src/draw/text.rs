//! Text measurement and rendering for node labels.
//!
//! Label sizes feed directly into node geometry, so text is measured with
//! real font metrics through `cosmic-text`. A single [`FontSystem`] is
//! created lazily and shared by every measurement.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use serde::Deserialize;
use svg::node::{Text as SvgText, element as svg_element};

use crate::geometry::Size;

/// Font settings shared by every label in a render pass.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `14` |
/// | Line height | `1.15` × the font size in pixels |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    font_family: String,
    font_size: u16,
    line_height: f32,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the line height as a multiple of the font size.
    pub fn with_line_height(mut self, factor: f32) -> Self {
        self.line_height = factor;
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    // Points to pixels at standard DPI
    fn font_size_px(&self) -> f32 {
        self.font_size as f32 * 1.33
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 14,
            line_height: 1.15,
        }
    }
}

/// A run of text to measure and draw, one SVG `tspan` per line.
///
/// ```
/// # use cairn_core::draw::{Text, TextStyle};
/// let style = TextStyle::new();
/// let text = Text::new(&style, "Build\nDeploy");
///
/// let size = text.calculate_size();
/// assert!(size.width() > 0.0);
/// assert!(size.height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    style: &'a TextStyle,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(style: &'a TextStyle, content: &'a str) -> Self {
        Self { style, content }
    }

    /// Measures the text with the shared font system.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.style)
    }

    /// Draws the text centered on the local origin.
    pub fn render(&self) -> svg_element::Text {
        let lines: Vec<&str> = self.content.lines().collect();
        let size = self.calculate_size();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            size.height() / lines.len() as f32
        };

        let y_offset = -(size.height() + line_height) / 2.0;
        let mut text = svg_element::Text::new("")
            .set("x", 0)
            .set("y", y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.style.font_family())
            .set("font-size", self.style.font_size());

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", 0)
                .set("dy", line_height)
                .add(SvgText::new(line));
            text = text.add(tspan);
        }

        text
    }
}

/// Reduces HTML markup to the text it displays.
///
/// Line-break tags become newlines and other tags are dropped. Named and
/// numeric character references are then decoded.
///
/// ```
/// # use cairn_core::draw::text::plain_text;
/// assert_eq!(plain_text("<b>Build</b><br/>step &amp; deploy"), "Build\nstep & deploy");
/// ```
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let tag = rest[start + 1..start + end]
            .trim_start_matches('/')
            .trim_end_matches('/')
            .trim();
        if tag.eq_ignore_ascii_case("br") {
            out.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);

    htmlize::unescape(out).into_owned()
}

/// Owns the font system used for measurement.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculates the rendered size of `text` from shaped layout runs.
    fn calculate_text_size(&self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = style.font_size_px();
        let metrics = Metrics::new(font_size_px, font_size_px * style.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);
        let attrs = Attrs::new().family(Family::Name(style.font_family()));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut runs = 0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            runs += 1;
        }

        // No usable font: estimate from character counts
        if max_width <= 0.0 {
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * (font_size_px * 0.55);
        }
        if runs == 0 {
            total_height = metrics.line_height * text.lines().count().max(1) as f32;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_style_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.font_family(), "sans-serif");
        assert_eq!(style.font_size(), 14);
        assert_approx_eq!(f32, style.line_height(), 1.15);
    }

    #[test]
    fn test_empty_text_has_no_size() {
        let style = TextStyle::new();
        assert!(Text::new(&style, "").calculate_size().is_zero());
    }

    #[test]
    fn test_lines_grow_height() {
        let style = TextStyle::new();
        let one = Text::new(&style, "alpha").calculate_size();
        let two = Text::new(&style, "alpha\nbeta").calculate_size();
        assert!(two.height() > one.height());
    }

    #[test]
    fn test_longer_text_is_wider() {
        let style = TextStyle::new();
        let short = Text::new(&style, "ab").calculate_size();
        let long = Text::new(&style, "abcdefghij").calculate_size();
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_render_one_tspan_per_line() {
        let style = TextStyle::new().with_font_size(10);
        let markup = Text::new(&style, "a\nb\nc").render().to_string();
        assert_eq!(markup.matches("<tspan").count(), 3);
        assert!(markup.contains("font-size=\"10\""));
        assert!(markup.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("plain"), "plain");
        assert_eq!(plain_text("<i>a</i><BR>b"), "a\nb");
        assert_eq!(plain_text("x &lt; y"), "x < y");
        assert_eq!(plain_text("it&#39;s"), "it's");
        assert_eq!(plain_text("a&nbsp;b &#x41;"), "a\u{a0}b A");
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
        assert_eq!(plain_text("dangling <b"), "dangling <b");
    }
}
