//! Turns CSV text into a container of color swatches on the host page.

use crate::color::{self, ColorError, Rgb};
use crate::config::PluginConfig;
use crate::host::{Host, HostError};
use crate::layout;
use crate::rows::{self, ColorRow, RowOutcome};
use crate::shapes::{
    FontName, Frame, LayoutMode, Node, NodeId, NodeTrait, Padding, Paint, PrimaryAxisAlign,
    SizingMode, Stroke, StrokeAlign, Text,
};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that abort a whole generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Error loading font: {0}")]
    FontUnavailable(FontName, #[source] HostError),
    #[error("Error adding color frames to the page")]
    Insert(#[source] HostError),
}

/// Errors that drop a single row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwatchError {
    #[error(transparent)]
    InvalidHex(#[from] ColorError),
    #[error("Font not loaded: {0}")]
    FontNotLoaded(FontName),
}

/// A row that produced no swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub reason: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    /// The container frame inserted into the page.
    pub container: NodeId,
    /// Swatch frame IDs in CSV order.
    pub swatches: Vec<NodeId>,
    /// Lines missing a name or a hex value.
    pub skipped: Vec<RowIssue>,
    /// Lines that failed while their swatch was built.
    pub failed: Vec<RowIssue>,
}

/// Builds swatch frames once the label font is loaded.
pub struct FrameBuilder<'a> {
    config: &'a PluginConfig,
    loaded_fonts: HashSet<FontName>,
}

impl<'a> FrameBuilder<'a> {
    /// Create a builder with no fonts loaded yet.
    pub fn new(config: &'a PluginConfig) -> Self {
        Self {
            config,
            loaded_fonts: HashSet::new(),
        }
    }

    /// Load the label font through the host. Must succeed before any text is built.
    pub fn load_font(&mut self, host: &mut dyn Host) -> Result<(), GenerateError> {
        let font = &self.config.font;
        host.load_font(font)
            .map_err(|e| GenerateError::FontUnavailable(font.clone(), e))?;
        self.loaded_fonts.insert(font.clone());
        Ok(())
    }

    /// Mark a font as loaded without going through a host.
    pub fn with_loaded_font(mut self, font: FontName) -> Self {
        self.loaded_fonts.insert(font);
        self
    }

    /// The empty vertical container that hugs its swatches.
    pub fn container(&self) -> Frame {
        let mut frame = Frame::new(self.config.container_name.clone());
        frame.layout_mode = LayoutMode::Vertical;
        frame.primary_axis_sizing = SizingMode::Auto;
        frame.counter_axis_sizing = SizingMode::Auto;
        frame.padding = Padding::uniform(0.0);
        frame.item_spacing = 0.0;
        frame
    }

    /// Build one swatch: a filled, stroked frame with a name label over a hex label.
    pub fn swatch(&self, row: &ColorRow) -> Result<Frame, SwatchError> {
        let config = self.config;
        let fill = color::hex_to_rgb(&row.hex)?;
        let text_color = color::label_color(fill);

        let mut frame = Frame::new(row.name.clone());
        frame.resize(config.swatch_width, config.swatch_height);
        frame.layout_mode = LayoutMode::Vertical;
        frame.primary_axis_sizing = SizingMode::Fixed;
        frame.counter_axis_sizing = SizingMode::Fixed;
        frame.primary_axis_align = PrimaryAxisAlign::SpaceBetween;
        frame.padding = Padding::uniform(config.swatch_padding);
        frame.fills = vec![Paint::solid(fill)];
        frame.strokes = vec![Stroke::new(Rgb::BLACK, config.stroke_weight, StrokeAlign::Center)];

        frame.append_child(self.label(&row.name, text_color)?.into());
        frame.append_child(self.label(&color::display_hex(&row.hex), text_color)?.into());
        Ok(frame)
    }

    fn label(&self, characters: &str, color: Rgb) -> Result<Text, SwatchError> {
        let font = &self.config.font;
        if !self.loaded_fonts.contains(font) {
            return Err(SwatchError::FontNotLoaded(font.clone()));
        }
        Ok(Text::new(characters, font.clone())
            .with_font_size(self.config.font_size)
            .with_color(color))
    }
}

/// Parse `csv`, build one swatch per valid row and commit the container to the host.
///
/// A font that cannot be loaded aborts before the page is modified, and a
/// container the host refuses to insert aborts without scrolling. Both are
/// reported to the user. Bad rows are reported in the returned
/// [`GenerateReport`] and never stop their siblings.
pub fn generate_frames(
    host: &mut dyn Host,
    csv: &str,
    config: &PluginConfig,
) -> Result<GenerateReport, GenerateError> {
    let mut builder = FrameBuilder::new(config);
    if let Err(e) = builder.load_font(host) {
        log::error!("{}", e);
        host.notify(&format!("Error loading font: {}", config.font));
        return Err(e);
    }

    let mut container = builder.container();
    let mut swatches = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();

    for outcome in rows::parse_rows(csv) {
        let row = match outcome {
            RowOutcome::Valid(row) => row,
            RowOutcome::Invalid { line, text } => {
                log::warn!("Invalid input on row {}: {:?}", line, text);
                skipped.push(RowIssue {
                    line,
                    text,
                    reason: "missing name or hex".to_string(),
                });
                continue;
            }
        };

        match builder.swatch(&row) {
            Ok(frame) => {
                swatches.push(frame.id());
                container.append_child(Node::Frame(frame));
            }
            Err(e) => {
                log::error!("Error processing row {}: {:?}: {}", row.line, row.text, e);
                host.notify(&format!("Error with row {}: \"{}\"", row.line, row.text));
                failed.push(RowIssue {
                    line: row.line,
                    text: row.text,
                    reason: e.to_string(),
                });
            }
        }
    }

    layout::apply(&mut container);
    let container = match host.append_to_page(Node::Frame(container)) {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to insert container: {}", e);
            host.notify("Error adding color frames to the page");
            return Err(GenerateError::Insert(e));
        }
    };
    host.scroll_and_zoom_into_view(&[container]);
    log::info!(
        "Generated {} swatches ({} skipped, {} failed)",
        swatches.len(),
        skipped.len(),
        failed.len()
    );

    Ok(GenerateReport {
        container,
        swatches,
        skipped,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font_ready(config: &PluginConfig) -> FrameBuilder<'_> {
        FrameBuilder::new(config).with_loaded_font(config.font.clone())
    }

    fn row(name: &str, hex: &str) -> ColorRow {
        ColorRow {
            line: 1,
            name: name.to_string(),
            hex: hex.to_string(),
            text: format!("{name},{hex}"),
        }
    }

    fn label_texts(frame: &Frame) -> Vec<&str> {
        frame
            .children()
            .iter()
            .filter_map(|c| c.as_text().map(Text::characters))
            .collect()
    }

    #[test]
    fn test_swatch_properties() {
        let config = PluginConfig::default();
        let swatch = font_ready(&config).swatch(&row("Red", "ff0000")).unwrap();

        assert_eq!(swatch.name, "Red");
        assert!((swatch.size.width - 220.0).abs() < f64::EPSILON);
        assert!((swatch.size.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(swatch.layout_mode, LayoutMode::Vertical);
        assert_eq!(swatch.primary_axis_sizing, SizingMode::Fixed);
        assert_eq!(swatch.counter_axis_sizing, SizingMode::Fixed);
        assert_eq!(swatch.primary_axis_align, PrimaryAxisAlign::SpaceBetween);
        assert_eq!(swatch.padding, Padding::uniform(15.0));
        assert_eq!(swatch.fills, vec![Paint::solid(Rgb::new(1.0, 0.0, 0.0))]);
        assert_eq!(swatch.strokes, vec![Stroke::new(Rgb::BLACK, 1.0, StrokeAlign::Center)]);
        assert_eq!(label_texts(&swatch), vec!["Red", "#FF0000"]);
    }

    #[test]
    fn test_label_contrast_follows_fill() {
        let config = PluginConfig::default();
        let builder = font_ready(&config);

        let dark = builder.swatch(&row("Navy", "000080")).unwrap();
        let light = builder.swatch(&row("Cream", "FFFDD0")).unwrap();

        for child in dark.children() {
            assert_eq!(child.fills(), [Paint::solid(Rgb::WHITE)]);
        }
        for child in light.children() {
            assert_eq!(child.fills(), [Paint::solid(Rgb::BLACK)]);
        }
    }

    #[test]
    fn test_label_font() {
        let config = PluginConfig::default();
        let swatch = font_ready(&config).swatch(&row("Teal", "#008080")).unwrap();
        for child in swatch.children() {
            let text = child.as_text().unwrap();
            assert_eq!(text.font_name, config.font);
            assert!((text.font_size - 14.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_swatch_requires_loaded_font() {
        let config = PluginConfig::default();
        let err = FrameBuilder::new(&config).swatch(&row("Red", "FF0000")).unwrap_err();
        assert_eq!(err, SwatchError::FontNotLoaded(config.font.clone()));
    }

    #[test]
    fn test_swatch_rejects_bad_hex() {
        let config = PluginConfig::default();
        let err = font_ready(&config).swatch(&row("Oops", "12345")).unwrap_err();
        assert!(matches!(err, SwatchError::InvalidHex(_)));
    }

    #[test]
    fn test_container_shape() {
        let config = PluginConfig::default();
        let container = FrameBuilder::new(&config).container();
        assert_eq!(container.name, "Color Palette Frames");
        assert_eq!(container.layout_mode, LayoutMode::Vertical);
        assert_eq!(container.primary_axis_sizing, SizingMode::Auto);
        assert_eq!(container.counter_axis_sizing, SizingMode::Auto);
        assert_eq!(container.padding, Padding::uniform(0.0));
        assert!(container.item_spacing.abs() < f64::EPSILON);
    }
}
