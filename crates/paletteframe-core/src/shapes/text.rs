//! Text node.

use super::{NodeId, NodeTrait, Paint};
use crate::color::Rgb;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A font family plus style, e.g. "Inter" / "Bold".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// A single-line text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: NodeId,
    /// Position (top-left corner of text bounding box).
    pub position: Point,
    /// The text content.
    pub characters: String,
    pub font_name: FontName,
    /// Font size in points.
    pub font_size: f64,
    pub fills: Vec<Paint>,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f64 = 1.2;

    /// Average glyph advance as a multiple of the font size.
    pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

    /// Create a new black text node.
    pub fn new(characters: impl Into<String>, font_name: FontName) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Point::ZERO,
            characters: characters.into(),
            font_name,
            font_size: Self::DEFAULT_FONT_SIZE,
            fills: vec![Paint::solid(Rgb::BLACK)],
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Replace the fills with one solid color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.fills = vec![Paint::solid(color)];
        self
    }

    /// Get the text content.
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// Approximate width based on character count and font size.
    pub fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .characters
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    /// Approximate height based on font size and number of lines.
    pub fn approximate_height(&self) -> f64 {
        let line_count = self.characters.lines().count().max(1);
        line_count as f64 * self.font_size * Self::LINE_HEIGHT
    }
}

impl NodeTrait for Text {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.characters
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.approximate_height(),
        )
    }

    fn fills(&self) -> &[Paint] {
        &self.fills
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
