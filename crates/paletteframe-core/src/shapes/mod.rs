//! Scene nodes placed into the host document.

mod frame;
mod text;

pub use frame::{Frame, LayoutMode, Padding, PrimaryAxisAlign, SizingMode};
pub use text::{FontName, Text};

use crate::color::Rgb;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for nodes.
pub type NodeId = Uuid;

/// A fill or stroke paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Rgb },
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid { color }
    }
}

/// Where a stroke sits relative to the node's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Center,
    Outside,
}

/// Border stroke on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    pub weight: f64,
    pub align: StrokeAlign,
}

impl Stroke {
    pub fn new(color: Rgb, weight: f64, align: StrokeAlign) -> Self {
        Self {
            paint: Paint::solid(color),
            weight,
            align,
        }
    }

    /// How far the stroke extends past the node's edge.
    pub fn outset(&self) -> f64 {
        match self.align {
            StrokeAlign::Inside => 0.0,
            StrokeAlign::Center => self.weight / 2.0,
            StrokeAlign::Outside => self.weight,
        }
    }
}

/// Common trait for all nodes.
pub trait NodeTrait {
    /// Get the unique identifier.
    fn id(&self) -> NodeId;

    /// Get the layer name shown in the host.
    fn name(&self) -> &str;

    /// Get the bounding box in page coordinates.
    fn bounds(&self) -> Rect;

    /// Get the fills, front-most last.
    fn fills(&self) -> &[Paint];

    /// Move the node (and its descendants) by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// Enum wrapper for all node types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Node {
    Frame(Frame),
    Text(Text),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Frame(n) => n.id(),
            Node::Text(n) => n.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Frame(n) => n.name(),
            Node::Text(n) => n.name(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Node::Frame(n) => n.bounds(),
            Node::Text(n) => n.bounds(),
        }
    }

    /// Bounds including any stroke drawn outside the node's edge.
    pub fn visual_bounds(&self) -> Rect {
        match self {
            Node::Frame(n) => n.visual_bounds(),
            Node::Text(n) => n.bounds(),
        }
    }

    pub fn fills(&self) -> &[Paint] {
        match self {
            Node::Frame(n) => n.fills(),
            Node::Text(n) => n.fills(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Node::Frame(n) => n.translate(delta),
            Node::Text(n) => n.translate(delta),
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.bounds().origin()
    }

    /// Move so the top-left corner lands on `position`.
    pub fn set_position(&mut self, position: Point) {
        let delta = position - self.position();
        self.translate(delta);
    }

    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            Node::Frame(f) => Some(f),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            Node::Frame(_) => None,
        }
    }

    /// Find a node by ID, searching this node and its descendants.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Node::Frame(frame) => frame.find(id),
            Node::Text(_) => None,
        }
    }
}

impl From<Frame> for Node {
    fn from(frame: Frame) -> Self {
        Node::Frame(frame)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}
