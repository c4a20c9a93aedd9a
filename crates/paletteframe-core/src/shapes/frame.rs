//! Frame node with auto layout properties.

use super::{Node, NodeId, NodeTrait, Paint, Stroke};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction children are arranged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Children keep their own positions.
    #[default]
    None,
    Vertical,
    Horizontal,
}

/// Whether an axis keeps its size or hugs its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    Auto,
}

/// Distribution of children along the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Inner padding on each side of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Same padding on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A rectangular container node. With a layout mode set, its children are
/// arranged by [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub(crate) id: NodeId,
    /// Layer name.
    pub name: String,
    /// Top-left corner position.
    pub position: Point,
    /// Width and height.
    pub size: Size,
    pub layout_mode: LayoutMode,
    /// Sizing along the layout direction.
    pub primary_axis_sizing: SizingMode,
    /// Sizing across the layout direction.
    pub counter_axis_sizing: SizingMode,
    pub primary_axis_align: PrimaryAxisAlign,
    pub padding: Padding,
    /// Gap between consecutive children.
    pub item_spacing: f64,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Stroke>,
    children: Vec<Node>,
}

impl Frame {
    /// Default size of a freshly created frame.
    pub const DEFAULT_SIZE: f64 = 100.0;

    /// Create a new empty frame at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position: Point::ZERO,
            size: Size::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE),
            layout_mode: LayoutMode::default(),
            primary_axis_sizing: SizingMode::default(),
            counter_axis_sizing: SizingMode::default(),
            primary_axis_align: PrimaryAxisAlign::default(),
            padding: Padding::default(),
            item_spacing: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Append a child at the end of the child list.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get the children in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get mutable access to children.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Get the frame as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Bounds including the part of any stroke drawn outside the edge.
    pub fn visual_bounds(&self) -> Rect {
        let outset = self.strokes.iter().map(Stroke::outset).fold(0.0, f64::max);
        self.as_rect().inflate(outset, outset)
    }

    /// Find a descendant by ID (including nested frames).
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl NodeTrait for Frame {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn fills(&self) -> &[Paint] {
        &self.fills
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for child in &mut self.children {
            child.translate(delta);
        }
    }
}
