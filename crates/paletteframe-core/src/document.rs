//! In-memory document implementing [`Host`].

use crate::camera::{Camera, FIT_PADDING};
use crate::config::UiOptions;
use crate::host::{Host, HostError, HostResult};
use crate::shapes::{FontName, Node, NodeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Horizontal gap between top-level nodes appended to a non-empty page.
pub const PLACEMENT_GAP: f64 = 100.0;

/// A single-page document with a viewport, a font book and a notification log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Top-level nodes on the page, in insertion order.
    nodes: Vec<Node>,
    pub camera: Camera,
    /// Fonts installed on this "machine".
    #[serde(default)]
    available_fonts: HashSet<FontName>,
    /// Fonts that have been loaded for use.
    #[serde(default)]
    loaded_fonts: HashSet<FontName>,
    /// Messages shown to the user, oldest first.
    #[serde(default)]
    notifications: Vec<String>,
    /// UI panel options, once shown.
    #[serde(default)]
    ui: Option<UiOptions>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document with no fonts installed.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            nodes: Vec::new(),
            camera: Camera::default(),
            available_fonts: HashSet::new(),
            loaded_fonts: HashSet::new(),
            notifications: Vec::new(),
            ui: None,
        }
    }

    /// Install fonts so [`Host::load_font`] succeeds for them.
    pub fn with_fonts(mut self, fonts: impl IntoIterator<Item = FontName>) -> Self {
        self.available_fonts.extend(fonts);
        self
    }

    pub fn install_font(&mut self, font: FontName) {
        self.available_fonts.insert(font);
    }

    pub fn is_font_loaded(&self, font: &FontName) -> bool {
        self.loaded_fonts.contains(font)
    }

    /// Top-level nodes in page order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Find a node anywhere on the page.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn ui(&self) -> Option<&UiOptions> {
        self.ui.as_ref()
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get the bounding box of all top-level nodes, strokes included.
    pub fn bounds(&self) -> Option<Rect> {
        union_bounds(self.nodes.iter())
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn union_bounds<'a>(nodes: impl Iterator<Item = &'a Node>) -> Option<Rect> {
    nodes
        .map(Node::visual_bounds)
        .reduce(|acc, bounds| acc.union(bounds))
}

impl Host for CanvasDocument {
    fn load_font(&mut self, font: &FontName) -> HostResult<()> {
        if !self.available_fonts.contains(font) {
            return Err(HostError::FontUnavailable(font.clone()));
        }
        self.loaded_fonts.insert(font.clone());
        Ok(())
    }

    fn append_to_page(&mut self, mut node: Node) -> HostResult<NodeId> {
        if let Some(existing) = self.bounds() {
            node.set_position(Point::new(existing.x1 + PLACEMENT_GAP, existing.y0));
        }
        let id = node.id();
        log::debug!("Appending {:?} ({}) to page", node.name(), id);
        self.nodes.push(node);
        Ok(id)
    }

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) {
        let targets = ids.iter().filter_map(|&id| self.find(id));
        match union_bounds(targets) {
            Some(bounds) => self.camera.fit_to_bounds(bounds, FIT_PADDING),
            None => log::warn!("Nothing to scroll into view"),
        }
    }

    fn notify(&mut self, message: &str) {
        log::info!("Notify: {}", message);
        self.notifications.push(message.to_string());
    }

    fn show_ui(&mut self, options: &UiOptions) {
        self.ui = Some(*options);
    }
}
