//! The capability object through which the plugin touches the host document.

use crate::config::UiOptions;
use crate::shapes::{FontName, Node, NodeId};
use thiserror::Error;

/// Host errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Font unavailable: {0}")]
    FontUnavailable(FontName),
    #[error("Host error: {0}")]
    Other(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Read a node ID handed back by a host as text.
pub fn parse_node_id(raw: &str) -> HostResult<NodeId> {
    raw.trim()
        .parse()
        .map_err(|e| HostError::Other(format!("Invalid node ID {raw:?}: {e}")))
}

/// Document mutation interface supplied by the embedding runtime.
///
/// Implementations wrap a live design tool, or the in-memory
/// [`crate::document::CanvasDocument`] used for tests and headless runs.
pub trait Host {
    /// Make a font usable for text nodes.
    fn load_font(&mut self, font: &FontName) -> HostResult<()>;

    /// Insert a top-level node into the current page.
    ///
    /// Returns the ID the host assigned, which may differ from `node.id()`.
    fn append_to_page(&mut self, node: Node) -> HostResult<NodeId>;

    /// Move the viewport so the given nodes are framed.
    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]);

    /// Show a transient message to the user.
    fn notify(&mut self, message: &str);

    /// Open the plugin's UI panel.
    fn show_ui(&mut self, options: &UiOptions);
}
