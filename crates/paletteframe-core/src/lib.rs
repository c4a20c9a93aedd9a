//! PaletteFrame Core Library
//!
//! Platform-agnostic logic for turning `name,hexcolor` CSV text into color
//! swatch frames inside a design document.

pub mod builder;
pub mod camera;
pub mod color;
pub mod config;
pub mod document;
pub mod host;
pub mod layout;
pub mod message;
pub mod rows;
pub mod shapes;

pub use builder::{FrameBuilder, GenerateError, GenerateReport, RowIssue, SwatchError, generate_frames};
pub use camera::Camera;
pub use color::{ColorError, Rgb, hex_to_rgb, is_dark};
pub use config::{PluginConfig, UiOptions};
pub use document::CanvasDocument;
pub use host::{Host, HostError, HostResult, parse_node_id};
pub use message::{Plugin, PluginError, PluginMessage};
pub use rows::{ColorRow, RowOutcome, parse_rows};
pub use shapes::{FontName, Frame, Node, NodeId, NodeTrait, Text};
