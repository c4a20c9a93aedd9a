//! Messages from the plugin UI and their dispatch.
//!
//! The UI posts JSON such as:
//! ```json
//! { "type": "generate-frames", "csvData": "Red,FF0000\nBlue,0000FF" }
//! ```
//! Any other `type` is accepted and ignored.

use crate::builder::{self, GenerateError, GenerateReport};
use crate::config::PluginConfig;
use crate::host::Host;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A message posted by the plugin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    /// Build swatches from CSV text.
    GenerateFrames {
        #[serde(rename = "csvData")]
        csv_data: String,
    },
    /// Anything this plugin does not handle.
    #[serde(other)]
    Unknown,
}

/// Plugin errors.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Invalid message: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// The plugin bound to one host.
pub struct Plugin<H: Host> {
    host: H,
    config: PluginConfig,
}

impl<H: Host> Plugin<H> {
    /// Start the plugin and open its UI panel.
    pub fn new(mut host: H, config: PluginConfig) -> Self {
        host.show_ui(&config.ui);
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Consume the plugin, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Handle one message. Returns `Ok(None)` for ignored messages.
    pub fn on_message(
        &mut self,
        message: PluginMessage,
    ) -> Result<Option<GenerateReport>, PluginError> {
        match message {
            PluginMessage::GenerateFrames { csv_data } => {
                let report = builder::generate_frames(&mut self.host, &csv_data, &self.config)?;
                Ok(Some(report))
            }
            PluginMessage::Unknown => {
                log::debug!("Ignoring unhandled message");
                Ok(None)
            }
        }
    }

    /// Decode a JSON message and handle it.
    pub fn on_message_json(&mut self, json: &str) -> Result<Option<GenerateReport>, PluginError> {
        let message: PluginMessage = serde_json::from_str(json).map_err(|e| {
            log::warn!("Failed to parse plugin message: {}", json);
            PluginError::from(e)
        })?;
        self.on_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CanvasDocument;

    #[test]
    fn test_decode_generate_frames() {
        let message: PluginMessage =
            serde_json::from_str(r#"{"type":"generate-frames","csvData":"Red,FF0000"}"#).unwrap();
        assert_eq!(
            message,
            PluginMessage::GenerateFrames { csv_data: "Red,FF0000".to_string() }
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        let message: PluginMessage = serde_json::from_str(r#"{"type":"cancel"}"#).unwrap();
        assert_eq!(message, PluginMessage::Unknown);
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let json = serde_json::to_value(PluginMessage::GenerateFrames { csv_data: "x".into() }).unwrap();
        assert_eq!(json["type"], "generate-frames");
        assert_eq!(json["csvData"], "x");
    }

    #[test]
    fn test_new_shows_ui() {
        let plugin = Plugin::new(CanvasDocument::new(), PluginConfig::default());
        assert_eq!(plugin.host().ui(), Some(&PluginConfig::default().ui));
    }

    #[test]
    fn test_unknown_message_is_ignored() {
        let mut plugin = Plugin::new(CanvasDocument::new(), PluginConfig::default());
        let result = plugin.on_message_json(r#"{"type":"resize","width":10}"#).unwrap();
        assert!(result.is_none());
        assert!(plugin.host().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let mut plugin = Plugin::new(CanvasDocument::new(), PluginConfig::default());
        let err = plugin.on_message_json("{not json").unwrap_err();
        assert!(matches!(err, PluginError::Decode(_)));
    }
}
