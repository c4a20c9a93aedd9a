//! Headless runs against the in-memory document.

use paletteframe_core::{CanvasDocument, Plugin, PluginConfig, PluginError, PluginMessage};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Headless run errors.
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Invalid config {0}: {1}")]
    Config(PathBuf, #[source] serde_json::Error),
    #[error(transparent)]
    Plugin(#[from] PluginError),
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// How the input file should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Raw `name,hexcolor` lines.
    Csv,
    /// A JSON plugin message.
    Message,
}

/// Load a JSON config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PluginConfig, HeadlessError> {
    let Some(path) = path else {
        return Ok(PluginConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|e| HeadlessError::Read(path.to_path_buf(), e))?;
    PluginConfig::from_json(&json).map_err(|e| HeadlessError::Config(path.to_path_buf(), e))
}

/// A document that has every font named in `config` installed.
pub fn document_for(config: &PluginConfig) -> CanvasDocument {
    CanvasDocument::new().with_fonts([config.font.clone()])
}

/// Run one input through the plugin and return the resulting document.
pub fn run(
    input: &str,
    kind: InputKind,
    config: PluginConfig,
    document: CanvasDocument,
) -> Result<CanvasDocument, HeadlessError> {
    let mut plugin = Plugin::new(document, config);
    let report = match kind {
        InputKind::Csv => plugin.on_message(PluginMessage::GenerateFrames {
            csv_data: input.to_string(),
        })?,
        InputKind::Message => plugin.on_message_json(input)?,
    };

    match report {
        Some(report) => log::info!(
            "Container {} holds {} swatches",
            report.container,
            report.swatches.len()
        ),
        None => log::info!("Message ignored"),
    }
    Ok(plugin.into_host())
}

/// Read `path`, run it, and render the document as pretty JSON.
pub fn run_file(path: &Path, kind: InputKind, config: PluginConfig) -> Result<String, HeadlessError> {
    let input = fs::read_to_string(path).map_err(|e| HeadlessError::Read(path.to_path_buf(), e))?;
    let document = document_for(&config);
    let document = run(&input, kind, config, document)?;
    document.to_json().map_err(HeadlessError::Serialize)
}
