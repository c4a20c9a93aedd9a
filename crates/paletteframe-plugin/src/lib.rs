//! PaletteFrame plugin shell
//!
//! Runs the swatch generator either headless against an in-memory document
//! or inside a WASM host through a JS bridge.

pub mod headless;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{JsHost, PalettePlugin};
