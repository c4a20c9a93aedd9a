//! WebAssembly entry point bridging a JS host object to [`Host`].
//!
//! The JS side passes an object with these methods:
//! - `loadFont(family, style) -> bool`
//! - `appendToPage(nodeJson) -> string` (the new node's UUID; throw to reject)
//! - `scrollAndZoomIntoView(idsJson)`
//! - `notify(message)`
//! - `showUi(width, height)`

use js_sys::{Function, Reflect};
use paletteframe_core::{
    FontName, Host, HostError, HostResult, Node, NodeId, Plugin, PluginConfig, UiOptions,
    parse_node_id,
};
use wasm_bindgen::prelude::*;

/// [`Host`] backed by a JS object.
pub struct JsHost {
    target: JsValue,
}

impl JsHost {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn method(&self, name: &str) -> Result<Function, JsValue> {
        Reflect::get(&self.target, &JsValue::from_str(name))?
            .dyn_into::<Function>()
            .map_err(|_| JsValue::from_str(&format!("host.{name} is not a function")))
    }

    fn call(&self, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let function = self.method(name)?;
        let args: js_sys::Array = args.iter().collect();
        function.apply(&self.target, &args)
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl Host for JsHost {
    fn load_font(&mut self, font: &FontName) -> HostResult<()> {
        let loaded = self
            .call(
                "loadFont",
                &[JsValue::from_str(&font.family), JsValue::from_str(&font.style)],
            )
            .map_err(|e| HostError::Other(describe(&e)))?;
        if loaded.as_bool().unwrap_or(false) {
            Ok(())
        } else {
            Err(HostError::FontUnavailable(font.clone()))
        }
    }

    fn append_to_page(&mut self, node: Node) -> HostResult<NodeId> {
        let json = serde_json::to_string(&node)
            .map_err(|e| HostError::Other(format!("Failed to serialize node {}: {e}", node.id())))?;
        let returned = self
            .call("appendToPage", &[JsValue::from_str(&json)])
            .map_err(|e| HostError::Other(describe(&e)))?;
        match returned.as_string() {
            Some(id) => parse_node_id(&id),
            None => Err(HostError::Other(format!(
                "host.appendToPage returned {} instead of an ID",
                describe(&returned)
            ))),
        }
    }

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) {
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let json = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());
        if let Err(e) = self.call("scrollAndZoomIntoView", &[JsValue::from_str(&json)]) {
            log::error!("host.scrollAndZoomIntoView failed: {}", describe(&e));
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.call("notify", &[JsValue::from_str(message)]) {
            log::error!("host.notify failed: {}", describe(&e));
        }
    }

    fn show_ui(&mut self, options: &UiOptions) {
        let args = [JsValue::from(options.width), JsValue::from(options.height)];
        if let Err(e) = self.call("showUi", &args) {
            log::error!("host.showUi failed: {}", describe(&e));
        }
    }
}

/// The plugin as seen from JS.
#[wasm_bindgen]
pub struct PalettePlugin {
    inner: Plugin<JsHost>,
}

#[wasm_bindgen]
impl PalettePlugin {
    /// Create the plugin around a host object. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, config_json: Option<String>) -> Result<PalettePlugin, JsValue> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => PluginConfig::from_json(json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
            _ => PluginConfig::default(),
        };
        Ok(Self {
            inner: Plugin::new(JsHost::new(host), config),
        })
    }

    /// Handle a JSON message posted by the UI.
    #[wasm_bindgen(js_name = onMessage)]
    pub fn on_message(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner
            .on_message_json(json)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Set up panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {e}")));
    }

    log::info!("PaletteFrame loaded (WASM)");
}
