//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod fund;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected invoke into the message the backend sent
fn error_message(err: JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::JSON::stringify(&err)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use fund::*;
