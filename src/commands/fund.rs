//! Fund Commands
//!
//! Frontend bindings for fund-related backend commands.

use wasm_bindgen::prelude::*;
use crate::models::Fund;
use super::{invoke, error_message};

// ========================
// Commands
// ========================

/// Fetch the fund list. Errors carry the backend's message unchanged.
pub async fn list_funds() -> Result<Vec<Fund>, String> {
    let result = invoke("list_funds", JsValue::NULL).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
