//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod fund_cmd;

pub use fund_cmd::*;
