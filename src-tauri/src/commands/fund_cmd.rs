//! Tauri Commands for Funds
//!
//! Exposes the fund record source to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::Fund;
use crate::repository::ReadRepository;
use crate::AppState;

/// List funds from any repository, flattening errors to their message
pub async fn fetch_funds<R: ReadRepository<Fund>>(repo: &R) -> Result<Vec<Fund>, String> {
    match repo.list().await {
        Ok(funds) => {
            let _ = rolling_logger::info(&format!("Listed {} funds", funds.len()));
            Ok(funds)
        }
        Err(e) => {
            let _ = rolling_logger::error(&format!("Failed to list funds: {}", e));
            Err(e.to_string())
        }
    }
}

/// List all funds
#[tauri::command]
pub async fn list_funds(state: State<'_, AppState>) -> Result<Vec<Fund>, String> {
    let repo = state.fund_repo.lock().await;
    fetch_funds(&*repo).await
}
