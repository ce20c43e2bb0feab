//! Fund Picker Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use tauri::Manager;
use tokio::sync::Mutex;

pub mod domain;
pub mod repository;
mod commands;

use repository::MockFundRepository;

/// Application state shared across commands
pub struct AppState {
    pub fund_repo: Mutex<MockFundRepository>,
}

impl AppState {
    pub fn new(fund_repo: MockFundRepository) -> Self {
        Self {
            fund_repo: Mutex::new(fund_repo),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            // Initialize logging
            let log_dir = app.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "Funds") {
                eprintln!("[{}] Failed to init logger: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }

            app.manage(AppState::new(MockFundRepository::default()));
            let _ = rolling_logger::info("App setup complete");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_funds,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
