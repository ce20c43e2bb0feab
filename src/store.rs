//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Fund;
use crate::selection::Selection;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loaded funds and their toggle flags
    pub selection: Selection,
    /// Message of the last failed fetch, shown verbatim
    pub fetch_error: Option<String>,
    /// A fetch is in flight
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a `list_funds` fetch.
    ///
    /// A successful fetch rebuilds every fund's state from defaults.
    pub fn apply_fetch(&mut self, result: Result<Vec<Fund>, String>) {
        self.loading = false;
        match result {
            Ok(funds) => {
                self.selection.load(funds);
                self.fetch_error = None;
            }
            Err(msg) => self.fetch_error = Some(msg),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the clicked flag of a fund
pub fn store_toggle_clicked(store: &AppStore, fund_id: u32) {
    store.selection().write().toggle_clicked(fund_id);
}

/// Flip the selected flag of a fund
pub fn store_toggle_selected(store: &AppStore, fund_id: u32) {
    store.selection().write().toggle_selected(fund_id);
}

/// Collect the clicked funds without changing any state
pub fn store_commit_selection(store: &AppStore) -> Vec<Fund> {
    store.selection().read_untracked().commit_selection()
}
