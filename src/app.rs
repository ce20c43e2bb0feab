//! Fund Picker Frontend App
//!
//! Root component: provides the store and loads funds on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::FundsPanel;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Load funds on mount
    Effect::new(move |_| {
        store.loading().set(true);
        spawn_local(async move {
            let result = commands::list_funds().await;
            match &result {
                Ok(funds) => web_sys::console::log_1(&format!("[APP] Loaded {} funds", funds.len()).into()),
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load funds: {}", e).into()),
            }
            store.update(|state| state.apply_fetch(result));
        });
    });

    view! {
        <main class="app-layout">
            <FundsPanel />
            <p class="fund-count">
                {move || if store.loading().get() {
                    "Loading...".to_string()
                } else {
                    format!("{} funds", store.selection().read().funds().len())
                }}
            </p>
        </main>
    }
}
