//! Add Button Component
//!
//! Reports the currently clicked funds. State is left untouched; see
//! `Selection::commit_selection`.

use leptos::prelude::*;

use crate::store::{use_app_store, store_commit_selection};

#[component]
pub fn AddButton() -> impl IntoView {
    let store = use_app_store();

    let on_click = move |_| {
        let clicked = store_commit_selection(&store);
        let names: Vec<&str> = clicked.iter().map(|f| f.name.as_str()).collect();
        web_sys::console::log_1(&format!("[ADD] {} clicked funds: {:?}", clicked.len(), names).into());
    };

    view! {
        <button class="add-btn" on:click=on_click>
            "Add"
        </button>
    }
}
