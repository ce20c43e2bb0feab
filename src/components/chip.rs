//! Chip Component
//!
//! A single fund in a grid. Click stages it for "Add", double-click moves it
//! between the unselected and selected columns.

use leptos::prelude::*;

use crate::models::Fund;
use crate::store::{use_app_store, store_toggle_clicked, store_toggle_selected, AppStateStoreFields};

#[component]
pub fn Chip(fund: Fund) -> impl IntoView {
    let store = use_app_store();
    let id = fund.id;

    let is_clicked = move || store.selection().read().is_clicked(id);

    view! {
        <div
            class=move || if is_clicked() { "chip clicked" } else { "chip" }
            on:click=move |_| store_toggle_clicked(&store, id)
            on:dblclick=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                store_toggle_selected(&store, id);
            }
        >
            {fund.name}
        </div>
    }
}
