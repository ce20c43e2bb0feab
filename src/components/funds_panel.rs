//! Funds Panel Component
//!
//! Unselected and selected columns side by side, with the Add button below.
//! A failed fetch replaces the whole panel with its error message.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use super::{AddButton, ErrorBanner, FundList};

#[component]
pub fn FundsPanel() -> impl IntoView {
    let store = use_app_store();

    let unselected = Memo::new(move |_| store.selection().read().unselected_view());
    let selected = Memo::new(move |_| store.selection().read().selected_view());

    move || match store.fetch_error().get() {
        Some(message) => view! { <ErrorBanner message=message /> }.into_any(),
        None => view! {
            <div class="funds-panel">
                <div class="funds-columns">
                    <div class="funds-column">
                        <h1>"Unselected Funds"</h1>
                        <FundList funds=unselected />
                    </div>
                    <div class="funds-column">
                        <h1>"Selected Funds"</h1>
                        <FundList funds=selected />
                    </div>
                </div>
                <AddButton />
            </div>
        }.into_any(),
    }
}
