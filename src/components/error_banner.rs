//! Error Banner Component

use leptos::prelude::*;

/// Shows a fetch error message as-is
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-banner">{message}</div> }
}
