//! Fund List Component
//!
//! Three-column grid of chips for one derived view.

use leptos::prelude::*;

use crate::models::Fund;
use super::Chip;

#[component]
pub fn FundList(funds: Memo<Vec<Fund>>) -> impl IntoView {
    view! {
        <div class="fund-grid">
            <For
                each=move || funds.get()
                key=|fund| fund.id
                children=move |fund| view! { <Chip fund=fund /> }
            />
        </div>
    }
}
