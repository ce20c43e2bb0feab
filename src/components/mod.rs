//! UI Components
//!
//! Reusable Leptos components.

mod chip;
mod fund_list;
mod funds_panel;
mod add_button;
mod error_banner;

pub use chip::Chip;
pub use fund_list::FundList;
pub use funds_panel::FundsPanel;
pub use add_button::AddButton;
pub use error_banner::ErrorBanner;
