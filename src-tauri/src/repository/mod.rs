//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod fund_repo;


pub use traits::ReadRepository;
pub use fund_repo::{MockFundRepository, DEFAULT_FUND_COUNT};
