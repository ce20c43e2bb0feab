//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod fund;

pub use entity::{Entity, DomainError, DomainResult};
pub use fund::Fund;
