//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Read-only repository over a record source
///
/// Generic over any Entity type.
/// All operations are async to support remote backends.
#[async_trait]
pub trait ReadRepository<T: Entity>: Send + Sync {
    /// List all entities in source order
    async fn list(&self) -> DomainResult<Vec<T>>;
}
