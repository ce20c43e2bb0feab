//! Fund Entity
//!
//! A selectable fund record. Immutable once fetched.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    /// Unique, stable identifier
    pub id: u32,
    /// Display name
    pub name: String,
}

impl Fund {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Entity for Fund {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
