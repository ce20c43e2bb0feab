//! Fund Repository
//!
//! Static mock record source: `count` funds with ids `0..count`.

use async_trait::async_trait;
use crate::domain::{DomainResult, Fund};
use super::traits::ReadRepository;

/// Number of funds served by the default mock
pub const DEFAULT_FUND_COUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct MockFundRepository {
    count: u32,
}

impl MockFundRepository {
    pub fn new(count: u32) -> Self {
        Self { count }
    }
}

impl Default for MockFundRepository {
    fn default() -> Self {
        Self::new(DEFAULT_FUND_COUNT)
    }
}

#[async_trait]
impl ReadRepository<Fund> for MockFundRepository {
    async fn list(&self) -> DomainResult<Vec<Fund>> {
        Ok((0..self.count)
            .map(|i| Fund::new(i, format!("Fund {}", i)))
            .collect())
    }
}
