use async_trait::async_trait;

use super::CategoryId;
use crate::shared::errors::DomainResult;

/// Port (interface) for the category store, implemented by infrastructure.
///
/// Only the capability the video workflows need is specified here: resolving
/// which of a set of referenced ids actually exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Return the subset of `ids` that exist in the store.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategoryId>>;
}
