use async_trait::async_trait;

use super::GenreId;
use crate::shared::errors::DomainResult;

/// Port (interface) for the genre store, implemented by infrastructure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreGateway: Send + Sync {
    /// Return the subset of `ids` that exist in the store.
    async fn exists_by_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>>;
}
