use async_trait::async_trait;

use super::CastMemberId;
use crate::shared::errors::DomainResult;

/// Port (interface) for the cast member store, implemented by infrastructure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    /// Return the subset of `ids` that exist in the store.
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> DomainResult<Vec<CastMemberId>>;
}
