use async_trait::async_trait;

use crate::shared::domain::DomainEvent;
use crate::shared::errors::DomainResult;

/// Port (interface) for publishing domain events
/// Infrastructure layer implements this (in-memory, message queue, event store, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single domain event
    async fn publish(&self, event: Box<dyn DomainEvent>) -> DomainResult<()>;

    /// Publish multiple domain events
    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> DomainResult<()>;
}
