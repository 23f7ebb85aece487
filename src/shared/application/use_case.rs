use crate::shared::errors::DomainResult;
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
///
/// Every workflow in the application layer implements this so callers can
/// hold handlers behind one uniform interface.
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> DomainResult<TResult>;
}
