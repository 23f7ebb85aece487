use chrono::{DateTime, Utc};

/// Base trait for all domain events.
///
/// Aggregates buffer events in an internal list while a workflow mutates
/// them; the owning use case drains the buffer after persistence and hands
/// the events to an `EventPublisher`. The buffer is a simple mailbox, not a
/// pub/sub bus, and needs no synchronization because an aggregate instance
/// is owned by exactly one workflow invocation.
pub trait DomainEvent: std::fmt::Debug + Send + Sync {
    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;
}
