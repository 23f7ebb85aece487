// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod domain; // Shared domain concepts (identifiers, events)
pub mod errors; // Shared error types
pub mod validation; // Validation handlers and notifications
