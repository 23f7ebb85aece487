pub mod events;
pub mod identifier;

pub use events::DomainEvent;
pub use identifier::Identifier;
