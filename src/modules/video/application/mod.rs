pub mod ports;
pub mod reference_validator;
pub mod use_cases;

pub use ports::EventPublisher;
pub use reference_validator::ReferenceValidator;
