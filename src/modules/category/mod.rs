pub mod domain;

pub use domain::{Category, CategoryGateway, CategoryId};
