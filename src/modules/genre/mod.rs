pub mod domain;

pub use domain::{Genre, GenreGateway, GenreId};
