pub mod gateway;
pub mod genre;
pub mod genre_id;

pub use gateway::GenreGateway;
pub use genre::Genre;
pub use genre_id::GenreId;
