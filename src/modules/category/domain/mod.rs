pub mod category;
pub mod category_id;
pub mod gateway;

pub use category::Category;
pub use category_id::CategoryId;
pub use gateway::CategoryGateway;
