pub mod command;
pub mod handler;
pub mod result;

pub use command::CreateVideoCommand;
pub use handler::CreateVideoHandler;
pub use result::CreateVideoResult;
