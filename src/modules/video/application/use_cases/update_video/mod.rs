pub mod command;
pub mod handler;
pub mod result;

pub use command::UpdateVideoCommand;
pub use handler::UpdateVideoHandler;
pub use result::UpdateVideoResult;
