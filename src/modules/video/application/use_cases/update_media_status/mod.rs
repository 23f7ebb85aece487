pub mod command;
pub mod handler;

pub use command::UpdateMediaStatusCommand;
pub use handler::UpdateMediaStatusHandler;
