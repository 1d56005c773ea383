pub mod message;
pub mod panel;
pub mod event;
pub mod config;
pub mod error;


pub use error::StudioError;
pub type Result<T> = std::result::Result<T, StudioError>;
