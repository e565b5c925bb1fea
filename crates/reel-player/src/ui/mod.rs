//! User interface for reel-player

pub mod app;
pub mod message;

pub use app::ReelApp;
pub use message::Message;
