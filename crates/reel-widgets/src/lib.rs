//! Shared UI widgets for the reel video player
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: derived by `reel-core` from host-owned props, never stored here
//! - **View functions**: take the derived view model + a message callback,
//!   return `Element<Message>`
//!
//! ## Widgets
//!
//! - `subtitles_picker`: language / variant / settings panel

pub mod button_styles;
pub mod subtitles_picker;
pub mod theme;

pub use subtitles_picker::subtitles_picker;
