//! Subtitles Picker Widget
//!
//! Three-column panel for choosing subtitles in the player:
//! - Language list with an "Off" row
//! - Variants (tracks) of the selected language
//! - Delay, size and vertical position steppers plus color swatches
//!
//! The widget is controlled: it renders a [`PickerViewModel`] derived from
//! host-owned props and emits [`SubtitlesPickerMessage`]s. The host feeds
//! those to [`SubtitlesPicker::handle`] or [`SubtitlesPicker::dispatch`] and
//! applies the resulting request to its own state.
//!
//! ```ignore
//! let props = PickerProps::new(Some(&self.tracks), self.selected.as_deref())
//!     .with_settings(&self.settings);
//! subtitles_picker(SubtitlesPicker::new(props).view_model(), Message::Picker)
//! ```

mod view;

pub use reel_core::{
    PickerProps, PickerViewModel, SubtitlesPicker, SubtitlesPickerMessage,
};
pub use view::subtitles_picker;
