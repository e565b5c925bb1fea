//! Core logic for the reel subtitle picker
//!
//! Pure derivations that turn a flat subtitle track list and the currently
//! selected track id into grouped-by-language view state, plus the
//! arithmetic behind the delay, size and vertical offset controls.
//!
//! Nothing here owns state or performs I/O. The host passes
//! [`PickerProps`] in and receives [`PickerRequest`]s back:
//!
//! ```ignore
//! let picker = SubtitlesPicker::new(PickerProps::new(Some(&tracks), selected.as_deref()));
//! if let Some(request) = picker.handle(message) {
//!     // persist the new selection / offset, then render again
//! }
//! ```
//!
//! ## Modules
//!
//! - `languages`: order-preserving language aggregation
//! - [`selection`]: selected language, variants, language-row representative
//! - [`offset`]: offset gate and unclamped adjustment
//! - [`settings`]: size table, delay steps, persisted [`SubtitleSettings`]
//! - [`priority`]: optional English / embedded-first ordering
//! - [`picker`]: the controlled component tying it all together

pub mod color;
pub mod error;
pub mod languages;
pub mod offset;
pub mod picker;
pub mod priority;
pub mod selection;
pub mod settings;
pub mod track;

pub use color::{Rgba, SubtitleColors};
pub use error::{ColorError, ColorResult};
pub use languages::languages;
pub use offset::{adjust_offset, offset_disabled, offset_label, OFFSET_DISABLED_HINT};
pub use picker::{
    ColorSwatches, LanguageOption, LanguageTarget, PickerHost, PickerProps, PickerRequest,
    PickerViewModel, SettingControl, SettingKind, SubtitlesPicker, SubtitlesPickerMessage,
    VariantOption, Variants, NO_VARIANTS_LABEL, OFF_LABEL,
};
pub use selection::{selected_language, track_for_language, tracks_for_language};
pub use settings::{Direction, SubtitleSettings, DEFAULT_DELAY_STEP_MS, DEFAULT_SIZE, SUBTITLES_SIZES};
pub use track::Track;
