//! Messages into the subtitles picker and requests out of it

use crate::settings::Direction;

/// Target of a click in the language column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageTarget {
    /// The explicit "Off" row
    Off,
    /// A language row, by label
    Language(String),
}

/// User interactions emitted by the picker view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitlesPickerMessage {
    /// A language row (or "Off") was clicked
    SelectLanguage(LanguageTarget),

    /// A variant row was clicked, by track id
    SelectVariant(String),

    /// Vertical position -/+ was clicked
    AdjustOffset(Direction),

    /// Size -/+ was clicked
    StepSize(Direction),

    /// Delay -/+ was clicked
    AdjustDelay(Direction),
}

/// What the picker asks its host to do
///
/// Each variant stands for one host callback. A message produces at most
/// one request.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerRequest {
    /// Make this track active, or turn subtitles off with `None`
    TrackSelected(Option<String>),

    /// Store this vertical offset
    OffsetChanged(f64),

    /// Store this size
    SizeChanged(u32),

    /// Store this delay in milliseconds
    DelayChanged(i64),
}
