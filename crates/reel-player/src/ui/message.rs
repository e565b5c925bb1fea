//! Application messages for reel-player

use reel_widgets::subtitles_picker::SubtitlesPickerMessage;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Subtitles picker interaction
    Picker(SubtitlesPickerMessage),
    /// Toggle English / embedded-first ordering
    TogglePrioritize(bool),
    /// Settings save complete
    SaveSettingsComplete(Result<(), String>),
}
