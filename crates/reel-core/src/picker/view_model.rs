//! Render-ready description of the picker
//!
//! Everything a view layer needs to draw the three columns (languages,
//! variants, settings) without re-deriving anything.

use crate::color::Rgba;
use crate::settings::Direction;
use crate::track::Track;

use super::message::{LanguageTarget, SubtitlesPickerMessage};

/// Label of the "subtitles off" row
pub const OFF_LABEL: &str = "Off";

/// Shown in place of the variant list when no variant exists
pub const NO_VARIANTS_LABEL: &str = "Subtitles are disabled";

/// One row in the language column
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageOption<'a> {
    pub label: &'a str,
    pub selected: bool,
    pub target: LanguageTarget,
}

impl LanguageOption<'_> {
    /// Message emitted when this row is clicked
    pub fn message(&self) -> SubtitlesPickerMessage {
        SubtitlesPickerMessage::SelectLanguage(self.target.clone())
    }
}

/// One row in the variant column
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOption<'a> {
    pub track: &'a Track,
    pub selected: bool,
}

impl VariantOption<'_> {
    /// Row label (the track origin)
    pub fn label(&self) -> &str {
        &self.track.origin
    }

    /// Message emitted when this row is clicked
    pub fn message(&self) -> SubtitlesPickerMessage {
        SubtitlesPickerMessage::SelectVariant(self.track.id.clone())
    }
}

/// Content of the variant column
#[derive(Debug, Clone, PartialEq)]
pub enum Variants<'a> {
    /// Tracks of the selected language
    List(Vec<VariantOption<'a>>),
    /// No language selected; show [`NO_VARIANTS_LABEL`]
    Disabled,
}

impl Variants<'_> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Variants::Disabled)
    }
}

/// Which +/- setting a control drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Delay,
    Size,
    Offset,
}

impl SettingKind {
    /// Section header text
    pub fn title(self) -> &'static str {
        match self {
            SettingKind::Delay => "Delay",
            SettingKind::Size => "Size",
            SettingKind::Offset => "Vertical position",
        }
    }
}

/// A labelled -/+ control in the settings column
#[derive(Debug, Clone, PartialEq)]
pub struct SettingControl {
    pub kind: SettingKind,
    pub label: String,
    pub disabled: bool,
    pub tooltip: Option<&'static str>,
}

impl SettingControl {
    /// Message for a -/+ click, `None` while the control is disabled
    pub fn message(&self, direction: Direction) -> Option<SubtitlesPickerMessage> {
        if self.disabled {
            return None;
        }
        Some(match self.kind {
            SettingKind::Delay => SubtitlesPickerMessage::AdjustDelay(direction),
            SettingKind::Size => SubtitlesPickerMessage::StepSize(direction),
            SettingKind::Offset => SubtitlesPickerMessage::AdjustOffset(direction),
        })
    }
}

/// Parsed subtitle colors for preview swatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatches {
    pub text: Rgba,
    pub background: Rgba,
    pub outline: Rgba,
}

/// Full view state of the picker for one render
#[derive(Debug, Clone, PartialEq)]
pub struct PickerViewModel<'a> {
    /// "Off" first, then one row per language
    pub languages: Vec<LanguageOption<'a>>,
    pub variants: Variants<'a>,
    pub delay: SettingControl,
    pub size: SettingControl,
    pub offset: SettingControl,
    /// `None` when the host supplied no colors
    pub colors: Option<ColorSwatches>,
}
