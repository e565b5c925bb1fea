//! Subtitles picker
//!
//! A controlled component: the host passes [`PickerProps`] in on every
//! render and gets [`PickerRequest`]s back. The picker never holds the
//! selection itself.
//!
//! # Data flow
//!
//! ```text
//! tracks ──► languages ───────────────────────────────┐
//!   │                                                  │
//!   ├──► selected_language ◄── selected_track_id       ├──► PickerViewModel
//!   │          │                                       │
//!   └──────────┴──► variants                           │
//!              └──► offset gate ◄── offset ────────────┘
//!
//! SubtitlesPickerMessage ──► handle() ──► Option<PickerRequest> ──► PickerHost
//! ```

mod message;
mod view_model;

pub use message::{LanguageTarget, PickerRequest, SubtitlesPickerMessage};
pub use view_model::{
    ColorSwatches, LanguageOption, PickerViewModel, SettingControl, SettingKind, VariantOption,
    Variants, NO_VARIANTS_LABEL, OFF_LABEL,
};

use crate::color::SubtitleColors;
use crate::languages::languages;
use crate::offset::{self, adjust_offset, offset_disabled, OFFSET_DISABLED_HINT};
use crate::priority;
use crate::selection::{selected_language, track_for_language, tracks_for_language};
use crate::settings::{
    adjust_delay, delay_label, size_label, step_size, SubtitleSettings, DEFAULT_DELAY_STEP_MS,
};
use crate::track::Track;

/// Inputs of one render
#[derive(Debug, Clone, Copy)]
pub struct PickerProps<'a> {
    /// Available tracks; `None` behaves like an empty list
    pub tracks: Option<&'a [Track]>,
    /// Active track id; `None` means subtitles are off
    pub selected_track_id: Option<&'a str>,
    /// Vertical offset in percent; `None` or NaN means not settable
    pub offset: Option<f64>,
    /// Size in percent; `None` disables the size control
    pub size: Option<u32>,
    /// Delay in milliseconds; `None` disables the delay control
    pub delay_ms: Option<i64>,
    /// Delay change per -/+ click
    pub delay_step_ms: i64,
    pub colors: Option<&'a SubtitleColors>,
    /// Sort English and embedded tracks first
    pub prioritize: bool,
}

impl Default for PickerProps<'_> {
    fn default() -> Self {
        Self {
            tracks: None,
            selected_track_id: None,
            offset: None,
            size: None,
            delay_ms: None,
            delay_step_ms: DEFAULT_DELAY_STEP_MS,
            colors: None,
            prioritize: false,
        }
    }
}

impl<'a> PickerProps<'a> {
    /// Props with a track list and selection only
    pub fn new(tracks: Option<&'a [Track]>, selected_track_id: Option<&'a str>) -> Self {
        Self {
            tracks,
            selected_track_id,
            ..Self::default()
        }
    }

    /// Fill size, delay, offset and colors from persisted settings
    pub fn with_settings(mut self, settings: &'a SubtitleSettings) -> Self {
        self.size = Some(settings.size);
        self.delay_ms = Some(settings.delay_ms);
        self.offset = settings.offset;
        self.colors = Some(&settings.colors);
        self
    }
}

/// Host-side callbacks
///
/// Size and delay are optional for hosts that do not expose them.
pub trait PickerHost {
    /// A track was chosen, or `None` for "off"
    fn on_track_selected(&mut self, track_id: Option<String>);

    /// A new vertical offset was computed
    fn on_offset_changed(&mut self, offset: f64);

    /// A new size was chosen
    fn on_size_changed(&mut self, _size: u32) {}

    /// A new delay was computed
    fn on_delay_changed(&mut self, _delay_ms: i64) {}
}

/// Derived state of the picker for one set of props
#[derive(Debug, Clone)]
pub struct SubtitlesPicker<'a> {
    props: PickerProps<'a>,
    languages: Vec<&'a str>,
    selected_language: Option<&'a str>,
    variants: Vec<&'a Track>,
    offset_disabled: bool,
}

impl<'a> SubtitlesPicker<'a> {
    /// Derive everything from `props`
    pub fn new(props: PickerProps<'a>) -> Self {
        let mut languages = languages(props.tracks);
        let selected_language = selected_language(props.tracks, props.selected_track_id);
        let mut variants = tracks_for_language(props.tracks, selected_language);
        let offset_disabled = offset_disabled(selected_language, props.offset);

        if props.prioritize {
            priority::sort_languages(&mut languages);
            priority::sort_variants(&mut variants);
        }

        Self {
            props,
            languages,
            selected_language,
            variants,
            offset_disabled,
        }
    }

    pub fn props(&self) -> &PickerProps<'a> {
        &self.props
    }

    /// Distinct languages, in list order (or priority order if requested)
    pub fn languages(&self) -> &[&'a str] {
        &self.languages
    }

    /// Language of the selected track, `None` when subtitles are off
    pub fn selected_language(&self) -> Option<&'a str> {
        self.selected_language
    }

    /// Tracks of the selected language
    pub fn variants(&self) -> &[&'a Track] {
        &self.variants
    }

    pub fn offset_disabled(&self) -> bool {
        self.offset_disabled
    }

    pub fn size_disabled(&self) -> bool {
        self.props.size.is_none()
    }

    /// Delay is meaningless while subtitles are off
    pub fn delay_disabled(&self) -> bool {
        self.selected_language.is_none() || self.props.delay_ms.is_none()
    }

    /// Translate a view message into at most one host request
    pub fn handle(&self, message: SubtitlesPickerMessage) -> Option<PickerRequest> {
        log::trace!("SubtitlesPicker::handle {:?}", message);

        match message {
            SubtitlesPickerMessage::SelectLanguage(LanguageTarget::Off) => {
                Some(PickerRequest::TrackSelected(None))
            }
            SubtitlesPickerMessage::SelectLanguage(LanguageTarget::Language(lang)) => {
                let track_id = track_for_language(self.props.tracks, &lang).map(str::to_string);
                if track_id.is_none() {
                    log::debug!("No track for language {:?}, selecting none", lang);
                }
                Some(PickerRequest::TrackSelected(track_id))
            }
            SubtitlesPickerMessage::SelectVariant(track_id) => {
                Some(PickerRequest::TrackSelected(Some(track_id)))
            }
            SubtitlesPickerMessage::AdjustOffset(direction) => {
                adjust_offset(self.props.offset, direction).map(PickerRequest::OffsetChanged)
            }
            SubtitlesPickerMessage::StepSize(direction) => {
                step_size(self.props.size, direction).map(PickerRequest::SizeChanged)
            }
            SubtitlesPickerMessage::AdjustDelay(direction) => {
                if self.delay_disabled() {
                    return None;
                }
                adjust_delay(self.props.delay_ms, self.props.delay_step_ms, direction)
                    .map(PickerRequest::DelayChanged)
            }
        }
    }

    /// Handle a message and invoke the matching host callback
    ///
    /// Returns true if a callback was invoked.
    pub fn dispatch<H: PickerHost + ?Sized>(
        &self,
        message: SubtitlesPickerMessage,
        host: &mut H,
    ) -> bool {
        let Some(request) = self.handle(message) else {
            return false;
        };

        match request {
            PickerRequest::TrackSelected(track_id) => host.on_track_selected(track_id),
            PickerRequest::OffsetChanged(offset) => host.on_offset_changed(offset),
            PickerRequest::SizeChanged(size) => host.on_size_changed(size),
            PickerRequest::DelayChanged(delay) => host.on_delay_changed(delay),
        }
        true
    }

    /// Build the render-ready view state
    pub fn view_model(&self) -> PickerViewModel<'a> {
        let mut language_rows = Vec::with_capacity(self.languages.len() + 1);
        language_rows.push(LanguageOption {
            label: OFF_LABEL,
            selected: self.selected_language.is_none(),
            target: LanguageTarget::Off,
        });
        language_rows.extend(self.languages.iter().map(|&lang| LanguageOption {
            label: lang,
            selected: self.selected_language == Some(lang),
            target: LanguageTarget::Language(lang.to_string()),
        }));

        let variants = if self.variants.is_empty() {
            Variants::Disabled
        } else {
            Variants::List(
                self.variants
                    .iter()
                    .map(|&track| VariantOption {
                        track,
                        selected: self.props.selected_track_id == Some(track.id.as_str()),
                    })
                    .collect(),
            )
        };

        PickerViewModel {
            languages: language_rows,
            variants,
            delay: SettingControl {
                kind: SettingKind::Delay,
                label: delay_label(self.props.delay_ms),
                disabled: self.delay_disabled(),
                tooltip: None,
            },
            size: SettingControl {
                kind: SettingKind::Size,
                label: size_label(self.props.size),
                disabled: self.size_disabled(),
                tooltip: None,
            },
            offset: SettingControl {
                kind: SettingKind::Offset,
                label: offset::offset_label(self.props.offset),
                disabled: self.offset_disabled,
                tooltip: self.offset_disabled.then_some(OFFSET_DISABLED_HINT),
            },
            colors: self.props.colors.map(|colors| ColorSwatches {
                text: colors.text(),
                background: colors.background(),
                outline: colors.outline(),
            }),
        }
    }
}
