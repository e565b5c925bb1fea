//! Main iced application for reel-player
//!
//! The app owns everything the picker displays: the track list, the
//! selected track id and the subtitle settings. The picker only recommends
//! changes; they take effect here, through [`PickerHost`].

use std::path::PathBuf;

use iced::widget::{column, container, row, text, toggler, Space};
use iced::{Alignment, Element, Length, Task, Theme};

use reel_core::{PickerHost, PickerProps, SubtitlesPicker, Track};
use reel_widgets::subtitles_picker;

use crate::config::{self, PlayerConfig};
use super::message::Message;

/// Application state
pub struct ReelApp {
    /// Loaded configuration (subtitle settings live here)
    config: PlayerConfig,
    /// Where settings are saved
    config_path: PathBuf,
    /// Subtitle tracks of the current video (`None` when the backend reports none)
    tracks: Option<Vec<Track>>,
    /// Active subtitle track, `None` = off
    selected_track_id: Option<String>,
    /// Set by the host callbacks when settings need saving
    settings_dirty: bool,
    /// Status line
    status: String,
}

/// Build picker props from app-owned state
fn picker_props<'a>(
    tracks: Option<&'a [Track]>,
    selected_track_id: Option<&'a str>,
    config: &'a PlayerConfig,
) -> PickerProps<'a> {
    PickerProps {
        delay_step_ms: config.picker.delay_step_ms,
        prioritize: config.picker.prioritize,
        ..PickerProps::new(tracks, selected_track_id).with_settings(&config.subtitles)
    }
}

impl ReelApp {
    /// Create a new application instance
    pub fn new(config: PlayerConfig, config_path: PathBuf, tracks: Option<Vec<Track>>) -> Self {
        let status = match &tracks {
            Some(tracks) => format!("{} subtitle tracks", tracks.len()),
            None => "No subtitle tracks".to_string(),
        };
        Self {
            config,
            config_path,
            tracks,
            selected_track_id: None,
            settings_dirty: false,
            status,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(picker_msg) => {
                // Snapshot the props so the picker does not borrow self while
                // the callbacks mutate it
                let tracks = self.tracks.clone();
                let selected = self.selected_track_id.clone();
                let config = self.config.clone();
                let picker =
                    SubtitlesPicker::new(picker_props(tracks.as_deref(), selected.as_deref(), &config));

                if !picker.dispatch(picker_msg, self) {
                    log::debug!("Picker message produced no request");
                }
                self.take_save_task()
            }
            Message::TogglePrioritize(enabled) => {
                self.config.picker.prioritize = enabled;
                self.settings_dirty = true;
                self.take_save_task()
            }
            Message::SaveSettingsComplete(result) => {
                match result {
                    Ok(()) => log::debug!("Settings saved"),
                    Err(e) => {
                        log::error!("Failed to save settings: {}", e);
                        self.status = format!("Failed to save settings: {}", e);
                    }
                }
                Task::none()
            }
        }
    }

    /// Save settings in the background if a callback changed them
    fn take_save_task(&mut self) -> Task<Message> {
        if !std::mem::take(&mut self.settings_dirty) {
            return Task::none();
        }

        let config_clone = self.config.clone();
        let config_path = self.config_path.clone();
        Task::perform(
            async move {
                config::save_config(&config_clone, &config_path).map_err(|e| e.to_string())
            },
            Message::SaveSettingsComplete,
        )
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let picker = SubtitlesPicker::new(picker_props(
            self.tracks.as_deref(),
            self.selected_track_id.as_deref(),
            &self.config,
        ));

        let header = row![
            text("reel").size(18),
            Space::new().width(Length::Fill),
            text("English / embedded first").size(12),
            toggler(self.config.picker.prioritize).on_toggle(Message::TogglePrioritize),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let body = subtitles_picker(picker.view_model(), Message::Picker);

        container(column![header, body, text(&self.status).size(12)].spacing(12))
            .padding(16)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
impl ReelApp {
    pub fn selected_track_id(&self) -> Option<&str> {
        self.selected_track_id.as_deref()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

impl PickerHost for ReelApp {
    fn on_track_selected(&mut self, track_id: Option<String>) {
        log::debug!("Subtitle track selected: {:?}", track_id);
        self.status = match &track_id {
            Some(id) => format!("Subtitles: {}", id),
            None => "Subtitles off".to_string(),
        };
        self.selected_track_id = track_id;
    }

    fn on_offset_changed(&mut self, offset: f64) {
        let accepted = self.config.offset_limits.apply(offset);
        if accepted != offset {
            log::debug!("Offset {} clamped to {}", offset, accepted);
        }
        self.config.subtitles.offset = Some(accepted);
        self.settings_dirty = true;
    }

    fn on_size_changed(&mut self, size: u32) {
        self.config.subtitles.size = size;
        self.settings_dirty = true;
    }

    fn on_delay_changed(&mut self, delay_ms: i64) {
        self.config.subtitles.delay_ms = delay_ms;
        self.settings_dirty = true;
    }
}
