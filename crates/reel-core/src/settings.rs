//! Subtitle display settings: size steps, delay steps and the persisted
//! settings record.

use serde::{Deserialize, Serialize};

use crate::color::SubtitleColors;

/// Allowed subtitle sizes in percent
pub const SUBTITLES_SIZES: [u32; 7] = [75, 100, 125, 150, 175, 200, 250];

/// Default subtitle size in percent
pub const DEFAULT_SIZE: u32 = 100;

/// Default delay step in milliseconds
pub const DEFAULT_DELAY_STEP_MS: i64 = 250;

/// Direction of a +/- control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The "-" button
    Decrease,
    /// The "+" button
    Increase,
}

impl Direction {
    /// Signed unit value (-1.0 or +1.0)
    pub fn unit(self) -> f64 {
        match self {
            Direction::Decrease => -1.0,
            Direction::Increase => 1.0,
        }
    }

    /// Signed integer multiplier (-1 or +1)
    pub fn sign(self) -> i64 {
        match self {
            Direction::Decrease => -1,
            Direction::Increase => 1,
        }
    }
}

/// Next allowed size in `direction`, or `None` at the end of the table
///
/// A size that is not in [`SUBTITLES_SIZES`] snaps to the nearest allowed
/// size on the requested side.
pub fn step_size(size: Option<u32>, direction: Direction) -> Option<u32> {
    let size = size?;
    match direction {
        Direction::Increase => SUBTITLES_SIZES.iter().copied().find(|s| *s > size),
        Direction::Decrease => SUBTITLES_SIZES.iter().rev().copied().find(|s| *s < size),
    }
}

/// Size label: `"100%"`, or `"--"` when absent
pub fn size_label(size: Option<u32>) -> String {
    match size {
        Some(size) => format!("{}%", size),
        None => "--".to_string(),
    }
}

/// New delay after one step of `step_ms`, or `None` when there is no delay
pub fn adjust_delay(delay_ms: Option<i64>, step_ms: i64, direction: Direction) -> Option<i64> {
    delay_ms.map(|delay| delay.saturating_add(step_ms.saturating_mul(direction.sign())))
}

/// Delay label in seconds: `"1.25s"`, or `"--"` when absent
pub fn delay_label(delay_ms: Option<i64>) -> String {
    match delay_ms {
        Some(delay) => format!("{:.2}s", delay as f64 / 1000.0),
        None => "--".to_string(),
    }
}

/// Persistable subtitle display settings
///
/// Owned by the host; the picker only reads them through its props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleSettings {
    /// Size in percent (one of [`SUBTITLES_SIZES`] normally)
    pub size: u32,
    /// Delay in milliseconds, positive shows subtitles later
    pub delay_ms: i64,
    /// Vertical offset in percent; `None` when the player cannot position subtitles
    pub offset: Option<f64>,
    /// Text, background and outline colors
    pub colors: SubtitleColors,
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            delay_ms: 0,
            offset: Some(0.0),
            colors: SubtitleColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_steps_through_table() {
        assert_eq!(step_size(Some(100), Direction::Increase), Some(125));
        assert_eq!(step_size(Some(100), Direction::Decrease), Some(75));
        assert_eq!(step_size(Some(200), Direction::Increase), Some(250));
    }

    #[test]
    fn test_size_stops_at_ends() {
        assert_eq!(step_size(Some(250), Direction::Increase), None);
        assert_eq!(step_size(Some(75), Direction::Decrease), None);
        assert_eq!(step_size(None, Direction::Increase), None);
    }

    #[test]
    fn test_size_snaps_off_table_values() {
        assert_eq!(step_size(Some(110), Direction::Increase), Some(125));
        assert_eq!(step_size(Some(110), Direction::Decrease), Some(100));
        assert_eq!(step_size(Some(10), Direction::Increase), Some(75));
        assert_eq!(step_size(Some(400), Direction::Decrease), Some(250));
    }

    #[test]
    fn test_delay_steps() {
        assert_eq!(adjust_delay(Some(0), 250, Direction::Increase), Some(250));
        assert_eq!(adjust_delay(Some(0), 250, Direction::Decrease), Some(-250));
        assert_eq!(adjust_delay(None, 250, Direction::Increase), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(size_label(Some(125)), "125%");
        assert_eq!(size_label(None), "--");
        assert_eq!(delay_label(Some(1250)), "1.25s");
        assert_eq!(delay_label(Some(-500)), "-0.50s");
        assert_eq!(delay_label(None), "--");
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: SubtitleSettings = serde_yaml::from_str("size: 150\n").unwrap();
        assert_eq!(settings.size, 150);
        assert_eq!(settings.delay_ms, 0);
        assert_eq!(settings.offset, Some(0.0));
    }

    #[test]
    fn test_settings_null_offset_means_unsupported() {
        let settings: SubtitleSettings = serde_yaml::from_str("offset: ~\n").unwrap();
        assert_eq!(settings.offset, None);
    }
}
