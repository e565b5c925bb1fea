//! Vertical offset gate and arithmetic
//!
//! The offset is a signed percent-like position delta. It is only
//! adjustable while a language is selected and the value is finite.

use crate::settings::Direction;

/// Tooltip shown over the disabled vertical position control
pub const OFFSET_DISABLED_HINT: &str = "Vertical position is not configurable";

/// The offset as a usable number, or `None` when absent or not finite
pub fn well_formed(offset: Option<f64>) -> Option<f64> {
    offset.filter(|value| value.is_finite())
}

/// Whether the offset controls are disabled
///
/// Disabled when subtitles are off, or when there is no finite offset.
pub fn offset_disabled(selected_language: Option<&str>, offset: Option<f64>) -> bool {
    selected_language.is_none() || well_formed(offset).is_none()
}

/// New offset after one unit step, or `None` when the offset is unusable
///
/// Plain addition, no clamping in either direction.
pub fn adjust_offset(offset: Option<f64>, direction: Direction) -> Option<f64> {
    well_formed(offset).map(|value| value + direction.unit())
}

/// Display label: `"5%"`, or `"--"` when there is no usable value
pub fn offset_label(offset: Option<f64>) -> String {
    match well_formed(offset) {
        Some(value) => format!("{}%", value),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_when_subtitles_off() {
        assert!(offset_disabled(None, Some(5.0)));
        assert!(offset_disabled(None, None));
        assert!(offset_disabled(None, Some(f64::NAN)));
    }

    #[test]
    fn test_enabled_only_with_language_and_finite_offset() {
        assert!(!offset_disabled(Some("English"), Some(0.0)));
        assert!(!offset_disabled(Some(""), Some(-12.5)));
        assert!(offset_disabled(Some("English"), None));
        assert!(offset_disabled(Some("English"), Some(f64::NAN)));
        assert!(offset_disabled(Some("English"), Some(f64::INFINITY)));
    }

    #[test]
    fn test_adjust_is_unclamped_addition() {
        assert_eq!(adjust_offset(Some(5.0), Direction::Increase), Some(6.0));
        assert_eq!(adjust_offset(Some(-3.0), Direction::Decrease), Some(-4.0));
        assert_eq!(adjust_offset(Some(1000.0), Direction::Increase), Some(1001.0));
        assert_eq!(adjust_offset(Some(0.5), Direction::Decrease), Some(-0.5));
    }

    #[test]
    fn test_adjust_without_value_is_noop() {
        assert_eq!(adjust_offset(None, Direction::Increase), None);
        assert_eq!(adjust_offset(Some(f64::NAN), Direction::Increase), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(offset_label(Some(5.0)), "5%");
        assert_eq!(offset_label(Some(-3.0)), "-3%");
        assert_eq!(offset_label(Some(2.5)), "2.5%");
        assert_eq!(offset_label(None), "--");
        assert_eq!(offset_label(Some(f64::NAN)), "--");
    }
}
