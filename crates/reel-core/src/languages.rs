//! Language aggregation
//!
//! Collapses a flat track list into the distinct language labels it
//! contains, in first-occurrence order.

use std::collections::HashSet;

use crate::track::{self, Track};

/// Distinct `lang` values of `tracks`, in first-occurrence order
///
/// An absent list yields an empty result. Labels are compared exactly, so
/// "English" and "english" are two languages.
pub fn languages(tracks: Option<&[Track]>) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut languages = Vec::new();

    for track in track::iter(tracks) {
        if seen.insert(track.lang.as_str()) {
            languages.push(track.lang.as_str());
        }
    }

    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new("a", "English", "EMBEDDED"),
            Track::new("b", "English", "OpenSubtitles"),
            Track::new("c", "French", "EMBEDDED"),
            Track::new("d", "German", "OpenSubtitles"),
            Track::new("e", "French", "OpenSubtitles"),
        ]
    }

    #[test]
    fn test_first_occurrence_order() {
        let tracks = tracks();
        assert_eq!(languages(Some(&tracks)), vec!["English", "French", "German"]);
    }

    #[test]
    fn test_absent_and_empty() {
        assert!(languages(None).is_empty());
        assert!(languages(Some(&[])).is_empty());
    }

    #[test]
    fn test_labels_are_not_normalized() {
        let tracks = vec![
            Track::new("a", "English", "EMBEDDED"),
            Track::new("b", "english", "EMBEDDED"),
            Track::new("c", "English ", "EMBEDDED"),
        ];
        assert_eq!(languages(Some(&tracks)), vec!["English", "english", "English "]);
    }

    #[test]
    fn test_each_language_exactly_once() {
        let tracks = tracks();
        let result = languages(Some(&tracks));
        for lang in &result {
            assert_eq!(result.iter().filter(|l| l == &lang).count(), 1);
        }
        for track in &tracks {
            assert!(result.contains(&track.lang.as_str()));
        }
    }
}
