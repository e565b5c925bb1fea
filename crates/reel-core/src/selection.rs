//! Selection resolution and variant filtering
//!
//! The selected language is never stored: it is whatever language the
//! currently selected track carries. Variants are the tracks sharing it.

use crate::track::{self, Track};

/// Language of the track whose id equals `selected_track_id`
///
/// Returns `None` ("subtitles off") when no id is selected or no track
/// matches. If ids repeat, the last matching track wins. `Some("")` is a
/// real selection of a track with an empty language, not "off".
pub fn selected_language<'a>(
    tracks: Option<&'a [Track]>,
    selected_track_id: Option<&str>,
) -> Option<&'a str> {
    let selected_track_id = selected_track_id?;
    track::iter(tracks).fold(None, |selected, track| {
        if track.id == selected_track_id {
            Some(track.lang.as_str())
        } else {
            selected
        }
    })
}

/// Tracks whose language equals `language`, in list order
///
/// Empty when `language` is `None` or the list is absent.
pub fn tracks_for_language<'a>(
    tracks: Option<&'a [Track]>,
    language: Option<&str>,
) -> Vec<&'a Track> {
    let Some(language) = language else {
        return Vec::new();
    };
    track::iter(tracks)
        .filter(|track| track.lang == language)
        .collect()
}

/// Representative track id for a language row
///
/// Scans from the end of the list, so the last track carrying `language`
/// is chosen. Aggregation runs first-match; this runs last-match.
pub fn track_for_language<'a>(tracks: Option<&'a [Track]>, language: &str) -> Option<&'a str> {
    track::iter(tracks)
        .rev()
        .find(|track| track.lang == language)
        .map(|track| track.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new("a", "English", "EMBEDDED"),
            Track::new("b", "English", "OpenSubtitles"),
            Track::new("c", "French", "EMBEDDED"),
        ]
    }

    #[test]
    fn test_resolves_language_of_selected_track() {
        let tracks = tracks();
        assert_eq!(selected_language(Some(&tracks), Some("b")), Some("English"));
        assert_eq!(selected_language(Some(&tracks), Some("c")), Some("French"));
    }

    #[test]
    fn test_unmatched_or_absent_id_is_off() {
        let tracks = tracks();
        assert_eq!(selected_language(Some(&tracks), Some("x")), None);
        assert_eq!(selected_language(Some(&tracks), None), None);
        assert_eq!(selected_language(None, Some("a")), None);
    }

    #[test]
    fn test_empty_language_is_not_off() {
        let tracks = vec![Track::new("u", "", "EMBEDDED")];
        assert_eq!(selected_language(Some(&tracks), Some("u")), Some(""));
    }

    #[test]
    fn test_duplicate_ids_last_match_wins() {
        let tracks = vec![
            Track::new("a", "English", "EMBEDDED"),
            Track::new("a", "Spanish", "OpenSubtitles"),
        ];
        assert_eq!(selected_language(Some(&tracks), Some("a")), Some("Spanish"));
    }

    #[test]
    fn test_variants_are_exactly_the_language_subset() {
        let tracks = tracks();
        let variants = tracks_for_language(Some(&tracks), Some("English"));
        let ids: Vec<&str> = variants.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(variants.iter().all(|t| t.lang == "English"));
    }

    #[test]
    fn test_variants_empty_without_language() {
        let tracks = tracks();
        assert!(tracks_for_language(Some(&tracks), None).is_empty());
        assert!(tracks_for_language(None, Some("English")).is_empty());
    }

    #[test]
    fn test_language_row_picks_last_track() {
        let tracks = tracks();
        assert_eq!(track_for_language(Some(&tracks), "English"), Some("b"));
        assert_eq!(track_for_language(Some(&tracks), "French"), Some("c"));
        assert_eq!(track_for_language(Some(&tracks), "German"), None);
        assert_eq!(track_for_language(None, "English"), None);
    }
}
