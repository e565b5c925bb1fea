//! Subtitle track record
//!
//! A [`Track`] is one selectable subtitle stream as reported by the host
//! player. Tracks are supplied by the caller and never mutated here; every
//! derivation in this crate borrows them.

use serde::{Deserialize, Serialize};

/// One selectable subtitle stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Identifier, unique within the supplied list
    pub id: String,
    /// Human-readable language label (compared byte-exactly, never normalized)
    pub lang: String,
    /// Human-readable source label, e.g. "EMBEDDED" or a provider name
    pub origin: String,
}

impl Track {
    /// Create a track from its three labels
    pub fn new(id: impl Into<String>, lang: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lang: lang.into(),
            origin: origin.into(),
        }
    }
}

/// Iterate an optional track list, treating `None` as empty
pub(crate) fn iter(tracks: Option<&[Track]>) -> std::slice::Iter<'_, Track> {
    tracks.unwrap_or(&[]).iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_list_iterates_empty() {
        assert_eq!(iter(None).count(), 0);
    }

    #[test]
    fn test_track_yaml_shape() {
        let yaml = "id: a\nlang: English\norigin: EMBEDDED\n";
        let track: Track = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(track, Track::new("a", "English", "EMBEDDED"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let yaml = "id: a\nlang: English\n";
        assert!(serde_yaml::from_str::<Track>(yaml).is_err());
    }
}
