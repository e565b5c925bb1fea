//! Subtitle track list loading
//!
//! The player normally gets tracks from the video backend. Until one is
//! attached, tracks come from a YAML list or a built-in demo set.
//!
//! ```yaml
//! - id: "1"
//!   lang: English
//!   origin: EMBEDDED
//! ```

use anyhow::{Context, Result};
use reel_core::Track;
use std::path::Path;

/// Load a track list from a YAML file
pub fn load_tracks(path: &Path) -> Result<Vec<Track>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tracks file: {:?}", path))?;
    let tracks: Vec<Track> = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse tracks file: {:?}", path))?;

    log::info!("load_tracks: Loaded {} tracks from {:?}", tracks.len(), path);
    Ok(tracks)
}

/// Tracks from `path`, falling back to [`demo_tracks`] on any error
pub fn load_tracks_or_demo(path: Option<&Path>) -> Vec<Track> {
    let Some(path) = path else {
        log::info!("load_tracks: No tracks file configured, using demo tracks");
        return demo_tracks();
    };

    match load_tracks(path) {
        Ok(tracks) => tracks,
        Err(e) => {
            log::warn!("load_tracks: {:#}, using demo tracks", e);
            demo_tracks()
        }
    }
}

/// Built-in demo list
pub fn demo_tracks() -> Vec<Track> {
    vec![
        Track::new("emb-en", "English", "EMBEDDED"),
        Track::new("os-en-1", "English", "OpenSubtitles"),
        Track::new("os-fr-1", "French", "OpenSubtitles"),
        Track::new("emb-fr", "French", "EMBEDDED"),
        Track::new("os-de-1", "German", "OpenSubtitles"),
        Track::new("pn-es-1", "Spanish", "Podnapisi"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_tracks_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.yaml");
        std::fs::write(
            &path,
            "- id: a\n  lang: English\n  origin: EMBEDDED\n- id: b\n  lang: French\n  origin: OpenSubtitles\n",
        )
        .unwrap();

        let tracks = load_tracks(&path).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1], Track::new("b", "French", "OpenSubtitles"));
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_tracks(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.yaml"));
    }

    #[test]
    fn test_fallback_to_demo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "- id: only-id\n").unwrap();

        assert_eq!(load_tracks_or_demo(Some(path.as_path())), demo_tracks());
        assert_eq!(load_tracks_or_demo(None), demo_tracks());
    }

    #[test]
    fn test_demo_ids_unique() {
        let tracks = demo_tracks();
        let mut ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tracks.len());
    }
}
