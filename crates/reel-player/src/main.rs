//! reel player - video player shell with the subtitles picker
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the YAML config and the subtitle track list
//! 2. Launches the iced GUI application
//!
//! ## Command line flags
//!
//! - `--tracks <path>`: Load subtitle tracks from a YAML file
//! - `--no-tracks`: Start with no track list at all (backend reported none)

mod config;
mod tracks;
mod ui;

use std::path::PathBuf;

use iced::{Size, Task};

use ui::{Message, ReelApp};

/// Parsed command line flags
#[derive(Debug, Default)]
struct Args {
    tracks_path: Option<PathBuf>,
    no_tracks: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tracks" => match args.next() {
                Some(path) => parsed.tracks_path = Some(PathBuf::from(path)),
                None => log::warn!("--tracks needs a path, ignoring"),
            },
            "--no-tracks" => parsed.no_tracks = true,
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
    }

    parsed
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("reel-player starting up");

    let args = parse_args(std::env::args().skip(1));

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    let tracks = if args.no_tracks {
        log::info!("Starting without a track list (--no-tracks)");
        None
    } else {
        let path = args.tracks_path.as_deref().or(config.tracks_path.as_deref());
        Some(tracks::load_tracks_or_demo(path))
    };

    iced::application(
        move || {
            let app = ReelApp::new(config.clone(), config_path.clone(), tracks.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .theme(theme)
    .title("reel")
    .window_size(Size::new(720.0, 420.0))
    .run()
}

/// Update function for iced
fn update(app: &mut ReelApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &ReelApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &ReelApp) -> iced::Theme {
    app.theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_tracks_flag() {
        let parsed = args(&["--tracks", "/tmp/tracks.yaml"]);
        assert_eq!(parsed.tracks_path, Some(PathBuf::from("/tmp/tracks.yaml")));
        assert!(!parsed.no_tracks);
    }

    #[test]
    fn test_parse_no_tracks_and_unknown() {
        let parsed = args(&["--verbose", "--no-tracks", "--tracks"]);
        assert!(parsed.no_tracks);
        assert!(parsed.tracks_path.is_none());
    }
}
