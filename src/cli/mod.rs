//! # CLI Module
//!
//! This module provides the command-line layer of sortify. Each command
//! loads credentials, resolves the target playlist and hands the work to the
//! [`crate::engine`], reporting progress and outcome with the crate's output
//! macros.
//!
//! ## Commands
//!
//! - [`sort`] - Reorders a playlist by audio-feature rules
//! - [`purge`] - Removes tracks released outside a date window
//! - [`clone`] - Copies a playlist into a new one
//! - [`sweep`] - Removes "Africa" by Toto from all playlists and the library
//! - [`playlists`] - Lists the playlists of the current user
//! - [`token`] - Stores an access token in the token cache
//!
//! ## Error Handling
//!
//! Input errors (unknown sort feature, malformed dates) are reported before
//! any request is sent. Every failure ends the program with exit code 1
//! through the `error!` macro.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sortify token BQC...                                   # Cache an access token
//! sortify playlists --search road                        # Find a playlist
//! sortify sort --playlist-name "Road Trip" --rule popularity:desc --rule tempo
//! sortify purge --playlist-id 37i9dQZF1DX --start 2000-01-01 --end 2009-12-31
//! sortify clone --playlist-name "Road Trip"              # "Clone of Road Trip"
//! sortify sweep
//! ```

mod clone;
mod playlists;
mod purge;
mod sort;
mod sweep;
mod token;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config, engine, error, management::Credentials, spotify::SpotifyClient,
    types::Playlist, utils,
};

pub use clone::clone;
pub use playlists::playlists;
pub use purge::purge;
pub use sort::sort;
pub use sweep::sweep;
pub use token::token;

/// How a command names its target playlist.
#[derive(Debug, Clone)]
pub enum PlaylistRef {
    Id(String),
    Name(String),
}

impl PlaylistRef {
    pub fn from_options(id: Option<String>, name: Option<String>) -> Option<Self> {
        match (id, name) {
            (Some(id), _) => Some(PlaylistRef::Id(id)),
            (None, Some(name)) => Some(PlaylistRef::Name(name)),
            (None, None) => None,
        }
    }
}

async fn connect(config: &Config) -> SpotifyClient {
    let credentials = match Credentials::load(config).await {
        Ok(c) => c,
        Err(e) => error!(
            "Failed to load credentials. Pass --access-token or run sortify token.\n Error: {}",
            e
        ),
    };

    SpotifyClient::new(config, credentials)
}

async fn resolve_playlist(client: &SpotifyClient, target: &PlaylistRef) -> Playlist {
    match target {
        PlaylistRef::Id(id) => match client.playlist(id).await {
            Ok(playlist) => playlist,
            Err(e) => error!("Playlist {} not found: {}", id, e),
        },
        PlaylistRef::Name(name) => match engine::find_playlist_by_name(client, name).await {
            Ok(playlist) => playlist,
            Err(e) => error!("{}", e),
        },
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    utils::set_active_spinner(Some(pb.clone()));
    pb
}

fn finish_spinner(pb: ProgressBar) {
    utils::set_active_spinner(None);
    pb.finish_and_clear();
}
