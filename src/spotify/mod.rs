//! # Spotify Integration Module
//!
//! This module implements the [`RemoteSource`] capabilities on top of the
//! Spotify Web API. [`SpotifyClient`] owns the HTTP client, the API base URL
//! and the credentials of one user; the engine only ever sees the trait.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Engine (sort, purge, clone, sweep)
//!     ↓  RemoteSource
//! Spotify Integration Layer
//!     ├── Playlists (listing, lookup, creation, track mutations)
//!     ├── Tracks (playlist items, audio features)
//!     └── Library (saved tracks, current user)
//!     ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Pagination
//!
//! Spotify pages carry the URL of the next page in `next`. That URL is
//! passed to the engine as the opaque cursor and requested verbatim for the
//! following page.
//!
//! ## Transport Retries
//!
//! - **502 Bad Gateway**: retried after 10 seconds
//! - **429 Too Many Requests**: retried after `Retry-After` when it is at
//!   most 120 seconds
//!
//! At most [`MAX_ATTEMPTS`] requests are made for one call. All other errors
//! are handed to the caller unchanged.
//!
//! ## API Coverage
//!
//! - `GET /me` - Id of the authenticated user
//! - `GET /users/{user_id}/playlists` - User's playlists
//! - `GET /playlists/{playlist_id}` - Playlist details
//! - `GET /playlists/{playlist_id}/tracks` - Playlist items
//! - `GET /audio-features` - Audio features of up to 100 tracks
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks
//! - `DELETE /playlists/{playlist_id}/tracks` - Remove tracks
//! - `DELETE /me/tracks` - Remove tracks from the saved library

mod library;
mod playlists;
mod tracks;

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use tokio::time::sleep;

use crate::{
    Res,
    config::Config,
    engine::{MAX_BATCH_SIZE, Page, RemoteSource},
    management::Credentials,
    types::{AudioFeatures, Playlist, Track},
    warning,
};

/// Maximum number of requests issued for one API call, retries included.
pub const MAX_ATTEMPTS: u32 = 3;

const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Spotify Web API client authenticated for one user.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    credentials: Credentials,
}

impl SpotifyClient {
    /// Creates a client for the API base URL of `config`.
    pub fn new(config: &Config, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.send::<()>(Method::GET, url, None).await
    }

    /// Sends one request, retrying on 502 and on short rate limits.
    ///
    /// # Rate Limiting
    ///
    /// - A 429 with a `Retry-After` of at most 120 seconds is waited out and retried
    /// - Longer delays are reported with a warning and returned as errors
    /// - A 502 is retried after 10 seconds
    /// - At most [`MAX_ATTEMPTS`] requests are sent in total
    async fn send<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, reqwest::Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut attempts = 0;

        loop {
            attempts += 1;

            let mut request = self
                .http
                .request(method.clone(), url)
                .bearer_auth(self.credentials.access_token());
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;

            // check for retry-after header
            if response.status() == StatusCode::TOO_MANY_REQUESTS && attempts < MAX_ATTEMPTS {
                if let Some(retry_after) = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                {
                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue;
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds.",
                        retry_after
                    );
                }
            }

            match response.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if err.status() == Some(StatusCode::BAD_GATEWAY) && attempts < MAX_ATTEMPTS {
                        sleep(BAD_GATEWAY_DELAY).await;
                        continue; // retry
                    }
                    return Err(err); // propagate other errors
                }
            }
        }
    }
}

fn check_batch(track_ids: &[String]) -> Res<()> {
    if track_ids.len() > MAX_BATCH_SIZE {
        return Err(format!(
            "at most {} tracks per request, got {}",
            MAX_BATCH_SIZE,
            track_ids.len()
        )
        .into());
    }
    Ok(())
}

impl RemoteSource for SpotifyClient {
    async fn list_playlist_tracks(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Track>> {
        self.playlist_tracks_page(playlist_id, cursor).await
    }

    async fn list_user_playlists(
        &self,
        user_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Playlist>> {
        self.user_playlists_page(user_id, cursor).await
    }

    async fn get_playlist(&self, playlist_id: &str) -> Res<Playlist> {
        self.playlist(playlist_id).await
    }

    async fn get_audio_features(&self, track_ids: Vec<String>) -> Res<Vec<Option<AudioFeatures>>> {
        check_batch(&track_ids)?;
        self.audio_features(&track_ids).await
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: Vec<String>) -> Res<()> {
        check_batch(&track_ids)?;
        self.add_playlist_tracks(playlist_id, &track_ids).await
    }

    async fn remove_tracks(&self, playlist_id: &str, track_ids: Vec<String>) -> Res<()> {
        check_batch(&track_ids)?;
        self.remove_playlist_tracks(playlist_id, &track_ids).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<Playlist> {
        self.create_user_playlist(user_id, name, description, public)
            .await
    }

    async fn remove_from_saved_library(&self, track_id: &str) -> Res<()> {
        self.remove_saved_track(track_id).await
    }

    async fn current_user(&self) -> Res<String> {
        Ok(self.me().await?.id)
    }
}
