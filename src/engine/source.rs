use std::future::Future;

use crate::{
    Res,
    types::{AudioFeatures, Playlist, Track},
};

/// One page of a cursor-based listing.
///
/// `next_cursor` is `None` (or empty) on the last page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }
}

/// Playlist capabilities of the streaming service, authenticated for one user.
///
/// Calls taking track ids accept at most [`MAX_BATCH_SIZE`] ids. The engine
/// guarantees that limit, implementations may reject larger requests.
///
/// [`MAX_BATCH_SIZE`]: crate::engine::MAX_BATCH_SIZE
pub trait RemoteSource: Send + Sync {
    /// Lists the tracks of a playlist, starting at `cursor` or at the
    /// beginning when `cursor` is `None`.
    fn list_playlist_tracks(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> impl Future<Output = Res<Page<Track>>> + Send;

    /// Lists the playlists of a user, starting at `cursor`.
    fn list_user_playlists(
        &self,
        user_id: &str,
        cursor: Option<String>,
    ) -> impl Future<Output = Res<Page<Playlist>>> + Send;

    fn get_playlist(&self, playlist_id: &str) -> impl Future<Output = Res<Playlist>> + Send;

    /// Looks up audio features. The result is aligned with `track_ids`, a
    /// slot is `None` when the service has no features for that track.
    fn get_audio_features(
        &self,
        track_ids: Vec<String>,
    ) -> impl Future<Output = Res<Vec<Option<AudioFeatures>>>> + Send;

    fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: Vec<String>,
    ) -> impl Future<Output = Res<()>> + Send;

    /// Removes every occurrence of the given tracks from a playlist.
    fn remove_tracks(
        &self,
        playlist_id: &str,
        track_ids: Vec<String>,
    ) -> impl Future<Output = Res<()>> + Send;

    fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> impl Future<Output = Res<Playlist>> + Send;

    fn remove_from_saved_library(&self, track_id: &str) -> impl Future<Output = Res<()>> + Send;

    /// Returns the id of the authenticated user.
    fn current_user(&self) -> impl Future<Output = Res<String>> + Send;
}
