use crate::{
    Res,
    engine::Page,
    spotify::SpotifyClient,
    types::{AudioFeatures, AudioFeaturesResponse, Paging, PlaylistItem, Track},
    warning,
};

/// Maximum page size of `GET /playlists/{playlist_id}/tracks`.
const TRACKS_PAGE_LIMIT: u32 = 100;

impl SpotifyClient {
    /// Fetches one page of playlist items.
    ///
    /// Items without a track or without a track id (local files, removed
    /// episodes) cannot be addressed by id and are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify ID of the playlist
    /// * `cursor` - `next` URL returned with the previous page, `None` for the first page
    ///
    /// # Returns
    ///
    /// - `Ok(Page<Track>)` - The addressable tracks of this page in playlist order
    /// - `Err(_)` - Network error, HTTP error or undecodable response
    ///
    /// # API Endpoint
    ///
    /// `GET /playlists/{playlist_id}/tracks?limit=100`
    ///
    /// # Error Handling
    ///
    /// - Fields Spotify sends as `null` (release dates of local files) decode to empty values
    /// - A page that still fails to decode fails the whole call
    pub async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Track>> {
        let api_url = match cursor {
            Some(next) => next,
            None => self.url(&format!(
                "/playlists/{id}/tracks?limit={limit}",
                id = playlist_id,
                limit = TRACKS_PAGE_LIMIT
            )),
        };

        let paging = self
            .get(&api_url)
            .await?
            .json::<Paging<PlaylistItem>>()
            .await?;

        let received = paging.items.len();
        let tracks: Vec<Track> = paging
            .items
            .into_iter()
            .filter_map(|item| item.track.and_then(|t| t.into_track()))
            .collect();

        if tracks.len() < received {
            warning!(
                "Skipped {} item(s) without track id in playlist {}",
                received - tracks.len(),
                playlist_id
            );
        }

        Ok(Page::new(tracks, paging.next))
    }

    /// Looks up audio features, aligned with `track_ids`.
    ///
    /// # Arguments
    ///
    /// * `track_ids` - Up to 100 track ids
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Option<AudioFeatures>>)` - One slot per id, `None` where Spotify has no analysis
    /// - `Err(_)` - Network error or HTTP error
    ///
    /// # API Endpoint
    ///
    /// `GET /audio-features?ids={ids}`
    pub async fn audio_features(&self, track_ids: &[String]) -> Res<Vec<Option<AudioFeatures>>> {
        if track_ids.is_empty() {
            return Ok(Vec::new());
        }

        let api_url = self.url(&format!(
            "/audio-features?ids={ids}",
            ids = track_ids.join(",")
        ));

        let json = self
            .get(&api_url)
            .await?
            .json::<AudioFeaturesResponse>()
            .await?;

        Ok(json.audio_features)
    }
}
