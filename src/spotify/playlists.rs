use reqwest::Method;

use crate::{
    Res,
    engine::Page,
    spotify::SpotifyClient,
    types::{
        AddTracksToPlaylistRequest, CreatePlaylistRequest, Paging, Playlist,
        RemoveTracksFromPlaylistRequest, SnapshotResponse, TrackUri,
    },
    utils,
};

/// Maximum page size of `GET /users/{user_id}/playlists`.
const PLAYLISTS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Fetches one page of a user's playlists.
    ///
    /// Without a cursor the first page is requested, otherwise the cursor is
    /// the `next` URL of the previous page.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify ID of the user whose playlists are listed
    /// * `cursor` - `next` URL returned with the previous page, `None` for the first page
    ///
    /// # Returns
    ///
    /// - `Ok(Page<Playlist>)` - Up to 50 playlists and the cursor of the next page
    /// - `Err(_)` - Network error, HTTP error or undecodable response
    ///
    /// # API Endpoint
    ///
    /// `GET /users/{user_id}/playlists?limit=50`
    ///
    /// # Error Handling
    ///
    /// - 429 and 502 responses are retried by the client, see [`MAX_ATTEMPTS`](super::MAX_ATTEMPTS)
    /// - Every other failure is propagated to the caller
    pub async fn user_playlists_page(
        &self,
        user_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Playlist>> {
        let api_url = match cursor {
            Some(next) => next,
            None => self.url(&format!(
                "/users/{user_id}/playlists?limit={limit}",
                user_id = user_id,
                limit = PLAYLISTS_PAGE_LIMIT
            )),
        };

        let paging = self.get(&api_url).await?.json::<Paging<Playlist>>().await?;

        Ok(Page::new(paging.items, paging.next))
    }

    /// Fetches the metadata of a single playlist.
    ///
    /// Only id, name, owner, visibility and the collaborative flag are
    /// requested. Tracks are read separately, page by page.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify ID of the playlist
    ///
    /// # Returns
    ///
    /// - `Ok(Playlist)` - The playlist metadata
    /// - `Err(_)` - Unknown playlist (404), network error or HTTP error
    ///
    /// # API Endpoint
    ///
    /// `GET /playlists/{playlist_id}?fields=id,name,owner(id,display_name),public,collaborative`
    pub async fn playlist(&self, playlist_id: &str) -> Res<Playlist> {
        let api_url = self.url(&format!(
            "/playlists/{id}?fields=id,name,owner(id,display_name),public,collaborative",
            id = playlist_id
        ));

        Ok(self.get(&api_url).await?.json::<Playlist>().await?)
    }

    /// Creates an empty playlist owned by `user_id`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify ID of the current user
    /// * `name` - Name of the new playlist
    /// * `description` - Description shown in the Spotify clients, may be empty
    /// * `public` - Whether the playlist appears on the user's profile
    ///
    /// # Returns
    ///
    /// - `Ok(Playlist)` - The created playlist, including its new id
    /// - `Err(_)` - Missing `playlist-modify-*` scope, network error or HTTP error
    ///
    /// # API Endpoint
    ///
    /// `POST /users/{user_id}/playlists`
    pub async fn create_user_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<Playlist> {
        let api_url = self.url(&format!("/users/{user_id}/playlists", user_id = user_id));
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
            collaborative: false,
        };

        let response = self.send(Method::POST, &api_url, Some(&body)).await?;
        Ok(response.json::<Playlist>().await?)
    }

    /// Appends tracks to the end of a playlist.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify ID of the target playlist
    /// * `track_ids` - Track ids in the order they are appended, at most 100
    ///
    /// # Returns
    ///
    /// - `Ok(())` - All tracks were appended
    /// - `Err(_)` - Network error or HTTP error, nothing is appended
    ///
    /// # API Endpoint
    ///
    /// `POST /playlists/{playlist_id}/tracks` with a body of track URIs
    ///
    /// # Error Handling
    ///
    /// A 502 is retried by the client. If Spotify applied the failed attempt
    /// anyway, the tracks end up in the playlist twice.
    pub async fn add_playlist_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Res<()> {
        let api_url = self.url(&format!("/playlists/{id}/tracks", id = playlist_id));
        let body = AddTracksToPlaylistRequest {
            uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
        };

        self.send(Method::POST, &api_url, Some(&body))
            .await?
            .json::<SnapshotResponse>()
            .await?;
        Ok(())
    }

    /// Removes all occurrences of the tracks from a playlist.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify ID of the target playlist
    /// * `track_ids` - Track ids to remove, at most 100
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The tracks are gone from the playlist
    /// - `Err(_)` - Network error or HTTP error
    ///
    /// # API Endpoint
    ///
    /// `DELETE /playlists/{playlist_id}/tracks` with a body of track URIs
    pub async fn remove_playlist_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Res<()> {
        let api_url = self.url(&format!("/playlists/{id}/tracks", id = playlist_id));
        let body = RemoveTracksFromPlaylistRequest {
            tracks: track_ids
                .iter()
                .map(|id| TrackUri {
                    uri: utils::track_uri(id),
                })
                .collect(),
        };

        self.send(Method::DELETE, &api_url, Some(&body))
            .await?
            .json::<SnapshotResponse>()
            .await?;
        Ok(())
    }
}
