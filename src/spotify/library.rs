use reqwest::Method;

use crate::{Res, spotify::SpotifyClient, types::User};

impl SpotifyClient {
    /// Profile of the authenticated user.
    ///
    /// # API Endpoint
    ///
    /// `GET /me`
    pub async fn me(&self) -> Res<User> {
        let api_url = self.url("/me");
        Ok(self.get(&api_url).await?.json::<User>().await?)
    }

    /// Removes a track from the user's saved tracks.
    ///
    /// Removing a track that is not saved succeeds.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Spotify ID of the track
    ///
    /// # API Endpoint
    ///
    /// `DELETE /me/tracks?ids={track_id}`
    pub async fn remove_saved_track(&self, track_id: &str) -> Res<()> {
        let api_url = self.url(&format!("/me/tracks?ids={id}", id = track_id));
        self.send::<()>(Method::DELETE, &api_url, None).await?;
        Ok(())
    }
}
