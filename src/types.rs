use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

// Spotify sends `null` for fields it has no value for, e.g. the release date
// of a local file. Those decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
}

impl Playlist {
    pub fn is_public(&self) -> bool {
        self.public.unwrap_or(false)
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub id: String,
    pub visibility: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date_precision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: TrackAlbum,
    pub popularity: u32,
    #[serde(default)]
    pub explicit: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_ms: u64,
}

/// A track together with its audio features, the unit the sort rules score.
#[derive(Debug, Clone)]
pub struct TrackComplete {
    pub track: Track,
    pub features: AudioFeatures,
}

// Wire types of the Spotify Web API.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistItemTrack>,
}

/// Track object as embedded in a playlist. Local files come without an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemTrack {
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: TrackAlbum,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explicit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
}

impl PlaylistItemTrack {
    pub fn into_track(self) -> Option<Track> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(Track {
            id,
            name: self.name,
            album: self.album,
            popularity: self.popularity,
            explicit: self.explicit,
            duration_ms: self.duration_ms,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksFromPlaylistRequest {
    pub tracks: Vec<TrackUri>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}
