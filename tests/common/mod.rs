#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard},
};

use sortify::{
    Res,
    engine::{Page, RemoteSource},
    types::{AudioFeatures, Playlist, PlaylistOwner, Track, TrackAlbum},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListTracks {
        playlist_id: String,
        cursor: Option<String>,
    },
    ListPlaylists {
        user_id: String,
        cursor: Option<String>,
    },
    GetPlaylist(String),
    AudioFeatures(Vec<String>),
    Add {
        playlist_id: String,
        track_ids: Vec<String>,
    },
    Remove {
        playlist_id: String,
        track_ids: Vec<String>,
    },
    Create {
        name: String,
        public: bool,
    },
    RemoveSaved(String),
    CurrentUser,
}

#[derive(Default)]
pub struct State {
    pub playlists: Vec<Playlist>,
    pub tracks: HashMap<String, Vec<Track>>,
    pub catalog: HashMap<String, Track>,
    pub features: HashMap<String, AudioFeatures>,
    pub saved: Vec<String>,
    pub calls: Vec<Call>,
    pub add_calls: usize,
}

/// In-memory streaming service that records every call and applies mutations.
pub struct MockSource {
    pub user_id: String,
    pub page_size: usize,
    pub playlist_page_size: usize,
    pub fail_tracks_page: Option<usize>,
    pub fail_playlists_page: Option<usize>,
    pub fail_features: bool,
    pub fail_add_call: Option<usize>,
    pub fail_remove_for: HashSet<String>,
    pub fail_saved_removal: bool,
    state: Mutex<State>,
}

impl MockSource {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            page_size: 100,
            playlist_page_size: 50,
            fail_tracks_page: None,
            fail_playlists_page: None,
            fail_features: false,
            fail_add_call: None,
            fail_remove_for: HashSet::new(),
            fail_saved_removal: false,
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_playlist(self, playlist: Playlist, tracks: Vec<Track>) -> Self {
        {
            let mut state = self.state();
            for track in &tracks {
                state.catalog.insert(track.id.clone(), track.clone());
            }
            state.tracks.insert(playlist.id.clone(), tracks);
            state.playlists.push(playlist);
        }
        self
    }

    pub fn with_features(self, features: Vec<AudioFeatures>) -> Self {
        {
            let mut state = self.state();
            for f in features {
                state.features.insert(f.id.clone(), f);
            }
        }
        self
    }

    pub fn with_saved(self, track_ids: &[&str]) -> Self {
        self.state()
            .saved
            .extend(track_ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn track_ids(&self, playlist_id: &str) -> Vec<String> {
        self.state()
            .tracks
            .get(playlist_id)
            .map(|tracks| tracks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn removes(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Remove { track_ids, .. } => Some(track_ids),
                _ => None,
            })
            .collect()
    }

    pub fn adds(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Add { track_ids, .. } => Some(track_ids),
                _ => None,
            })
            .collect()
    }
}

fn page_of<T: Clone>(items: &[T], cursor: &Option<String>, size: usize) -> (usize, Page<T>) {
    let offset = cursor
        .as_ref()
        .map(|c| c.parse::<usize>().unwrap())
        .unwrap_or(0);
    let end = (offset + size).min(items.len());
    let next = (end < items.len()).then(|| end.to_string());
    (offset / size, Page::new(items[offset..end].to_vec(), next))
}

impl RemoteSource for MockSource {
    async fn list_playlist_tracks(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Track>> {
        let mut state = self.state();
        state.calls.push(Call::ListTracks {
            playlist_id: playlist_id.to_string(),
            cursor: cursor.clone(),
        });

        let tracks = state
            .tracks
            .get(playlist_id)
            .ok_or_else(|| format!("no playlist {}", playlist_id))?;
        let (index, page) = page_of(tracks, &cursor, self.page_size);
        if self.fail_tracks_page == Some(index) {
            return Err("tracks page unavailable".into());
        }
        Ok(page)
    }

    async fn list_user_playlists(
        &self,
        user_id: &str,
        cursor: Option<String>,
    ) -> Res<Page<Playlist>> {
        let mut state = self.state();
        state.calls.push(Call::ListPlaylists {
            user_id: user_id.to_string(),
            cursor: cursor.clone(),
        });

        let (index, page) = page_of(&state.playlists, &cursor, self.playlist_page_size);
        if self.fail_playlists_page == Some(index) {
            return Err("playlists page unavailable".into());
        }
        Ok(page)
    }

    async fn get_playlist(&self, playlist_id: &str) -> Res<Playlist> {
        let mut state = self.state();
        state.calls.push(Call::GetPlaylist(playlist_id.to_string()));
        state
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .cloned()
            .ok_or_else(|| format!("no playlist {}", playlist_id).into())
    }

    async fn get_audio_features(&self, track_ids: Vec<String>) -> Res<Vec<Option<AudioFeatures>>> {
        assert!(track_ids.len() <= 100, "feature lookup over 100 ids");
        let mut state = self.state();
        state.calls.push(Call::AudioFeatures(track_ids.clone()));
        if self.fail_features {
            return Err("audio features unavailable".into());
        }
        Ok(track_ids
            .iter()
            .map(|id| state.features.get(id).cloned())
            .collect())
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: Vec<String>) -> Res<()> {
        assert!(track_ids.len() <= 100, "add over 100 ids");
        let mut state = self.state();
        state.calls.push(Call::Add {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.clone(),
        });
        state.add_calls += 1;
        if self.fail_add_call == Some(state.add_calls) {
            return Err("add rejected".into());
        }

        let added = track_ids
            .iter()
            .map(|id| state.catalog.get(id).cloned().unwrap())
            .collect::<Vec<_>>();
        state
            .tracks
            .entry(playlist_id.to_string())
            .or_default()
            .extend(added);
        Ok(())
    }

    async fn remove_tracks(&self, playlist_id: &str, track_ids: Vec<String>) -> Res<()> {
        assert!(track_ids.len() <= 100, "remove over 100 ids");
        let mut state = self.state();
        state.calls.push(Call::Remove {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.clone(),
        });
        if self.fail_remove_for.contains(playlist_id) {
            return Err("remove rejected".into());
        }

        if let Some(tracks) = state.tracks.get_mut(playlist_id) {
            tracks.retain(|t| !track_ids.contains(&t.id));
        }
        Ok(())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        _description: &str,
        public: bool,
    ) -> Res<Playlist> {
        let mut state = self.state();
        state.calls.push(Call::Create {
            name: name.to_string(),
            public,
        });

        let created = playlist(
            &format!("created-{}", state.playlists.len()),
            name,
            user_id,
            public,
        );
        state.tracks.insert(created.id.clone(), Vec::new());
        state.playlists.push(created.clone());
        Ok(created)
    }

    async fn remove_from_saved_library(&self, track_id: &str) -> Res<()> {
        let mut state = self.state();
        state.calls.push(Call::RemoveSaved(track_id.to_string()));
        if self.fail_saved_removal {
            return Err("library unavailable".into());
        }
        state.saved.retain(|id| id != track_id);
        Ok(())
    }

    async fn current_user(&self) -> Res<String> {
        self.state().calls.push(Call::CurrentUser);
        Ok(self.user_id.clone())
    }
}

pub fn playlist(id: &str, name: &str, owner: &str, public: bool) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        owner: PlaylistOwner {
            id: owner.to_string(),
            display_name: None,
        },
        public: Some(public),
        collaborative: false,
    }
}

pub fn track(id: &str, release_date: &str, popularity: u32) -> Track {
    let precision = match release_date.len() {
        4 => "year",
        7 => "month",
        _ => "day",
    };
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        album: TrackAlbum {
            name: format!("Album {}", id),
            release_date: release_date.to_string(),
            release_date_precision: precision.to_string(),
        },
        popularity,
        explicit: false,
        duration_ms: 200_000,
    }
}

pub fn features(id: &str, tempo: f64, energy: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        tempo,
        energy,
        ..Default::default()
    }
}

pub fn ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{:03}", prefix, i)).collect()
}
