use chrono::NaiveDate;

use crate::{
    engine::{EngineError, Pager, RemoteSource, remove_in_batches},
    types::Track,
    utils, warning,
};

/// Inclusive release-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds as `YYYY-MM-DD`.
    pub fn parse(start: &str, end: &str) -> Result<Self, EngineError> {
        let parse = |date: &str| {
            utils::parse_date_bound(date).ok_or_else(|| EngineError::InvalidDate(date.to_string()))
        };
        Ok(Self::new(parse(start)?, parse(end)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Whether `track` was released before the window starts or after it ends.
///
/// Returns `None` if the release date cannot be read.
pub fn is_outside(track: &Track, window: &DateWindow) -> Option<bool> {
    let album = &track.album;
    utils::parse_release_date(&album.release_date, &album.release_date_precision)
        .map(|date| !window.contains(date))
}

/// Ids of the tracks to remove for `window`, in playlist order.
///
/// Tracks with an unreadable release date are kept.
pub fn purge_candidates(tracks: &[Track], window: &DateWindow) -> Vec<String> {
    tracks
        .iter()
        .filter(|track| match is_outside(track, window) {
            Some(outside) => outside,
            None => {
                warning!(
                    "Cannot read release date '{}' of track {}, keeping it",
                    track.album.release_date,
                    track.id
                );
                false
            }
        })
        .map(|track| track.id.clone())
        .collect()
}

/// Removes every track released outside of `[start, end]` from a playlist.
///
/// The whole playlist is read before the first removal is issued.
pub async fn purge_playlist<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    start: &str,
    end: &str,
) -> Result<(), EngineError> {
    let window = DateWindow::parse(start, end)?;

    let mut to_remove = Vec::new();
    let mut pager = Pager::new(|cursor| source.list_playlist_tracks(playlist_id, cursor));
    while let Some(tracks) = pager.next_page().await? {
        to_remove.extend(purge_candidates(&tracks, &window));
    }

    remove_in_batches(source, playlist_id, &to_remove).await?;

    Ok(())
}
