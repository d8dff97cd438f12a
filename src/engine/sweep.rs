use crate::{
    Res,
    engine::{EngineError, Pager, RemoteSource},
    warning,
};

/// The track a sweep removes: "Africa" by Toto.
pub const SWEEP_TRACK_ID: &str = "2374M0fQpWi3dLnB54qaLX";

/// Removes [`SWEEP_TRACK_ID`] from all playlists of the current user and
/// from the saved library.
pub async fn sweep<S: RemoteSource>(source: &S) -> Result<(), EngineError> {
    sweep_track(source, SWEEP_TRACK_ID).await
}

/// Removes `track_id` from every playlist owned by the current user, then
/// from the user's saved tracks.
///
/// Failures on single playlists are reported and skipped. Failing to list
/// the playlists or to remove the track from the library is an error.
pub async fn sweep_track<S: RemoteSource>(source: &S, track_id: &str) -> Result<(), EngineError> {
    let user_id = source.current_user().await.map_err(EngineError::fetch)?;
    let user_id = user_id.as_str();

    let mut outcomes: Vec<(String, Res<()>)> = Vec::new();
    let mut pager = Pager::new(|cursor| source.list_user_playlists(user_id, cursor));
    while let Some(playlists) = pager.next_page().await? {
        for playlist in playlists.into_iter().filter(|p| p.owner.id == user_id) {
            let outcome = source
                .remove_tracks(&playlist.id, vec![track_id.to_string()])
                .await;
            outcomes.push((playlist.name, outcome));
        }
    }

    for (name, outcome) in &outcomes {
        if let Err(e) = outcome {
            warning!("Failed to remove track from playlist {}: {}", name, e);
        }
    }

    source
        .remove_from_saved_library(track_id)
        .await
        .map_err(EngineError::mutation)
}
