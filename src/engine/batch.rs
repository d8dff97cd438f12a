use std::future::Future;

use crate::{
    Res,
    engine::{EngineError, RemoteSource},
};

/// Maximum number of track ids accepted by one mutation call.
pub const MAX_BATCH_SIZE: usize = 100;

/// Applies `mutate` to consecutive chunks of `track_ids`, in order.
///
/// Chunks hold at most `batch_size` ids, capped at [`MAX_BATCH_SIZE`]. The
/// first failing chunk aborts with [`EngineError::RemoteMutation`], chunks
/// applied before it are not rolled back. Returns the number of calls made.
pub async fn apply_in_batches<F, Fut>(
    track_ids: &[String],
    batch_size: usize,
    mut mutate: F,
) -> Result<usize, EngineError>
where
    F: FnMut(Vec<String>) -> Fut,
    Fut: Future<Output = Res<()>>,
{
    let batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
    let mut calls = 0;

    for chunk in track_ids.chunks(batch_size) {
        mutate(chunk.to_vec()).await.map_err(EngineError::mutation)?;
        calls += 1;
    }

    Ok(calls)
}

/// Appends `track_ids` to a playlist, keeping their order.
pub async fn add_in_batches<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<usize, EngineError> {
    apply_in_batches(track_ids, MAX_BATCH_SIZE, |chunk| {
        source.add_tracks(playlist_id, chunk)
    })
    .await
}

pub async fn remove_in_batches<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<usize, EngineError> {
    apply_in_batches(track_ids, MAX_BATCH_SIZE, |chunk| {
        source.remove_tracks(playlist_id, chunk)
    })
    .await
}
