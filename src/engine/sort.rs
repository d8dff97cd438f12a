use std::cmp::Ordering;

use crate::{
    engine::{
        EngineError, MAX_BATCH_SIZE, Pager, RemoteSource, SortRule, ValidRule, add_in_batches,
        remove_in_batches, validate_rules,
    },
    types::{Track, TrackComplete},
    warning,
};

/// Compares two tracks under an ordered list of rules.
///
/// Each rule adds its signed value to a running sum per side. At the first
/// rule whose values differ the two running sums are compared; when no rule
/// differs the tracks are equal.
pub fn compare_tracks(left: &TrackComplete, right: &TrackComplete, rules: &[ValidRule]) -> Ordering {
    let (mut left_sum, mut right_sum) = (0.0_f64, 0.0_f64);

    for rule in rules {
        let left_val = rule.signed_value(left);
        let right_val = rule.signed_value(right);

        left_sum += left_val;
        right_sum += right_val;

        if left_val != right_val {
            break;
        }
    }

    left_sum.partial_cmp(&right_sum).unwrap_or(Ordering::Equal)
}

/// Stable sort, equal tracks keep their playlist order.
pub fn sort_tracks(tracks: &mut [TrackComplete], rules: &[ValidRule]) {
    tracks.sort_by(|a, b| compare_tracks(a, b, rules));
}

/// Pairs tracks with their audio features, looked up in batches.
///
/// Tracks for which the service returns no features are dropped.
pub async fn attach_features<S: RemoteSource>(
    source: &S,
    tracks: Vec<Track>,
) -> Result<Vec<TrackComplete>, EngineError> {
    let mut complete = Vec::with_capacity(tracks.len());

    for chunk in tracks.chunks(MAX_BATCH_SIZE) {
        let ids = chunk.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        let mut lookups = source
            .get_audio_features(ids)
            .await
            .map_err(EngineError::fetch)?
            .into_iter();

        for track in chunk {
            match lookups.next().flatten() {
                Some(features) => complete.push(TrackComplete {
                    track: track.clone(),
                    features,
                }),
                None => warning!(
                    "No audio features for track {} ({}), leaving it out",
                    track.name,
                    track.id
                ),
            }
        }
    }

    Ok(complete)
}

/// Computes the new track order of a playlist without modifying it.
pub async fn sorted_track_ids<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    rules: &[ValidRule],
) -> Result<(Vec<String>, Vec<String>), EngineError> {
    let tracks = Pager::new(|cursor| source.list_playlist_tracks(playlist_id, cursor))
        .collect_all()
        .await?;

    let original_ids = tracks.iter().map(|t| t.id.clone()).collect::<Vec<_>>();

    let mut complete = attach_features(source, tracks).await?;
    sort_tracks(&mut complete, rules);

    let sorted_ids = complete.into_iter().map(|t| t.track.id).collect();
    Ok((original_ids, sorted_ids))
}

/// Rewrites a playlist in the order given by `rules`.
///
/// All rules are checked before anything is fetched. The playlist is read
/// completely, then every original track is removed and the sorted tracks
/// are appended, both in batches of [`MAX_BATCH_SIZE`].
pub async fn sort_playlist<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    rules: &[SortRule],
) -> Result<(), EngineError> {
    let rules = validate_rules(rules)?;

    let (original_ids, sorted_ids) = sorted_track_ids(source, playlist_id, &rules).await?;

    remove_in_batches(source, playlist_id, &original_ids).await?;
    add_in_batches(source, playlist_id, &sorted_ids).await?;

    Ok(())
}
