use crate::{
    engine::{EngineError, Pager, RemoteSource, add_in_batches},
    types::Playlist,
};

/// Name of a clone: the requested name, or "Clone of <source>" if none is
/// given.
pub fn clone_name(requested: Option<&str>, source: &Playlist) -> String {
    match requested.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("Clone of {}", source.name),
    }
}

/// Copies a playlist into a new playlist of the current user.
///
/// The clone gets the visibility of the source. Tracks are added page by
/// page in source order. On failure the partially filled clone is left in
/// place.
pub async fn clone_playlist<S: RemoteSource>(
    source: &S,
    playlist_id: &str,
    new_name: &str,
) -> Result<(), EngineError> {
    if new_name.is_empty() {
        return Err(EngineError::InvalidName);
    }

    let user_id = source.current_user().await.map_err(EngineError::fetch)?;
    let original = source
        .get_playlist(playlist_id)
        .await
        .map_err(EngineError::fetch)?;

    let created = source
        .create_playlist(&user_id, new_name, "", original.is_public())
        .await
        .map_err(EngineError::mutation)?;

    let mut pager = Pager::new(|cursor| source.list_playlist_tracks(playlist_id, cursor));
    while let Some(tracks) = pager.next_page().await? {
        let ids = tracks.into_iter().map(|t| t.id).collect::<Vec<_>>();
        add_in_batches(source, &created.id, &ids).await?;
    }

    Ok(())
}
