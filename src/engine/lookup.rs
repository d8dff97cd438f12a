use crate::{
    engine::{EngineError, Pager, RemoteSource},
    types::Playlist,
};

/// All playlists of the current user, followed ones included.
pub async fn user_playlists<S: RemoteSource>(source: &S) -> Result<Vec<Playlist>, EngineError> {
    let user_id = source.current_user().await.map_err(EngineError::fetch)?;
    Pager::new(|cursor| source.list_user_playlists(&user_id, cursor))
        .collect_all()
        .await
}

/// First playlist of the current user whose name equals `name`.
///
/// Stops paging as soon as a match is found.
pub async fn find_playlist_by_name<S: RemoteSource>(
    source: &S,
    name: &str,
) -> Result<Playlist, EngineError> {
    let user_id = source.current_user().await.map_err(EngineError::fetch)?;

    let mut pager = Pager::new(|cursor| source.list_user_playlists(&user_id, cursor));
    while let Some(playlists) = pager.next_page().await? {
        if let Some(found) = playlists.into_iter().find(|p| p.name == name) {
            return Ok(found);
        }
    }

    Err(EngineError::NotFound(name.to_string()))
}
