use crate::{
    cli::{PlaylistRef, connect, finish_spinner, resolve_playlist, spinner},
    config::Config,
    engine, error, success,
};

pub async fn clone(config: &Config, target: PlaylistRef, new_name: Option<String>) {
    let client = connect(config).await;
    let playlist = resolve_playlist(&client, &target).await;
    let name = engine::clone_name(new_name.as_deref(), &playlist);

    let pb = spinner(format!("Cloning {} into {}...", playlist.name, name));
    let result = engine::clone_playlist(&client, &playlist.id, &name).await;
    finish_spinner(pb);

    match result {
        Ok(()) => success!("Playlist {} cloned as {}.", playlist.name, name),
        Err(e) => error!("Failed to clone playlist {}: {}", playlist.name, e),
    }
}
