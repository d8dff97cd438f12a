use crate::{
    cli::{PlaylistRef, connect, finish_spinner, resolve_playlist, spinner},
    config::Config,
    engine::{self, DateWindow},
    error, info, success,
};

pub async fn purge(config: &Config, target: PlaylistRef, start: String, end: String) {
    let window = match DateWindow::parse(&start, &end) {
        Ok(window) => window,
        Err(e) => error!("{}", e),
    };

    let client = connect(config).await;
    let playlist = resolve_playlist(&client, &target).await;

    info!(
        "Removing tracks released before {} or after {} from {}",
        window.start, window.end, playlist.name
    );

    let pb = spinner(format!("Purging playlist {}...", playlist.name));
    let result = engine::purge_playlist(&client, &playlist.id, &start, &end).await;
    finish_spinner(pb);

    match result {
        Ok(()) => success!("Playlist {} purged.", playlist.name),
        Err(e) => error!("Failed to purge playlist {}: {}", playlist.name, e),
    }
}
