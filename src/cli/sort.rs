use crate::{
    cli::{PlaylistRef, connect, finish_spinner, resolve_playlist, spinner},
    config::Config,
    engine::{self, SortRule},
    error, info, success,
};

pub async fn sort(config: &Config, target: PlaylistRef, rules: Vec<SortRule>) {
    if let Err(e) = engine::validate_rules(&rules) {
        error!("{}", e);
    }

    let client = connect(config).await;
    let playlist = resolve_playlist(&client, &target).await;

    let order = rules
        .iter()
        .map(|r| {
            format!(
                "{} {}",
                r.feature_name,
                if r.descending { "desc" } else { "asc" }
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    info!("Sorting playlist {} by {}", playlist.name, order);

    let pb = spinner(format!("Rewriting playlist {}...", playlist.name));
    let result = engine::sort_playlist(&client, &playlist.id, &rules).await;
    finish_spinner(pb);

    match result {
        Ok(()) => success!("Playlist {} sorted.", playlist.name),
        Err(e) => error!("Failed to sort playlist {}: {}", playlist.name, e),
    }
}
