use tabled::Table;

use crate::{
    cli::{connect, finish_spinner, spinner},
    config::Config,
    engine, error,
    types::PlaylistTableRow,
    warning,
};

pub async fn playlists(config: &Config, search: Option<String>) {
    let client = connect(config).await;

    let pb = spinner("Fetching playlists...".to_string());
    let result = engine::user_playlists(&client).await;
    finish_spinner(pb);

    let mut playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    if let Some(search) = search {
        let search_term = search.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&search_term));
    }

    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            visibility: if p.is_public() { "public" } else { "private" }.to_string(),
            owner: p.owner.display_name.clone().unwrap_or(p.owner.id.clone()),
            name: p.name,
            id: p.id,
        })
        .collect();

    println!("{}", Table::new(rows));
}
