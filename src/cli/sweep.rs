use crate::{
    cli::{connect, finish_spinner, spinner},
    config::Config,
    engine, error, success,
};

pub async fn sweep(config: &Config) {
    let client = connect(config).await;

    let pb = spinner("Removing Africa from your playlists and library...".to_string());
    let result = engine::sweep(&client).await;
    finish_spinner(pb);

    match result {
        Ok(()) => success!("Your playlists and library are free of Africa."),
        Err(e) => error!("Sweep failed: {}", e),
    }
}
