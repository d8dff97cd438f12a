use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sortify::{
    cli::{self, PlaylistRef},
    config, engine, error, utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Access token to use instead of SPOTIFY_ACCESS_TOKEN or the token cache
    #[clap(long, global = true)]
    access_token: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sort a playlist by audio features
    Sort(SortOptions),

    /// Remove tracks released outside of a date range
    Purge(PurgeOptions),

    /// Clone a playlist
    Clone(CloneOptions),

    /// Remove Africa by Toto from all your playlists and your library
    Sweep,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Store an access token in the token cache
    Token(TokenOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PlaylistTarget {
    /// Spotify id of the playlist
    #[clap(long)]
    pub playlist_id: Option<String>,

    /// Name of one of your playlists
    #[clap(long)]
    pub playlist_name: Option<String>,
}

impl PlaylistTarget {
    fn into_ref(self) -> PlaylistRef {
        match PlaylistRef::from_options(self.playlist_id, self.playlist_name) {
            Some(target) => target,
            None => error!("Either --playlist-id or --playlist-name is required"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    #[clap(flatten)]
    pub target: PlaylistTarget,

    /// Sort rule as FEATURE[:asc|:desc]; can be repeated, first rule is the primary key
    #[clap(
        long = "rule",
        required = true,
        value_parser = utils::parse_sort_rule,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub rules: Vec<engine::SortRule>,
}

#[derive(Parser, Debug, Clone)]
pub struct PurgeOptions {
    #[clap(flatten)]
    pub target: PlaylistTarget,

    /// First release date to keep (YYYY-MM-DD)
    #[clap(long)]
    pub start: String,

    /// Last release date to keep (YYYY-MM-DD)
    #[clap(long)]
    pub end: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CloneOptions {
    #[clap(flatten)]
    pub target: PlaylistTarget,

    /// Name of the new playlist, defaults to "Clone of <name>"
    #[clap(long)]
    pub new_name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    /// Access token to store
    pub access_token: String,

    /// Lifetime of the token in seconds
    #[clap(long, default_value_t = 3600)]
    pub expires_in: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let config = config::Config::from_env().with_access_token(cli.access_token);

    match cli.command {
        Command::Sort(opt) => cli::sort(&config, opt.target.into_ref(), opt.rules).await,
        Command::Purge(opt) => {
            cli::purge(&config, opt.target.into_ref(), opt.start, opt.end).await
        }
        Command::Clone(opt) => cli::clone(&config, opt.target.into_ref(), opt.new_name).await,
        Command::Sweep => cli::sweep(&config).await,
        Command::Playlists(opt) => cli::playlists(&config, opt.search).await,
        Command::Token(opt) => cli::token(opt.access_token, opt.expires_in).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
