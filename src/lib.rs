//! Spotify Playlist Transformation Library
//!
//! This library reorders, filters, clones and sweeps playlists of an
//! authenticated Spotify user. The transformation logic lives in [`engine`]
//! and talks to Spotify only through the [`engine::RemoteSource`] trait, which
//! [`spotify::SpotifyClient`] implements over the Spotify Web API.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `engine` - Pagination, batching, sorting and filtering of playlists
//! - `management` - Credential loading and token cache handling
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sortify::{config, engine, management::Credentials, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> sortify::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env();
//!     let credentials = Credentials::load(&config).await?;
//!     let client = SpotifyClient::new(&config, credentials);
//!     engine::sweep(&client).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every call against the remote collection source returns this type. The
/// boxed error keeps the engine independent of the transport in use while
/// maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use sortify::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching tracks of playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    $crate::utils::print_line(&format!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*)));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Sorted {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    $crate::utils::print_line(&format!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*)));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// command-line layer uses it; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load credentials: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    $crate::utils::print_line(&format!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*)));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a single playlist that could not be
/// cleaned during a sweep.
///
/// # Example
///
/// ```
/// warning!("Skipping track {} without audio features", id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    $crate::utils::print_line(&format!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*)));
  })
}
