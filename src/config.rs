//! Configuration management for sortify.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. Instead of process-wide globals, the values
//! are collected into a [`Config`] that is handed to the Spotify client and
//! the credential loader explicitly.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, applied by the CLI)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Base URL of the Spotify Web API used when `SPOTIFY_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `sortify/.env` below the platform-specific local data directory:
/// - Linux: `~/.local/share/sortify/.env`
/// - macOS: `~/Library/Application Support/sortify/.env`
/// - Windows: `%LOCALAPPDATA%/sortify/.env`
///
/// A missing `.env` file is not an error, all settings can come from the
/// process environment as well.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or if the
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the application directory below the local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sortify");
    path
}

/// Runtime configuration for talking to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Explicit bearer token. When `None` the token cache is used.
    pub access_token: Option<String>,
}

impl Config {
    /// Builds the configuration from `SPOTIFY_API_URL` and
    /// `SPOTIFY_ACCESS_TOKEN`. Empty values count as unset.
    pub fn from_env() -> Self {
        let api_url = env::var("SPOTIFY_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let access_token = env::var("SPOTIFY_ACCESS_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Overrides the access token, e.g. from the `--access-token` flag.
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        if let Some(token) = access_token.filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(token);
        }
        self
    }
}
