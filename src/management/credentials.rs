use std::path::PathBuf;

use chrono::Utc;

use crate::{config, types::Token, warning};

/// Bearer token the Spotify client authenticates with.
///
/// Comes either from an explicitly configured access token or from the token
/// cache on disk. Obtaining or refreshing tokens is not done here.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: Token,
}

impl Credentials {
    pub fn new(token: Token) -> Self {
        Credentials { token }
    }

    /// Wraps a raw access token of unknown lifetime.
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Credentials {
            token: Token {
                access_token: access_token.into(),
                refresh_token: String::new(),
                scope: String::new(),
                expires_in: 0,
                obtained_at: Utc::now().timestamp() as u64,
            },
        }
    }

    /// Uses the configured access token, falling back to the token cache.
    pub async fn load(config: &config::Config) -> Result<Self, String> {
        if let Some(access_token) = &config.access_token {
            return Ok(Self::from_access_token(access_token.clone()));
        }

        let credentials = Self::load_cached().await.map_err(|e| {
            format!(
                "No access token configured and no token cache at {}: {}",
                Self::token_path().display(),
                e
            )
        })?;

        if credentials.is_expired() {
            warning!("Cached access token has expired, requests will likely be rejected.");
        }

        Ok(credentials)
    }

    pub async fn load_cached() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    /// A token without a known lifetime never counts as expired.
    pub fn is_expired(&self) -> bool {
        if self.token.expires_in == 0 {
            return false;
        }
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at.saturating_add(self.token.expires_in)
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}
