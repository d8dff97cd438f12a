use chrono::Utc;

use crate::{error, management::Credentials, success, types::Token};

/// Writes an access token to the token cache used when no token is configured.
pub async fn token(access_token: String, expires_in: u64) {
    let credentials = Credentials::new(Token {
        access_token,
        refresh_token: String::new(),
        scope: String::new(),
        expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    });

    if let Err(e) = credentials.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Access token stored.");
}
