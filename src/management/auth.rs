use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::warn;

use crate::{
    config,
    spotify::{OAuthSettings, auth},
    types::Token,
};

/// Seconds before the real expiry at which a token counts as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    /// Manages `token`, caching it at `<data dir>/cache/token.json`.
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::token_path())
    }

    pub fn with_path(token: Token, path: impl Into<PathBuf>) -> Self {
        TokenManager {
            token,
            path: path.into(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: impl Into<PathBuf>) -> Result<Self, String> {
        let path = path.into();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = &self.path;
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

    /// Returns an access token, refreshing and persisting it first if needed.
    ///
    /// A failed refresh hands out the stale token; Spotify then rejects the
    /// call and the caller reports that.
    pub async fn get_valid_token(&mut self, settings: &OAuthSettings) -> String {
        if self.is_expired() {
            match auth::refresh_token(settings, &self.token.refresh_token).await {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warn!(error = %e, "Failed to persist refreshed token");
                    }
                }
                Err(e) => warn!(error = %e, "Failed to refresh access token"),
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
