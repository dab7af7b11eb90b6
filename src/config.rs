//! Configuration management for the playlist builder.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Both halves of the application read from here: the
//! terminal front end needs the playlist server URL, the server needs its bind
//! address and the Spotify API settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

const APP_DIR: &str = "playlist-builder";

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_SCOPE: &str = "playlist-modify-public user-library-read";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables from
/// `playlist-builder/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/playlist-builder/.env`
/// - macOS: `~/Library/Application Support/playlist-builder/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-builder/.env`
///
/// A missing file is not an error, every setting has a default or is only
/// required by the commands that use it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists but
/// cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Returns the application directory inside the platform's local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the address the playlist server binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `127.0.0.1:5000`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the base URL the terminal front end sends its requests to.
///
/// Reads `PLAYLIST_SERVER_URL` and falls back to `http://<SERVER_ADDRESS>` so a
/// local `serve` and the front end agree without extra configuration.
pub fn server_url() -> String {
    var_or("PLAYLIST_SERVER_URL", &format!("http://{}", server_addr()))
}

/// Returns the Spotify API client ID used for login and token refresh.
///
/// # Errors
///
/// Fails if `SPOTIFY_API_AUTH_CLIENT_ID` is not set or blank.
pub fn spotify_client_id() -> Res<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set".into())
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application
/// settings. Defaults to the `/callback` route of the local server.
pub fn spotify_redirect_uri() -> String {
    var_or(
        "SPOTIFY_API_REDIRECT_URI",
        &format!("http://{}/callback", server_addr()),
    )
}

/// Returns the Spotify API scope permissions requested at login.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns how many tracks a search asks Spotify for.
///
/// Reads `SEARCH_LIMIT`; values that don't parse fall back to 10.
pub fn search_limit() -> u32 {
    env::var("SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}
