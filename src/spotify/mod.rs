//! # Spotify Integration Module
//!
//! This module is the playlist server's gateway to the Spotify Web API. It covers
//! the handful of operations the server needs and nothing more:
//!
//! ```text
//! Playlist server handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE, token refresh)
//!     ├── Search (tracks)
//!     └── Playlist Operations (current user, create, add items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user, needed to own the created playlist
//! - `GET /search` - Track search, passed through to the front end verbatim
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! Web API calls return `reqwest::Error`; non-2xx responses are turned into
//! errors with `error_for_status`, so callers can tell a Spotify rejection
//! (`err.status()` is set) from a network failure. Calls are not retried.

pub mod auth;
pub mod playlist;
pub mod search;

use reqwest::Client;

pub use auth::OAuthSettings;

/// Handle on the Spotify Web API.
///
/// Cheap to clone, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    http: Client,
    api_url: String,
}

impl SpotifyApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Uses `SPOTIFY_API_URL` from the configuration.
    pub fn from_env() -> Self {
        Self::new(crate::config::spotify_apiurl())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
