//! # API Module
//!
//! HTTP handlers of the playlist server. The server sits between the terminal
//! front end and the Spotify Web API and keeps the little session state the
//! front end relies on: who is logged in and which playlist is being built.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects to Spotify's authorization page with a PKCE challenge
//! - [`callback`] - Exchanges the authorization code for a token and stores it
//!
//! ### Playlist building
//!
//! - [`create_playlist`] - `POST /create_playlist`, form body
//! - [`search`] - `GET /search?q=`
//! - [`add_to_playlist`] - `POST /add_to_playlist`, JSON or form body
//! - [`finish`] - `GET /finish`, forgets the current playlist
//!
//! ### Monitoring
//!
//! - [`health`] - Status and version
//!
//! Playlist routes answer `401 {"error": "Not logged in"}` until a token is
//! available. Every error body has the shape `{"error": "<message>"}`.

mod callback;
mod health;
mod playlist;
mod search;

pub use callback::{callback, login};
pub use health::health;
pub use playlist::{add_to_playlist, create_playlist, finish};
pub use search::search;

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

pub type ApiResponse = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiResponse {
    (status, Json(json!({ "error": message.into() })))
}

fn not_logged_in() -> ApiResponse {
    error_response(StatusCode::UNAUTHORIZED, "Not logged in")
}

/// A rejection by Spotify is the client's problem, anything else is ours.
fn spotify_error(err: reqwest::Error) -> ApiResponse {
    if err.status().is_some() {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Spotify API error: {}", err),
        )
    } else {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
