use axum::{extract::Extension, response::Json};
use serde_json::{Value, json};

use crate::server::AppState;

/// Liveness probe, also reporting whether a Spotify session is held.
pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "logged_in": state.is_logged_in().await,
        "active_playlist": state.current_playlist.lock().await.is_some(),
    }))
}
