use axum::{
    Extension, Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde::Deserialize;
use serde_json::json;

use super::{ApiResponse, error_response, not_logged_in, spotify_error};
use crate::{
    server::AppState,
    types::{CreatePlaylistRequest, PlaylistSummary},
};

#[derive(Debug, Default, Deserialize)]
pub struct CreatePlaylistPayload {
    playlist_name: Option<String>,
    playlist_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddTrackPayload {
    track_uri: Option<String>,
}

/// Takes a form-encoded body; a body that does not parse counts as a missing name.
pub async fn create_playlist(
    Extension(state): Extension<AppState>,
    request: Request,
) -> ApiResponse {
    let Some(token) = state.access_token().await else {
        return not_logged_in();
    };

    let payload = Form::<CreatePlaylistPayload>::from_request(request, &())
        .await
        .map(|Form(p)| p)
        .unwrap_or_default();

    let name = payload.playlist_name.as_deref().unwrap_or_default().trim();
    if name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Playlist name is required");
    }
    let description = payload
        .playlist_description
        .as_deref()
        .unwrap_or_default()
        .trim();

    let user = match state.spotify.current_user(&token).await {
        Ok(user) => user,
        Err(e) => return spotify_error(e),
    };

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: true,
    };

    let playlist = match state
        .spotify
        .create_playlist(&token, &user.id, &request)
        .await
    {
        Ok(playlist) => playlist,
        Err(e) => return spotify_error(e),
    };

    *state.current_playlist.lock().await = Some(playlist.id.clone());

    let summary = PlaylistSummary {
        id: playlist.id,
        name: playlist.name,
        url: playlist.external_urls.spotify,
    };
    (
        StatusCode::OK,
        Json(json!({ "success": true, "playlist": summary })),
    )
}

/// Accepts `{"track_uri": ...}` as JSON, or the same field form-encoded.
pub async fn add_to_playlist(
    Extension(state): Extension<AppState>,
    request: Request,
) -> ApiResponse {
    let Some(token) = state.access_token().await else {
        return not_logged_in();
    };

    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let payload = if is_json {
        Json::<AddTrackPayload>::from_request(request, &())
            .await
            .map(|Json(p)| p)
            .unwrap_or_default()
    } else {
        Form::<AddTrackPayload>::from_request(request, &())
            .await
            .map(|Form(p)| p)
            .unwrap_or_default()
    };

    let Some(track_uri) = payload.track_uri.filter(|uri| !uri.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing track_uri");
    };

    let Some(playlist_id) = state.current_playlist.lock().await.clone() else {
        return error_response(StatusCode::BAD_REQUEST, "No active playlist");
    };

    match state
        .spotify
        .add_tracks(&token, &playlist_id, vec![track_uri])
        .await
    {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// Forgets the current playlist; the login stays.
pub async fn finish(Extension(state): Extension<AppState>) -> ApiResponse {
    state.current_playlist.lock().await.take();
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Playlist session cleared" })),
    )
}
