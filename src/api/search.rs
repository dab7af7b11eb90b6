use std::collections::HashMap;

use axum::{Extension, Json, extract::Query, http::StatusCode};

use super::{ApiResponse, error_response, not_logged_in};
use crate::server::AppState;

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> ApiResponse {
    let Some(token) = state.access_token().await else {
        return not_logged_in();
    };

    let query = params.get("q").map(String::as_str).unwrap_or_default();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing search query");
    }

    match state
        .spotify
        .search_tracks(&token, query, state.search_limit)
        .await
    {
        Ok(results) => (StatusCode::OK, Json(results)),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
