use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::sync::Mutex;

use crate::{
    Res, api, config,
    management::TokenManager,
    spotify::{OAuthSettings, SpotifyApi},
};

/// Shared state of the playlist server.
///
/// The server is a single-user tool: one token, one current playlist.
#[derive(Clone)]
pub struct AppState {
    pub spotify: SpotifyApi,
    pub oauth: Arc<OAuthSettings>,
    pub tokens: Arc<Mutex<Option<TokenManager>>>,
    pub pkce_verifier: Arc<Mutex<Option<String>>>,
    pub current_playlist: Arc<Mutex<Option<String>>>,
    pub search_limit: u32,
}

impl AppState {
    pub fn new(
        spotify: SpotifyApi,
        oauth: OAuthSettings,
        tokens: Option<TokenManager>,
        search_limit: u32,
    ) -> Self {
        Self {
            spotify,
            oauth: Arc::new(oauth),
            tokens: Arc::new(Mutex::new(tokens)),
            pkce_verifier: Arc::new(Mutex::new(None)),
            current_playlist: Arc::new(Mutex::new(None)),
            search_limit,
        }
    }

    /// Returns a usable access token, or `None` when nobody has logged in.
    pub async fn access_token(&self) -> Option<String> {
        let mut tokens = self.tokens.lock().await;
        match tokens.as_mut() {
            Some(manager) => Some(manager.get_valid_token(&self.oauth).await),
            None => None,
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.tokens.lock().await.is_some()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/create_playlist", post(api::create_playlist))
        .route("/search", get(api::search))
        .route("/add_to_playlist", post(api::add_to_playlist))
        .route("/finish", get(api::finish))
        .layer(Extension(state))
}

/// Binds to `SERVER_ADDRESS` and serves until the process ends.
pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
