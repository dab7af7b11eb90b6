use crate::{
    config, error, info,
    management::TokenManager,
    server::{AppState, start_api_server},
    spotify::{OAuthSettings, SpotifyApi},
    success, warning,
};

pub async fn serve() {
    let oauth = match OAuthSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot start the playlist server. Err: {}", e),
    };

    let tokens = match TokenManager::load().await {
        Ok(manager) => {
            success!("Using cached Spotify token.");
            Some(manager)
        }
        Err(_) => {
            warning!(
                "Not logged in yet. Open http://{}/login or run playlist-builder auth.",
                config::server_addr()
            );
            None
        }
    };

    let state = AppState::new(SpotifyApi::from_env(), oauth, tokens, config::search_limit());

    info!("Playlist server listening on http://{}", config::server_addr());
    if let Err(e) = start_api_server(state).await {
        error!("Playlist server stopped. Err: {}", e);
    }
}
