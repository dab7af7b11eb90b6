use std::time::{Duration, Instant};

use crate::{
    config, error,
    server::{AppState, start_api_server},
    spotify::{OAuthSettings, SpotifyApi},
    success, warning,
};

/// Runs the OAuth 2.0 PKCE login against a temporary playlist server.
///
/// 1. Starts the server, whose `/login` route generates the code verifier
///    and challenge and whose `/callback` route exchanges the code
/// 2. Opens `/login` in the default browser
/// 3. Waits up to a minute for the callback to store a token
///
/// The callback persists the token, so a later `serve` picks it up.
pub async fn auth() {
    let oauth = match OAuthSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot start authentication. Err: {}", e),
    };

    let state = AppState::new(SpotifyApi::from_env(), oauth, None, config::search_limit());

    let server_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            error!("Failed to start callback server. Err: {}", e);
        }
    });

    let login_url = format!("http://{}/login", config::server_addr());
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }

    if wait_for_login(&state).await {
        success!("Authentication successful!");
    } else {
        error!("Authentication failed or timed out.");
    }
}

/// Polls the shared state once a second until a token shows up or a minute
/// has passed.
async fn wait_for_login(state: &AppState) -> bool {
    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if state.is_logged_in().await {
            return true;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    false
}
