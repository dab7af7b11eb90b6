use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, Redirect},
};
use tracing::warn;

use crate::{management::TokenManager, server::AppState, spotify::auth, utils};

/// Starts the PKCE flow: remembers a fresh verifier and sends the browser to
/// Spotify with the matching challenge.
pub async fn login(Extension(state): Extension<AppState>) -> Redirect {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    *state.pkce_verifier.lock().await = Some(code_verifier);

    Redirect::to(&state.oauth.authorize_url(&code_challenge))
}

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Authentication failed: missing authorization code.</h4>");
    };

    // A verifier is good for one exchange only.
    let Some(verifier) = state.pkce_verifier.lock().await.take() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    match auth::exchange_code_pkce(&state.oauth, code, &verifier).await {
        Ok(token) => {
            let manager = TokenManager::new(token);
            if let Err(e) = manager.persist().await {
                warn!(error = %e, "Failed to save token to cache");
            }
            *state.tokens.lock().await = Some(manager);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warn!(error = %e, "Token exchange failed");
            Html("<h4>Login failed.</h4>")
        }
    }
}
