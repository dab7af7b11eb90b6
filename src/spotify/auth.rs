use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{Res, config, types::Token};

/// Everything the OAuth 2.0 PKCE flow needs to know about the Spotify app.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
}

impl OAuthSettings {
    /// Reads the settings from the configuration.
    ///
    /// # Errors
    ///
    /// Fails if no client ID is configured.
    pub fn from_env() -> Res<Self> {
        Ok(Self {
            client_id: config::spotify_client_id()?,
            redirect_uri: config::spotify_redirect_uri(),
            scope: config::spotify_scope(),
            auth_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
        })
    }

    /// Builds the URL the user is sent to for granting access.
    ///
    /// # Arguments
    ///
    /// * `code_challenge` - SHA256 challenge derived from the code verifier
    pub fn authorize_url(&self, code_challenge: &str) -> String {
        format!(
            "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
            auth_url = self.auth_url,
            client_id = urlencoding::encode(&self.client_id),
            redirect_uri = urlencoding::encode(&self.redirect_uri),
            code_challenge = code_challenge,
            scope = urlencoding::encode(&self.scope),
        )
    }
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the OAuth 2.0 PKCE flow by exchanging the authorization code
/// received on `/callback` for an access token. The code verifier proves that
/// the same client that initiated the flow is completing it.
///
/// # Errors
///
/// Fails on network errors, on a non-2xx answer (invalid or expired code,
/// verifier mismatch) and when the answer lacks the access or refresh token.
pub async fn exchange_code_pkce(
    settings: &OAuthSettings,
    code: &str,
    verifier: &str,
) -> Result<Token, String> {
    let res = Client::new()
        .post(&settings.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", settings.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", settings.redirect_uri.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or("Token response is missing access_token")?;
    let refresh_token = json["refresh_token"]
        .as_str()
        .ok_or("Token response is missing refresh_token")?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Refreshes an expired access token using a refresh token.
///
/// Spotify may or may not rotate the refresh token; when the answer carries
/// none, the current one is kept.
pub async fn refresh_token(settings: &OAuthSettings, refresh_token: &str) -> Result<Token, String> {
    let res = Client::new()
        .post(&settings.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", settings.client_id.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or("Refresh response is missing access_token")?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or(refresh_token)
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
