//! Client side of the playlist server contract.
//!
//! [`Backend`] describes the four endpoints the interaction controller needs.
//! [`HttpBackend`] implements it with reqwest against a running playlist server.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::ClientError,
    types::{
        AddTrackRequest, AddTrackResponse, CreatePlaylistForm, CreatePlaylistResponse,
        FinishResponse, PlaylistSummary, SearchResponse, Track,
    },
};

/// The endpoints consumed by the interaction controller.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /create_playlist` with a form-encoded body.
    ///
    /// A non-OK status becomes [`ClientError::Server`] carrying the server's
    /// `error` message when the body has one.
    async fn create_playlist(&self, form: &CreatePlaylistForm)
    -> Result<PlaylistSummary, ClientError>;

    /// `GET /search?q=<query>`, returning the tracks in response order.
    async fn search(&self, query: &str) -> Result<Vec<Track>, ClientError>;

    /// `POST /add_to_playlist` with a JSON body.
    ///
    /// The body is returned whatever the status, callers decide on `success`.
    async fn add_to_playlist(&self, request: &AddTrackRequest)
    -> Result<AddTrackResponse, ClientError>;

    /// `GET /finish`.
    async fn finish(&self) -> Result<FinishResponse, ClientError>;
}

/// [`Backend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend for the server at `base_url`.
    ///
    /// Trailing slashes are dropped so endpoint paths can be appended as is.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Transport(format!(
                "Server URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let http = Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn create_playlist(
        &self,
        form: &CreatePlaylistForm,
    ) -> Result<PlaylistSummary, ClientError> {
        let url = self.url("/create_playlist");
        debug!(url = %url, name = %form.playlist_name, "Creating playlist");

        let response = self.http.post(&url).form(form).send().await?;
        let status = response.status();
        let body: CreatePlaylistResponse = decode(response).await?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: body.error,
            });
        }

        body.playlist
            .ok_or_else(|| ClientError::Parse("response is missing the created playlist".into()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, ClientError> {
        let url = self.url(&format!("/search?q={}", urlencoding::encode(query)));
        debug!(url = %url, "Searching tracks");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<SearchResponse>(&bytes) {
            Ok(body) => Ok(body.tracks.items),
            Err(e) if !status.is_success() => Err(ClientError::Server {
                status: status.as_u16(),
                message: serde_json::from_slice::<serde_json::Value>(&bytes)
                    .ok()
                    .and_then(|v| v["error"].as_str().map(str::to_string))
                    .or_else(|| Some(e.to_string())),
            }),
            Err(e) => Err(ClientError::Parse(e.to_string())),
        }
    }

    async fn add_to_playlist(
        &self,
        request: &AddTrackRequest,
    ) -> Result<AddTrackResponse, ClientError> {
        let url = self.url("/add_to_playlist");
        debug!(url = %url, track_uri = %request.track_uri, "Adding track");

        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }

    async fn finish(&self) -> Result<FinishResponse, ClientError> {
        let url = self.url("/finish");
        debug!(url = %url, "Finishing playlist session");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}
