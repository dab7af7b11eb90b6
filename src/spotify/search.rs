use serde_json::Value;

use super::SpotifyApi;

impl SpotifyApi {
    /// Searches Spotify's catalog for tracks matching `query`.
    ///
    /// The raw response is returned untouched, the playlist server hands it to
    /// its clients as is and they only read `tracks.items`.
    ///
    /// # Arguments
    ///
    /// * `token` - Valid access token
    /// * `query` - Free text query, encoded here
    /// * `limit` - Number of tracks to return (1-50)
    pub async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Value, reqwest::Error> {
        let limit = limit.to_string();
        self.http
            .get(self.endpoint("/search"))
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}
