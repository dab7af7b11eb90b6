use super::SpotifyApi;
use crate::types::{
    AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, CreatePlaylistRequest,
    CreatedPlaylist, SpotifyUser,
};

impl SpotifyApi {
    /// Returns the user the access token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<SpotifyUser, reqwest::Error> {
        self.http
            .get(self.endpoint("/me"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<SpotifyUser>()
            .await
    }

    /// Creates a playlist owned by `user_id`.
    ///
    /// # API Endpoint
    ///
    /// `POST /users/{user_id}/playlists` with `name`, `description` and `public`.
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatedPlaylist, reqwest::Error> {
        self.http
            .post(self.endpoint(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<CreatedPlaylist>()
            .await
    }

    /// Appends tracks to a playlist, in the given order.
    pub async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<AddTracksToPlaylistResponse, reqwest::Error> {
        self.http
            .post(self.endpoint(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .json(&AddTracksToPlaylistRequest { uris })
            .send()
            .await?
            .error_for_status()?
            .json::<AddTracksToPlaylistResponse>()
            .await
    }
}
