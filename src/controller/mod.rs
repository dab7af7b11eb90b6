//! # Interaction Controller
//!
//! The controller binds the four user actions of the playlist builder to the
//! playlist server and reports every outcome back through a [`View`]:
//!
//! - [`Controller::create_playlist`] - validate the name, create the playlist
//! - [`Controller::search`] - search tracks and render them as numbered entries
//! - [`Controller::add_to_playlist`] - add one track by its URI
//! - [`Controller::finish`] - close the session after a confirmation
//!
//! Flows take `&self` and may run concurrently. Only playlist creation is
//! guarded: while one creation is in flight, further activations are ignored.
//! Searches and adds are never blocked, so duplicate adds reach the server.
//!
//! Every flow returns its outcome as well, which lets front ends derive exit
//! codes, but the user has already been told through the view by then.

mod view;

pub use view::{CreateButton, Field, Notice, NoticeKind, Results, TrackEntry, View};

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use crate::{
    client::Backend,
    error::{ClientError, FlowError},
    types::{AddTrackRequest, CreatePlaylistForm, PlaylistSummary},
};

pub const INVALID_NAME: &str = "Please enter a valid playlist name";
pub const CREATE_FAILED: &str = "Failed to create playlist";
pub const ADD_SUCCEEDED: &str = "Song added successfully!";
pub const ADD_FAILED: &str = "Failed to add song";
pub const FINISH_QUESTION: &str = "Playlist completed! 🎉\nReady to finish?";
pub const FINISHED: &str = "You're all set! You'll stay logged in to create more playlists.";

pub struct Controller<B, V> {
    backend: B,
    view: V,
    creating: AtomicBool,
}

/// Holds the creation flag and puts the trigger back on drop.
struct CreationGuard<'a, V: View> {
    flag: &'a AtomicBool,
    view: &'a V,
}

impl<'a, V: View> CreationGuard<'a, V> {
    fn acquire(flag: &'a AtomicBool, view: &'a V) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        view.set_create_button(CreateButton::CREATING);
        Some(Self { flag, view })
    }
}

impl<V: View> Drop for CreationGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_create_button(CreateButton::IDLE);
        self.flag.store(false, Ordering::Release);
    }
}

impl<B: Backend, V: View> Controller<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            creating: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether a playlist creation is currently in flight.
    pub fn is_creating(&self) -> bool {
        self.creating.load(Ordering::Acquire)
    }

    /// Creates a playlist from the name and description fields.
    ///
    /// Returns `Ok(None)` when another creation is still running, nothing is
    /// sent in that case.
    pub async fn create_playlist(&self) -> Result<Option<PlaylistSummary>, FlowError> {
        if self.is_creating() {
            return Ok(None);
        }

        let name = self.view.value(Field::PlaylistName).trim().to_string();
        let description = self
            .view
            .value(Field::PlaylistDescription)
            .trim()
            .to_string();

        if name.is_empty() {
            self.view.notify(Notice::failure(INVALID_NAME));
            return Err(FlowError::Validation(INVALID_NAME.to_string()));
        }

        let Some(_guard) = CreationGuard::acquire(&self.creating, &self.view) else {
            return Ok(None);
        };

        let form = CreatePlaylistForm {
            playlist_name: name,
            playlist_description: (!description.is_empty()).then_some(description),
        };

        match self.backend.create_playlist(&form).await {
            Ok(playlist) => {
                self.view.notify(Notice::success(format!(
                    "Successfully created playlist: {}",
                    playlist.name
                )));
                Ok(Some(playlist))
            }
            Err(ClientError::Server { message, .. }) => {
                let message = message.unwrap_or_else(|| CREATE_FAILED.to_string());
                self.view.notify(Notice::failure(message.clone()));
                Err(FlowError::Server(message))
            }
            Err(e) => {
                let message = e.to_string();
                self.view.notify(Notice::failure(message.clone()));
                Err(FlowError::Transport(message))
            }
        }
    }

    /// Searches for the query in the search field and renders the tracks.
    ///
    /// Returns the number of rendered entries, or `Ok(None)` for an empty
    /// query, which leaves the results region untouched.
    pub async fn search(&self) -> Result<Option<usize>, FlowError> {
        let query = self.view.value(Field::SearchQuery);
        if query.is_empty() {
            return Ok(None);
        }

        self.view.render_results(Results::Searching);

        match self.backend.search(&query).await {
            Ok(tracks) => {
                let entries: Vec<TrackEntry> = tracks
                    .iter()
                    .enumerate()
                    .map(|(index, track)| TrackEntry::new(index + 1, track))
                    .collect();
                let count = entries.len();
                self.view.render_results(Results::Tracks(entries));
                Ok(Some(count))
            }
            Err(e) => {
                let message = match e {
                    ClientError::Server {
                        message: Some(message),
                        ..
                    } => message,
                    other => other.to_string(),
                };
                self.view
                    .render_results(Results::Error(format!("Error: {}", message)));
                Err(FlowError::Transport(message))
            }
        }
    }

    /// Adds the track identified by `track_uri` to the current playlist.
    pub async fn add_to_playlist(&self, track_uri: &str) -> Result<(), FlowError> {
        let request = AddTrackRequest {
            track_uri: track_uri.to_string(),
        };

        match self.backend.add_to_playlist(&request).await {
            Ok(response) if response.success => {
                self.view.notify(Notice::success(ADD_SUCCEEDED));
                Ok(())
            }
            Ok(response) => {
                let message = response.error.unwrap_or_else(|| ADD_FAILED.to_string());
                self.view
                    .notify(Notice::failure(format!("Error: {}", message)));
                Err(FlowError::Server(message))
            }
            Err(e) => {
                self.view
                    .notify(Notice::failure(format!("{}: {}", ADD_FAILED, e)));
                Err(FlowError::Transport(e.to_string()))
            }
        }
    }

    /// Closes the playlist session after the user confirms.
    ///
    /// Returns whether the session was closed. A declined confirmation sends
    /// nothing, a response without `success` changes nothing.
    pub async fn finish(&self) -> Result<bool, FlowError> {
        if !self.view.confirm(FINISH_QUESTION).await {
            return Ok(false);
        }

        match self.backend.finish().await {
            Ok(response) if response.success => {
                self.view.clear(Field::PlaylistName);
                self.view.clear(Field::PlaylistDescription);
                self.view.render_results(Results::Empty);
                self.view.notify(Notice::success(FINISHED));
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(e) => {
                warn!(error = %e, "Finish request failed");
                Err(FlowError::Transport(e.to_string()))
            }
        }
    }
}
