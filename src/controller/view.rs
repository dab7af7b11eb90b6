use std::fmt;

use async_trait::async_trait;

use crate::types::Track;

/// Text inputs the controller reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PlaylistName,
    PlaylistDescription,
    SearchQuery,
}

/// Visible state of the create-playlist trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateButton {
    pub enabled: bool,
    pub label: &'static str,
}

impl CreateButton {
    pub const IDLE: CreateButton = CreateButton {
        enabled: true,
        label: "Create Playlist",
    };

    pub const CREATING: CreateButton = CreateButton {
        enabled: false,
        label: "Creating...",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A blocking, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// One rendered search result with its "Add to Playlist" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    /// 1-based position in the response.
    pub ordinal: usize,
    pub name: String,
    /// Artist names joined with `", "`.
    pub artists: String,
    /// Identifier the add control is bound to.
    pub uri: String,
}

impl TrackEntry {
    pub fn new(ordinal: usize, track: &Track) -> Self {
        Self {
            ordinal,
            name: track.name.clone(),
            artists: track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            uri: track.uri.clone(),
        }
    }
}

impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} by {}", self.ordinal, self.name, self.artists)
    }
}

/// Content of the search results region. Every render replaces the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    Empty,
    Searching,
    Tracks(Vec<TrackEntry>),
    Error(String),
}

/// The surface the controller drives.
///
/// Implementations are shared between concurrently running flows, so every
/// method takes `&self`.
#[async_trait]
pub trait View: Send + Sync {
    /// Current raw value of a field.
    fn value(&self, field: Field) -> String;

    fn clear(&self, field: Field);

    fn set_create_button(&self, button: CreateButton);

    fn render_results(&self, results: Results);

    fn notify(&self, notice: Notice);

    /// Asks a yes/no question and waits for the answer.
    async fn confirm(&self, question: &str) -> bool;
}
