#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use playlist_builder::{
    client::Backend,
    controller::{CreateButton, Field, Notice, Results, View},
    error::ClientError,
    types::{
        AddTrackRequest, AddTrackResponse, ArtistRef, CreatePlaylistForm, FinishResponse,
        PlaylistSummary, Track,
    },
};
use tokio::sync::Notify;

pub fn track(name: &str, artists: &[&str], uri: &str) -> Track {
    Track {
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| ArtistRef {
                name: a.to_string(),
            })
            .collect(),
        uri: uri.to_string(),
    }
}

pub fn playlist(name: &str) -> PlaylistSummary {
    PlaylistSummary {
        id: "pl1".to_string(),
        name: name.to_string(),
        url: None,
    }
}

/// Requests seen by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(CreatePlaylistForm),
    Search(String),
    Add(String),
    Finish,
}

pub struct MockBackend {
    pub calls: Mutex<Vec<Call>>,
    pub create: Result<PlaylistSummary, ClientError>,
    pub search: Result<Vec<Track>, ClientError>,
    pub add: Result<AddTrackResponse, ClientError>,
    pub finish: Result<FinishResponse, ClientError>,
    /// When set, creation waits for a notification before answering.
    pub create_gate: Option<Arc<Notify>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            create: Ok(playlist("Road Trip")),
            search: Ok(Vec::new()),
            add: Ok(AddTrackResponse {
                success: true,
                error: None,
            }),
            finish: Ok(FinishResponse {
                success: true,
                message: None,
            }),
            create_gate: None,
        }
    }
}

impl MockBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn create_playlist(
        &self,
        form: &CreatePlaylistForm,
    ) -> Result<PlaylistSummary, ClientError> {
        self.record(Call::Create(form.clone()));
        if let Some(gate) = &self.create_gate {
            gate.notified().await;
        }
        self.create.clone()
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, ClientError> {
        self.record(Call::Search(query.to_string()));
        self.search.clone()
    }

    async fn add_to_playlist(
        &self,
        request: &AddTrackRequest,
    ) -> Result<AddTrackResponse, ClientError> {
        self.record(Call::Add(request.track_uri.clone()));
        self.add.clone()
    }

    async fn finish(&self) -> Result<FinishResponse, ClientError> {
        self.record(Call::Finish);
        self.finish.clone()
    }
}

/// View that remembers everything the controller did to it.
#[derive(Default)]
pub struct RecordingView {
    fields: Mutex<HashMap<Field, String>>,
    buttons: Mutex<Vec<CreateButton>>,
    results: Mutex<Vec<Results>>,
    notices: Mutex<Vec<Notice>>,
    questions: Mutex<Vec<String>>,
    pub confirm_answer: bool,
}

impl RecordingView {
    pub fn with(fields: &[(Field, &str)]) -> Self {
        let view = Self::default();
        for (field, value) in fields {
            view.set(*field, value);
        }
        view
    }

    pub fn answering(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn set(&self, field: Field, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert(field, value.to_string());
    }

    pub fn buttons(&self) -> Vec<CreateButton> {
        self.buttons.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<Results> {
        self.results.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn last_button(&self) -> Option<CreateButton> {
        self.buttons().last().copied()
    }
}

#[async_trait]
impl View for RecordingView {
    fn value(&self, field: Field) -> String {
        self.fields
            .lock()
            .unwrap()
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn clear(&self, field: Field) {
        self.fields.lock().unwrap().remove(&field);
    }

    fn set_create_button(&self, button: CreateButton) {
        self.buttons.lock().unwrap().push(button);
    }

    fn render_results(&self, results: Results) {
        self.results.lock().unwrap().push(results);
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    async fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.confirm_answer
    }
}
