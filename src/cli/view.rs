use std::{
    collections::HashMap,
    io::Write,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::input::Input;
use crate::{
    controller::{CreateButton, Field, Notice, NoticeKind, Results, TrackEntry, View},
    info, success, warning,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// [`View`] on a terminal: notices are printed, the search placeholder is a
/// spinner and confirmations are read from [`Input`].
pub struct TerminalView {
    fields: Mutex<HashMap<Field, String>>,
    results: Mutex<Vec<TrackEntry>>,
    spinner: Mutex<Option<ProgressBar>>,
    input: Option<Arc<Input>>,
    assume_yes: bool,
}

impl TerminalView {
    /// Without `input`, every confirmation is declined unless `assume_yes`.
    pub fn new(input: Option<Arc<Input>>) -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            results: Mutex::new(Vec::new()),
            spinner: Mutex::new(None),
            input,
            assume_yes: false,
        }
    }

    pub fn with_field(self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        lock(&self.fields).insert(field, value.into());
    }

    /// URIs of the rendered entries, in ordinal order.
    pub fn uris(&self) -> Vec<String> {
        lock(&self.results).iter().map(|e| e.uri.clone()).collect()
    }

    fn stop_spinner(&self) {
        if let Some(pb) = lock(&self.spinner).take() {
            pb.finish_and_clear();
        }
    }

    fn start_spinner(&self, message: &'static str) {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        if let Some(previous) = lock(&self.spinner).replace(pb) {
            previous.finish_and_clear();
        }
    }
}

#[async_trait]
impl View for TerminalView {
    fn value(&self, field: Field) -> String {
        lock(&self.fields).get(&field).cloned().unwrap_or_default()
    }

    fn clear(&self, field: Field) {
        lock(&self.fields).remove(&field);
    }

    fn set_create_button(&self, button: CreateButton) {
        if !button.enabled {
            info!("{}", button.label);
        }
    }

    fn render_results(&self, results: Results) {
        match results {
            Results::Searching => {
                lock(&self.results).clear();
                self.start_spinner("Searching...");
            }
            Results::Tracks(entries) => {
                self.stop_spinner();
                if entries.is_empty() {
                    info!("No tracks found.");
                }
                for entry in &entries {
                    println!(
                        "  {}  {}",
                        entry,
                        format!("[Add to Playlist: add {}]", entry.ordinal).dimmed()
                    );
                }
                *lock(&self.results) = entries;
            }
            Results::Error(message) => {
                self.stop_spinner();
                lock(&self.results).clear();
                warning!("{}", message);
            }
            Results::Empty => {
                self.stop_spinner();
                lock(&self.results).clear();
            }
        }
    }

    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => success!("{}", notice.message),
            NoticeKind::Failure => warning!("{}", notice.message),
        }
    }

    async fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let Some(input) = &self.input else {
            return false;
        };

        print!("{} [y/N] ", question);
        let _ = std::io::stdout().flush();

        match input.next_line().await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}
