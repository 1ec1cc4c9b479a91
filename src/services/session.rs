// Session State
// Owns the transient input/label/result state for one window and the
// single-flight discipline around the remote call.

use std::sync::Mutex;

use tracing::info;

use crate::models::{
    ClassifyRequest, FilterRequest, Preset, ResultSet, ResultSummary, SessionMode,
    SessionSnapshot,
};
use crate::services::gateway::ServiceClient;
use crate::services::interpreter;
use crate::services::label_set::{LabelSet, LabelSetError};
use crate::services::presets;
use crate::services::request_builder;
use crate::services::text_normalizer;

/// Returned when a submission races an outstanding call.
pub const BUSY_MESSAGE: &str = "Devam eden bir istek var, lütfen bekleyin.";

const LOCK_MESSAGE: &str = "Oturum durumu okunamadı";

/// Mode-appropriate request, built and validated before any network activity.
#[derive(Debug)]
enum PendingRequest {
    Classify(ClassifyRequest),
    Filter(FilterRequest),
}

/// Per-window state. Results and error are mutually exclusive: a new
/// success clears the error, a new error clears the results. A new request
/// fully replaces the prior result set; nothing is merged.
pub struct Session {
    mode: SessionMode,
    raw_input: String,
    labels: LabelSet,
    results: Option<ResultSet>,
    error: Option<String>,
    in_flight: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionMode::Classification)
    }
}

impl Session {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            raw_input: String::new(),
            labels: default_labels(mode),
            results: None,
            error: None,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Switching views starts from that view's initial state.
    pub fn switch_mode(&mut self, mode: SessionMode) {
        *self = Session::new(mode);
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.raw_input = raw.into();
    }

    /// Normalized text units for the current raw input; recomputed on
    /// every call so the count stays live while the user types.
    pub fn texts(&self) -> Vec<String> {
        text_normalizer::normalize(&self.raw_input)
    }

    pub fn text_count(&self) -> usize {
        text_normalizer::count_texts(&self.raw_input)
    }

    pub fn add_label(&mut self, label: &str) -> bool {
        self.labels.add(label)
    }

    pub fn remove_label(&mut self, index: usize) -> Result<String, LabelSetError> {
        self.labels.remove(index)
    }

    pub fn labels(&self) -> &[String] {
        self.labels.labels()
    }

    /// Seed input and labels from a preset; any prior outcome is dropped.
    pub fn load_preset(&mut self, preset: &Preset) {
        self.raw_input = preset.texts.join("\n");
        self.labels = LabelSet::from_labels(preset.categories.clone());
        self.clear_outcome();
    }

    /// Fill the input with the mode's example texts. Labels are untouched;
    /// open classification seeds through presets instead.
    pub fn load_examples(&mut self) {
        let examples = match self.mode {
            SessionMode::PersonalData => presets::kvkk_example_texts(),
            SessionMode::Filtering => presets::filter_example_texts(),
            SessionMode::Classification => return,
        };
        self.raw_input = examples.join("\n");
        self.clear_outcome();
    }

    /// Back to the mode's initial state. Never fails.
    pub fn reset(&mut self) {
        *self = Session::new(self.mode);
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// UI gate for the submit trigger: both lists non-empty, no call pending.
    pub fn can_submit(&self) -> bool {
        self.text_count() > 0 && !self.labels.is_empty() && !self.in_flight
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn positive_label(&self) -> Option<&'static str> {
        match self.mode {
            SessionMode::PersonalData => Some(presets::KVKK_POSITIVE_CATEGORY),
            _ => None,
        }
    }

    /// Derived fresh from the current result set on every call.
    pub fn summary(&self) -> Option<ResultSummary> {
        self.results
            .as_ref()
            .map(|set| interpreter::summarize(set, self.positive_label()))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            raw_input: self.raw_input.clone(),
            text_count: self.text_count() as i32,
            labels: self.labels.labels().to_vec(),
            results: self.results.clone(),
            summary: self.summary(),
            error: self.error.clone(),
            in_flight: self.in_flight,
            can_submit: self.can_submit(),
        }
    }

    fn clear_outcome(&mut self) {
        self.results = None;
        self.error = None;
    }

    pub fn apply_success(&mut self, set: ResultSet) {
        self.results = Some(set);
        self.error = None;
        self.in_flight = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.results = None;
        self.in_flight = false;
    }

    /// Build the mode-appropriate request and mark the call in flight.
    /// Refuses with no side effects when preconditions fail or a call is
    /// already outstanding; no network activity happens on refusal.
    fn begin_request(&mut self) -> Result<PendingRequest, String> {
        if self.in_flight {
            return Err(BUSY_MESSAGE.to_string());
        }
        let texts = self.texts();
        let pending = match self.mode {
            SessionMode::Classification | SessionMode::PersonalData => {
                request_builder::build_classify_request(&texts, &self.labels)
                    .map(PendingRequest::Classify)
            }
            SessionMode::Filtering => {
                request_builder::build_filter_request(&texts, &self.labels)
                    .map(PendingRequest::Filter)
            }
        }
        .map_err(|e| e.to_string())?;
        self.in_flight = true;
        Ok(pending)
    }
}

fn default_labels(mode: SessionMode) -> LabelSet {
    match mode {
        SessionMode::Classification => LabelSet::new(),
        SessionMode::PersonalData => LabelSet::from_labels(presets::kvkk_categories()),
        SessionMode::Filtering => LabelSet::from_labels(presets::default_filter_labels()),
    }
}

/// Run the mode-appropriate remote call for the current session contents.
///
/// The session lock is released across the await; the in-flight flag keeps
/// a second submission out in the meantime and is always cleared when the
/// call completes. Precondition refusals return `Err` without touching the
/// session; gateway failures land in the session error state and the
/// updated snapshot is returned.
pub async fn run_analysis(
    session: &Mutex<Session>,
    client: &ServiceClient,
) -> Result<SessionSnapshot, String> {
    let pending = {
        let mut guard = session.lock().map_err(|_| LOCK_MESSAGE.to_string())?;
        guard.begin_request()?
    };

    let outcome = match &pending {
        PendingRequest::Classify(request) => client
            .classify(request)
            .await
            .map(|response| ResultSet::CategoryAssignment {
                results: response.results,
            }),
        PendingRequest::Filter(request) => client
            .filter(request)
            .await
            .map(|response| ResultSet::FilterEvaluation {
                results: response.results,
            }),
    };

    let mut guard = session.lock().map_err(|_| LOCK_MESSAGE.to_string())?;
    match outcome {
        Ok(set) => {
            info!(count = set.len(), "analysis.completed");
            guard.apply_success(set);
        }
        Err(err) => {
            guard.apply_error(err.to_string());
        }
    }
    Ok(guard.snapshot())
}
