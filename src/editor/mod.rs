// SPDX-License-Identifier: MPL-2.0
//! Prompt-driven edit session.
//!
//! [`EditSession`] owns the edit history, the view-time adjustments, the busy
//! flag and the last error. Model calls are split in three steps so the
//! session is never borrowed across a network round trip:
//!
//! 1. `begin_*` checks the guards, enters Busy and returns a [`Job`]
//! 2. [`Job::run`] does the async work
//! 3. [`EditSession::complete`] applies the [`JobOutcome`], or drops it if the
//!    session started over in the meantime
//!
//! The `upload`, `edit`, `submit_prompt` and `surprise_me` methods chain the
//! three steps for callers that can hold the session for the whole call.

pub mod adjustment;
pub mod history;
pub mod jobs;
pub mod presets;

#[cfg(test)]
mod tests;

pub use adjustment::{AdjustmentState, RenderDirectives};
pub use history::{EditHistory, HistoryEntry};
pub use jobs::{Job, JobKind, JobOutcome};

use crate::application::port::ai::ImageModel;
use crate::domain::media::ImagePayload;
use crate::media::{data_url, export, ExportedImage, UploadFile};
use jobs::Ticket;
use std::sync::{Arc, Weak};

/// Message shown when an upload cannot be read.
pub const UPLOAD_FAILED_MESSAGE: &str = "Could not load the image. Please try again.";

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image loaded.
    Empty,
    /// An image is loaded and no request is running.
    Ready,
    /// A request is running; edits are ignored until it finishes.
    Busy,
}

/// Everything the user sees.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: EditHistory,
    adjustments: AdjustmentState,
    error: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    #[must_use]
    pub fn adjustments(&self) -> &AdjustmentState {
        &self.adjustments
    }

    /// Last error, if the most recent request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Single-user edit session driving an [`ImageModel`].
#[derive(Debug)]
pub struct EditSession<M> {
    model: Arc<M>,
    state: SessionState,
    /// Bumped when a request starts and when the session starts over.
    generation: u64,
    /// Ticket of the running job; dead once the job and its outcome are gone.
    in_flight: Option<Weak<Ticket>>,
}

impl<M: ImageModel> EditSession<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_shared_model(Arc::new(model))
    }

    #[must_use]
    pub fn with_shared_model(model: Arc<M>) -> Self {
        Self {
            model,
            state: SessionState::default(),
            generation: 0,
            in_flight: None,
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_busy() {
            Phase::Busy
        } else if self.state.history.is_empty() {
            Phase::Empty
        } else {
            Phase::Ready
        }
    }

    /// Returns true while a started job, or its unapplied outcome, is alive.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|ticket| ticket.strong_count() > 0)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.state.history
    }

    #[must_use]
    pub fn adjustments(&self) -> &AdjustmentState {
        &self.state.adjustments
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    /// Image under the history cursor.
    #[must_use]
    pub fn current(&self) -> Option<&ImagePayload> {
        self.state.history.current().map(HistoryEntry::payload)
    }

    /// Current image as a data URL for a web view.
    #[must_use]
    pub fn current_data_url(&self) -> Option<String> {
        self.current().map(data_url::encode)
    }

    #[must_use]
    pub fn render_directives(&self) -> RenderDirectives {
        self.state.adjustments.directives()
    }

    // ---------------------------------------------------------------------
    // Request transitions
    // ---------------------------------------------------------------------

    /// Starts reading the first image of a session.
    ///
    /// Returns `None` unless the session is [`Phase::Empty`], or when the
    /// file is not a PNG, JPEG or WebP image.
    #[must_use]
    pub fn begin_upload(&mut self, file: UploadFile) -> Option<Job<M>> {
        self.release_abandoned();
        if self.phase() != Phase::Empty {
            log::debug!("Upload ignored: session is {:?}", self.phase());
            return None;
        }
        if file.accepted_mime().is_none() {
            log::debug!("Upload ignored: unsupported file type");
            return None;
        }
        let ticket = self.enter_busy();
        Some(Job::upload(Arc::clone(&self.model), ticket, file))
    }

    /// Starts editing the current image with `prompt`.
    ///
    /// Returns `None` while Busy or when no image is loaded.
    #[must_use]
    pub fn begin_edit(&mut self, prompt: &str) -> Option<Job<M>> {
        let source = self.edit_source("Edit")?;
        let ticket = self.enter_busy();
        Some(Job::edit(
            Arc::clone(&self.model),
            ticket,
            source,
            prompt.to_string(),
        ))
    }

    /// Starts a style suggestion followed by an edit with it.
    ///
    /// Returns `None` while Busy or when no image is loaded.
    #[must_use]
    pub fn begin_surprise(&mut self) -> Option<Job<M>> {
        let source = self.edit_source("Surprise")?;
        let ticket = self.enter_busy();
        Some(Job::surprise(Arc::clone(&self.model), ticket, source))
    }

    /// Applies the outcome of a finished job.
    ///
    /// Outcomes from a job started before the latest [`Self::new_image`] are
    /// discarded without touching state.
    pub fn complete(&mut self, outcome: JobOutcome) {
        if outcome.generation != self.generation {
            log::warn!(
                "Discarding stale {:?} result (generation {} != {})",
                outcome.kind,
                outcome.generation,
                self.generation
            );
            return;
        }

        self.in_flight = None;
        match (outcome.kind, outcome.result) {
            (JobKind::Upload, Ok(payload)) => {
                log::info!("Loaded {} image ({} bytes)", payload.mime(), payload.len());
                self.state.history.reset(payload);
                self.state.adjustments.reset();
            }
            (JobKind::Upload, Err(err)) => {
                log::error!("Upload failed: {err}");
                self.state.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
            (kind, Ok(payload)) => {
                log::info!("{kind:?} applied ({} bytes)", payload.len());
                self.change_history(|history| history.push(payload));
            }
            (kind, Err(err)) => {
                log::error!("{kind:?} failed: {err}");
                self.state.error = Some(err.user_message());
            }
        }
    }

    /// Reads `file` and seeds the history with it.
    pub async fn upload(&mut self, file: UploadFile) {
        if let Some(job) = self.begin_upload(file) {
            self.run_job(job).await;
        }
    }

    /// Edits the current image with `prompt`.
    pub async fn edit(&mut self, prompt: &str) {
        if let Some(job) = self.begin_edit(prompt) {
            self.run_job(job).await;
        }
    }

    /// Edits with a custom prompt. Blank prompts are ignored.
    pub async fn submit_prompt(&mut self, text: &str) {
        let prompt = text.trim();
        if prompt.is_empty() {
            log::debug!("Empty prompt ignored");
            return;
        }
        self.edit(prompt).await;
    }

    /// Asks the model for a style and applies it.
    pub async fn surprise_me(&mut self) {
        if let Some(job) = self.begin_surprise() {
            self.run_job(job).await;
        }
    }

    /// Flattens the current image with its adjustments into a PNG.
    ///
    /// Clears the previous error; failures are surfaced as the session error.
    pub async fn export(&mut self) -> Option<ExportedImage> {
        let payload = self.current()?.clone();
        self.state.error = None;
        let adjustments = self.state.adjustments;
        match export::flatten(payload, adjustments).await {
            Ok(exported) => {
                log::info!(
                    "Flattened {}x{} export as {}",
                    exported.width,
                    exported.height,
                    exported.file_name
                );
                Some(exported)
            }
            Err(err) => {
                log::error!("Export failed: {err}");
                self.state.error = Some(err.user_message());
                None
            }
        }
    }

    // ---------------------------------------------------------------------
    // Local transitions
    // ---------------------------------------------------------------------

    pub fn undo(&mut self) {
        self.change_history(EditHistory::undo);
    }

    pub fn redo(&mut self) {
        self.change_history(EditHistory::redo);
    }

    /// Pushes the original upload as the newest version.
    ///
    /// Ignored while the original is shown or a request is running.
    pub fn reset_to_original(&mut self) {
        self.release_abandoned();
        if self.is_busy() || !self.state.history.can_undo() {
            log::debug!("Reset to original ignored");
            return;
        }
        self.state.error = None;
        self.change_history(EditHistory::reset_to_original);
    }

    /// Drops the session and returns to [`Phase::Empty`].
    ///
    /// Results of requests still in flight will be discarded.
    pub fn new_image(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.state = SessionState::default();
        log::debug!("Session cleared (generation {})", self.generation);
    }

    pub fn set_brightness(&mut self, percent: i32) {
        self.state.adjustments.set_brightness(percent);
    }

    pub fn set_contrast(&mut self, percent: i32) {
        self.state.adjustments.set_contrast(percent);
    }

    pub fn rotate(&mut self, delta: i32) {
        self.state.adjustments.rotate(delta);
    }

    pub fn rotate_left(&mut self) {
        self.rotate(-90);
    }

    pub fn rotate_right(&mut self) {
        self.rotate(90);
    }

    pub fn reset_adjustments(&mut self) {
        self.state.adjustments.reset();
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn edit_source(&mut self, action: &str) -> Option<ImagePayload> {
        self.release_abandoned();
        if self.is_busy() {
            log::debug!("{action} ignored: request in flight");
            return None;
        }
        let source = self.current().cloned();
        if source.is_none() {
            log::debug!("{action} ignored: no image loaded");
        }
        source
    }

    fn enter_busy(&mut self) -> (u64, Arc<Ticket>) {
        self.state.error = None;
        self.generation += 1;
        let ticket = Arc::new(Ticket);
        self.in_flight = Some(Arc::downgrade(&ticket));
        (self.generation, ticket)
    }

    /// Forgets a job that was dropped, or panicked, before completing.
    fn release_abandoned(&mut self) {
        if self.in_flight.is_some() && !self.is_busy() {
            log::warn!(
                "Request (generation {}) ended without completing",
                self.generation
            );
            self.in_flight = None;
        }
    }

    /// Runs `change` and resets the adjustments if the shown image changed.
    fn change_history(&mut self, change: impl FnOnce(&mut EditHistory)) {
        let before = self.current().cloned();
        change(&mut self.state.history);
        if self.current() != before.as_ref() {
            self.state.adjustments.reset();
        }
    }

    async fn run_job(&mut self, job: Job<M>) {
        let outcome = job.run().await;
        self.complete(outcome);
    }
}
