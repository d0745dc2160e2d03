// SPDX-License-Identifier: MPL-2.0
//! Background work started by the edit session.
//!
//! A [`Job`] owns everything it needs (a handle on the model and copies of
//! its inputs) so it can be awaited or spawned without borrowing the
//! session. Its [`JobOutcome`] is handed back to
//! [`EditSession::complete`](super::EditSession::complete), which applies it
//! only if the session has not moved on in the meantime.

use crate::application::port::ai::{ImageModel, ModelError, DEFAULT_REFUSAL_REASON};
use crate::domain::media::ImagePayload;
use crate::error::Result;
use crate::media::UploadFile;
use std::sync::Arc;

/// Which transition started a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Reading the first image of a session.
    Upload,
    /// Editing the current image with a prompt.
    Edit,
    /// Asking for a style suggestion, then editing with it.
    Surprise,
}

#[derive(Debug)]
enum Request {
    Upload(UploadFile),
    Edit { source: ImagePayload, prompt: String },
    Surprise { source: ImagePayload },
}

/// Keeps the session Busy while a job or its outcome is alive.
#[derive(Debug)]
pub(super) struct Ticket;

/// A unit of async work bound to the session generation that started it.
///
/// Dropping the job, or the future returned by [`Job::run`], releases the
/// session from Busy.
#[derive(Debug)]
#[must_use = "a job does nothing unless run and completed"]
pub struct Job<M> {
    model: Arc<M>,
    generation: u64,
    ticket: Arc<Ticket>,
    request: Request,
}

/// Result of a finished [`Job`].
#[derive(Debug, Clone)]
#[must_use = "pass the outcome to EditSession::complete"]
pub struct JobOutcome {
    pub(super) generation: u64,
    pub(super) kind: JobKind,
    pub(super) result: Result<ImagePayload>,
    _ticket: Arc<Ticket>,
}

impl JobOutcome {
    #[must_use]
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn result(&self) -> &Result<ImagePayload> {
        &self.result
    }
}

impl<M> Job<M> {
    pub(super) fn upload(
        model: Arc<M>,
        (generation, ticket): (u64, Arc<Ticket>),
        file: UploadFile,
    ) -> Self {
        Self {
            model,
            generation,
            ticket,
            request: Request::Upload(file),
        }
    }

    pub(super) fn edit(
        model: Arc<M>,
        (generation, ticket): (u64, Arc<Ticket>),
        source: ImagePayload,
        prompt: String,
    ) -> Self {
        Self {
            model,
            generation,
            ticket,
            request: Request::Edit { source, prompt },
        }
    }

    pub(super) fn surprise(
        model: Arc<M>,
        (generation, ticket): (u64, Arc<Ticket>),
        source: ImagePayload,
    ) -> Self {
        Self {
            model,
            generation,
            ticket,
            request: Request::Surprise { source },
        }
    }

    #[must_use]
    pub fn kind(&self) -> JobKind {
        match self.request {
            Request::Upload(_) => JobKind::Upload,
            Request::Edit { .. } => JobKind::Edit,
            Request::Surprise { .. } => JobKind::Surprise,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<M: ImageModel> Job<M> {
    /// Performs the work. Never touches session state.
    pub async fn run(self) -> JobOutcome {
        let kind = self.kind();
        let result = match self.request {
            Request::Upload(file) => file.read().await,
            Request::Edit { source, prompt } => run_edit(self.model.as_ref(), &source, &prompt).await,
            Request::Surprise { source } => run_surprise(self.model.as_ref(), &source).await,
        };
        JobOutcome {
            generation: self.generation,
            kind,
            result,
            _ticket: self.ticket,
        }
    }
}

/// Edits `source` and tags the returned bytes with the source type.
async fn run_edit<M: ImageModel>(
    model: &M,
    source: &ImagePayload,
    prompt: &str,
) -> Result<ImagePayload> {
    let bytes = model.edit_image(source, prompt).await?;
    if bytes.is_empty() {
        return Err(ModelError::Refused(DEFAULT_REFUSAL_REASON.to_string()).into());
    }
    Ok(ImagePayload::new(source.mime(), bytes)?)
}

/// The edit step only runs once a non-empty suggestion came back.
async fn run_surprise<M: ImageModel>(model: &M, source: &ImagePayload) -> Result<ImagePayload> {
    let suggestion = model.suggest_style(source).await?;
    let suggestion = suggestion.trim();
    if suggestion.is_empty() {
        return Err(ModelError::EmptySuggestion.into());
    }
    log::info!("Style suggestion: {suggestion}");
    run_edit(model, source, suggestion).await
}
