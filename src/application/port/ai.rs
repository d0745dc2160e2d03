// SPDX-License-Identifier: MPL-2.0
//! Generative image model port definition.
//!
//! This module defines the [`ImageModel`] trait for the two remote operations
//! the editor relies on: editing an image from a text instruction and
//! suggesting an artistic instruction for an image.
//!
//! # Design Notes
//!
//! - Payloads cross the port as domain [`ImagePayload`] values
//! - Futures are `Send` so jobs can run on a multi-threaded runtime
//! - Cancellation is not supported; callers discard stale results instead

use crate::domain::media::ImagePayload;
use std::future::Future;

/// Generic message shown when the model could not be reached.
pub const COMMUNICATION_MESSAGE: &str =
    "Failed to communicate with the AI model. Please check your connection or API key.";

/// Reason used when an edit response has neither an image nor text.
pub const DEFAULT_REFUSAL_REASON: &str =
    "The model did not return an image. It may have refused the request due to safety policies.";

// =============================================================================
// ModelError
// =============================================================================

/// Errors that can occur during a model round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The model answered but declined to produce an image.
    #[error("model refused the request: {0}")]
    Refused(String),

    /// The suggestion request was blocked for policy reasons.
    #[error("prompt generation blocked: {0}")]
    Blocked(String),

    /// The model returned no usable suggestion text.
    #[error("model returned an empty suggestion")]
    EmptySuggestion,

    /// Transport, authentication or protocol failure.
    #[error("model communication failed: {0}")]
    Communication(String),
}

impl ModelError {
    /// Message shown to the user when this error ends an edit.
    ///
    /// Refusals keep the model's own reason; communication details stay in
    /// the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ModelError::Refused(reason) => reason.clone(),
            ModelError::Blocked(reason) => {
                format!("Prompt generation was blocked for safety reasons: {reason}")
            }
            ModelError::EmptySuggestion => {
                "The AI could not generate a prompt for this image.".to_string()
            }
            ModelError::Communication(_) => COMMUNICATION_MESSAGE.to_string(),
        }
    }

    /// Returns `true` for policy blocks on suggestion requests.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, ModelError::Blocked(_))
    }
}

// =============================================================================
// ImageModel Trait
// =============================================================================

/// Port for the remote generative image model.
///
/// # Example
///
/// ```ignore
/// use prompt_lens::application::port::ai::{ImageModel, ModelError};
/// use prompt_lens::domain::media::ImagePayload;
///
/// async fn stylize(model: &impl ImageModel, image: &ImagePayload) -> Result<Vec<u8>, ModelError> {
///     let instruction = model.suggest_style(image).await?;
///     model.edit_image(image, &instruction).await
/// }
/// ```
pub trait ImageModel: Send + Sync {
    /// Sends `image` with a text `prompt` and returns the raw bytes of the
    /// edited image.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Refused`] when the model answers without an
    /// image, or [`ModelError::Communication`] when the call fails.
    fn edit_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<u8>, ModelError>> + Send;

    /// Asks the model for a short artistic instruction suited to `image`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Blocked`] for policy blocks,
    /// [`ModelError::EmptySuggestion`] when no text comes back, or
    /// [`ModelError::Communication`] when the call fails.
    fn suggest_style(
        &self,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}
