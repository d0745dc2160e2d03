// SPDX-License-Identifier: MPL-2.0
//! JSON shapes of the `generateContent` endpoint and how responses map onto
//! [`ModelError`].
//!
//! Interpretation is kept free of I/O so it can be tested on canned bodies.

use crate::application::port::ai::{ModelError, DEFAULT_REFUSAL_REASON};
use crate::domain::media::ImagePayload;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Finish reason of a candidate that completed normally.
const FINISH_STOP: &str = "STOP";

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn image(image: &ImagePayload) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime().as_str().to_string(),
                data: BASE64.encode(image.bytes()),
            }),
        }
    }
}

impl GenerateContentRequest {
    /// Image first, then the instruction; asks for image and text back.
    pub fn edit(image: &ImagePayload, prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::image(image), Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            }),
        }
    }

    /// Instruction first, then the image.
    pub fn suggest(image: &ImagePayload, instruction: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(instruction), Part::image(image)],
            }],
            generation_config: None,
        }
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or(&[])
    }

    /// All text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// First inline image wins. Without one, the first non-empty text part is
/// the refusal reason.
///
/// # Errors
///
/// Returns [`ModelError::Refused`] when no image part is present, or
/// [`ModelError::Communication`] when the image data is not valid base64.
pub fn interpret_edit_response(response: &GenerateContentResponse) -> Result<Vec<u8>, ModelError> {
    let parts = response.first_parts();

    if let Some(inline) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        return BASE64
            .decode(inline.data.trim())
            .map_err(|e| ModelError::Communication(format!("invalid image data: {e}")));
    }

    let reason = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.trim().is_empty())
        .unwrap_or(DEFAULT_REFUSAL_REASON);
    Err(ModelError::Refused(reason.to_string()))
}

/// Trimmed text wins. Empty text is a policy block when the candidate stopped
/// for any reason other than `STOP` or the prompt itself was blocked.
///
/// # Errors
///
/// Returns [`ModelError::Blocked`] or [`ModelError::EmptySuggestion`].
pub fn interpret_suggestion_response(
    response: &GenerateContentResponse,
) -> Result<String, ModelError> {
    let text = response.text();
    let text = text.trim();
    if !text.is_empty() {
        return Ok(text.to_string());
    }

    let finish_reason = response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
        .filter(|reason| *reason != FINISH_STOP);
    let block_reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref());

    match finish_reason.or(block_reason) {
        Some(reason) => Err(ModelError::Blocked(reason.to_string())),
        None => Err(ModelError::EmptySuggestion),
    }
}
