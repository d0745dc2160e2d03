// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter for the [`ImageModel`] port.
//!
//! Both operations call the `generateContent` REST endpoint. Edits go to the
//! image model and ask for image and text modalities; style suggestions go to
//! the text model with [`STYLE_INSTRUCTION`].

pub mod wire;

use crate::application::port::ai::{ImageModel, ModelError};
use crate::config::Config;
use crate::domain::media::ImagePayload;
use crate::editor::presets::STYLE_INSTRUCTION;
use crate::error::{Error, Result};
use std::time::Duration;
use wire::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";
const USER_AGENT: &str = concat!("PromptLens/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    edit_model: String,
    prompt_model: String,
}

impl GeminiClient {
    /// Builds a client from settings, resolving the API key from the
    /// environment first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no API key is available or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.resolve_api_key()?,
            config.api_base_url(),
            config.edit_model(),
            config.prompt_model(),
            config.request_timeout(),
        )
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        edit_model: &str,
        prompt_model: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            edit_model: edit_model.to_string(),
            prompt_model: prompt_model.to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, ModelError> {
        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| communication(model, &e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| communication(model, &e.to_string()))?;

        if !status.is_success() {
            return Err(communication(model, &format!("HTTP status: {status}: {body}")));
        }

        serde_json::from_str(&body).map_err(|e| communication(model, &format!("bad JSON: {e}")))
    }
}

fn communication(model: &str, detail: &str) -> ModelError {
    log::error!("Gemini API error ({model}): {detail}");
    ModelError::Communication(detail.to_string())
}

impl ImageModel for GeminiClient {
    async fn edit_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> std::result::Result<Vec<u8>, ModelError> {
        let request = GenerateContentRequest::edit(image, prompt);
        let response = self.generate(&self.edit_model, &request).await?;
        wire::interpret_edit_response(&response)
    }

    async fn suggest_style(&self, image: &ImagePayload) -> std::result::Result<String, ModelError> {
        let request = GenerateContentRequest::suggest(image, STYLE_INSTRUCTION);
        let response = self.generate(&self.prompt_model, &request).await?;
        wire::interpret_suggestion_response(&response)
    }
}
