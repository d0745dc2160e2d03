// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons, image fixtures and a scripted model.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::ai::{ImageModel, ModelError};
use crate::domain::media::{ImageMime, ImagePayload};
use image_rs::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::Mutex;

pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const RED: [u8; 4] = [255, 0, 0, 255];

/// Encodes a solid-color PNG.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(color)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

/// Decodes any supported image and returns its top-left pixel.
pub fn first_pixel(bytes: &[u8]) -> [u8; 4] {
    image_rs::load_from_memory(bytes)
        .expect("decode")
        .to_rgba8()
        .get_pixel(0, 0)
        .0
}

/// One recorded `edit_image` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCall {
    pub mime: ImageMime,
    pub bytes: Vec<u8>,
    pub prompt: String,
}

/// In-memory model that replays queued answers and records its calls.
///
/// An exhausted queue answers with a communication error. With `hang` set,
/// every call stays pending forever.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    edits: Mutex<VecDeque<Result<Vec<u8>, ModelError>>>,
    suggestions: Mutex<VecDeque<Result<String, ModelError>>>,
    edit_calls: Mutex<Vec<EditCall>>,
    suggest_calls: Mutex<usize>,
    pub hang: bool,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_edit(self, answer: Result<Vec<u8>, ModelError>) -> Self {
        self.edits.lock().expect("lock").push_back(answer);
        self
    }

    #[must_use]
    pub fn with_suggestion(self, answer: Result<String, ModelError>) -> Self {
        self.suggestions.lock().expect("lock").push_back(answer);
        self
    }

    pub fn edit_calls(&self) -> Vec<EditCall> {
        self.edit_calls.lock().expect("lock").clone()
    }

    pub fn suggest_calls(&self) -> usize {
        *self.suggest_calls.lock().expect("lock")
    }
}

impl ImageModel for ScriptedModel {
    async fn edit_image(&self, image: &ImagePayload, prompt: &str) -> Result<Vec<u8>, ModelError> {
        self.edit_calls.lock().expect("lock").push(EditCall {
            mime: image.mime(),
            bytes: image.bytes().to_vec(),
            prompt: prompt.to_string(),
        });
        if self.hang {
            std::future::pending::<()>().await;
        }
        let next = self.edits.lock().expect("lock").pop_front();
        next.unwrap_or_else(|| Err(ModelError::Communication("no scripted edit".to_string())))
    }

    async fn suggest_style(&self, _image: &ImagePayload) -> Result<String, ModelError> {
        *self.suggest_calls.lock().expect("lock") += 1;
        if self.hang {
            std::future::pending::<()>().await;
        }
        let next = self.suggestions.lock().expect("lock").pop_front();
        next.unwrap_or_else(|| Err(ModelError::Communication("no scripted suggestion".to_string())))
    }
}
