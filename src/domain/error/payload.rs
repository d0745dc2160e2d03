// SPDX-License-Identifier: MPL-2.0
//! Validation errors for image payloads.

use std::fmt;

/// Reasons an [`ImagePayload`](crate::domain::media::ImagePayload) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The byte buffer was empty.
    Empty,
    /// The content type is not PNG, JPEG or WebP.
    UnsupportedMime(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Empty => write!(f, "image payload is empty"),
            PayloadError::UnsupportedMime(mime) => {
                write!(f, "unsupported image type: {mime}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}
