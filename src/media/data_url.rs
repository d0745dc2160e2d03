// SPDX-License-Identifier: MPL-2.0
//! Data-URL encoding for image payloads.
//!
//! A data URL embeds the content type and a base64 body in one string
//! (`data:image/png;base64,iVBOR...`), which is what a web view consumes
//! directly as an image source.

use crate::domain::error::PayloadError;
use crate::domain::media::{ImageMime, ImagePayload};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Errors produced while parsing a data URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The text did not split into exactly one header and one body.
    #[error("invalid data URL: expected 2 comma-separated segments, found {0}")]
    SegmentCount(usize),

    /// The header has no `:<mime>;` section.
    #[error("invalid MIME type in data URL")]
    MissingMime,

    /// The header names a type outside the PNG/JPEG/WebP allowlist.
    #[error("unsupported MIME type in data URL: {0}")]
    UnsupportedMime(String),

    /// The body is not valid base64.
    #[error("invalid base64 body: {0}")]
    Base64(String),

    /// The body decoded to zero bytes.
    #[error("data URL carries an empty image")]
    EmptyBody,
}

/// Encodes a payload as `data:<mime>;base64,<body>`.
#[must_use]
pub fn encode(payload: &ImagePayload) -> String {
    format!(
        "data:{};base64,{}",
        payload.mime().as_str(),
        BASE64.encode(payload.bytes())
    )
}

/// Parses a data URL back into a payload.
///
/// # Errors
///
/// Returns a [`FormatError`] if the text does not have exactly two
/// comma-separated segments, if no MIME type can be read from the header,
/// or if the body does not decode to a non-empty image of an accepted type.
pub fn decode(text: &str) -> Result<ImagePayload, FormatError> {
    let segments: Vec<&str> = text.split(',').collect();
    let [header, body] = segments.as_slice() else {
        return Err(FormatError::SegmentCount(segments.len()));
    };

    let mime_str = extract_mime(header).ok_or(FormatError::MissingMime)?;
    let mime = ImageMime::parse(mime_str)
        .ok_or_else(|| FormatError::UnsupportedMime(mime_str.to_string()))?;

    let bytes = BASE64
        .decode(body.trim())
        .map_err(|e| FormatError::Base64(e.to_string()))?;

    ImagePayload::new(mime, bytes).map_err(|err| match err {
        PayloadError::Empty => FormatError::EmptyBody,
        PayloadError::UnsupportedMime(mime) => FormatError::UnsupportedMime(mime),
    })
}

/// Reads the declared MIME type without decoding the body.
#[must_use]
pub fn declared_mime(text: &str) -> Option<&str> {
    let (header, _) = text.split_once(',')?;
    extract_mime(header)
}

/// Returns the text between the first `:` and the next `;` of the header.
fn extract_mime(header: &str) -> Option<&str> {
    let (_, rest) = header.split_once(':')?;
    let (mime, _) = rest.split_once(';')?;
    Some(mime)
}
