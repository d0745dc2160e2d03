// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use crate::domain::error::PayloadError;
use std::fmt;
use std::sync::Arc;

/// Image content types accepted by the editor.
///
/// Anything outside this allowlist is rejected before it can reach the
/// edit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMime {
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `image/webp`
    WebP,
}

impl ImageMime {
    /// Returns the canonical MIME string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::WebP => "image/webp",
        }
    }

    /// Parses a MIME string, ignoring surrounding whitespace and case.
    ///
    /// Returns `None` for types outside the allowlist.
    #[must_use]
    pub fn parse(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageMime::Png),
            "image/jpeg" => Some(ImageMime::Jpeg),
            "image/webp" => Some(ImageMime::WebP),
            _ => None,
        }
    }

    /// Detects the type from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageMime::Png),
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            "webp" => Some(ImageMime::WebP),
            _ => None,
        }
    }

    /// Returns the preferred file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageMime::Png => "png",
            ImageMime::Jpeg => "jpg",
            ImageMime::WebP => "webp",
        }
    }

    /// Returns all accepted types.
    #[must_use]
    pub fn all() -> &'static [ImageMime] {
        &[ImageMime::Png, ImageMime::Jpeg, ImageMime::WebP]
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded image bytes tagged with their content type.
///
/// The bytes are the file contents (PNG/JPEG/WebP stream), not decoded
/// pixels. They are shared behind an `Arc` so history entries and in-flight
/// requests can hold the same image without copying it.
///
/// # Example
///
/// ```
/// use prompt_lens::domain::media::{ImageMime, ImagePayload};
///
/// let payload = ImagePayload::new(ImageMime::Png, vec![0x89, b'P', b'N', b'G']).unwrap();
/// assert_eq!(payload.mime(), ImageMime::Png);
/// assert_eq!(payload.len(), 4);
///
/// assert!(ImagePayload::new(ImageMime::Png, Vec::new()).is_err());
/// ```
#[derive(Clone)]
pub struct ImagePayload {
    mime: ImageMime,
    bytes: Arc<[u8]>,
}

impl ImagePayload {
    /// Creates a payload, rejecting empty byte buffers.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Empty`] if `bytes` is empty.
    pub fn new(mime: ImageMime, bytes: impl Into<Arc<[u8]>>) -> Result<Self, PayloadError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(Self { mime, bytes })
    }

    /// Creates a payload from a raw MIME string.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::UnsupportedMime`] for types outside the
    /// allowlist and [`PayloadError::Empty`] for empty buffers.
    pub fn from_mime_str(mime: &str, bytes: impl Into<Arc<[u8]>>) -> Result<Self, PayloadError> {
        let mime = ImageMime::parse(mime)
            .ok_or_else(|| PayloadError::UnsupportedMime(mime.trim().to_string()))?;
        Self::new(mime, bytes)
    }

    /// Returns the content type.
    #[must_use]
    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the byte length (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PartialEq for ImagePayload {
    fn eq(&self, other: &Self) -> bool {
        self.mime == other.mime
            && (Arc::ptr_eq(&self.bytes, &other.bytes) || self.bytes == other.bytes)
    }
}

impl Eq for ImagePayload {}

impl fmt::Debug for ImagePayload {
    // Image bodies can be megabytes; keep debug output to the shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
