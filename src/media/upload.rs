// SPDX-License-Identifier: MPL-2.0
//! Upload sources for the first image of a session.

use crate::domain::media::{ImageMime, ImagePayload};
use crate::error::{Error, Result};
use crate::media::data_url;
use std::path::PathBuf;

/// A single file picked by the user.
#[derive(Debug, Clone)]
pub enum UploadFile {
    /// A local file; the type is taken from its extension.
    Path(PathBuf),
    /// Raw bytes plus the type string reported by the picker.
    Bytes { mime: String, bytes: Vec<u8> },
    /// A data URL as produced by a browser file reader.
    DataUrl(String),
}

impl UploadFile {
    /// Returns the accepted image type of this file, or `None` if the file
    /// is not a PNG, JPEG or WebP image.
    ///
    /// Nothing is read from disk; this only inspects the declared type.
    #[must_use]
    pub fn accepted_mime(&self) -> Option<ImageMime> {
        match self {
            UploadFile::Path(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ImageMime::from_extension),
            UploadFile::Bytes { mime, .. } => ImageMime::parse(mime),
            UploadFile::DataUrl(text) => data_url::declared_mime(text).and_then(ImageMime::parse),
        }
    }

    /// Reads the file into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upload`] if the type is not accepted, the file cannot
    /// be read, or its content is empty or malformed.
    pub async fn read(self) -> Result<ImagePayload> {
        let mime = self
            .accepted_mime()
            .ok_or_else(|| Error::Upload("unsupported file type".to_string()))?;

        match self {
            UploadFile::Path(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|e| Error::Upload(format!("{}: {e}", path.display())))?;
                ImagePayload::new(mime, bytes).map_err(|e| Error::Upload(e.to_string()))
            }
            UploadFile::Bytes { bytes, .. } => {
                ImagePayload::new(mime, bytes).map_err(|e| Error::Upload(e.to_string()))
            }
            UploadFile::DataUrl(text) => {
                data_url::decode(&text).map_err(|e| Error::Upload(e.to_string()))
            }
        }
    }
}
