// SPDX-License-Identifier: MPL-2.0
//! Flatten/export of the current image.
//!
//! View-time adjustments only exist as rendering directives until the user
//! downloads the image. This module bakes them into a standalone PNG: the
//! brightness/contrast filter is applied to every pixel and the rotation
//! becomes a real pixel rotation on a canvas sized to the rotated bounds.

use crate::domain::media::{ImageMime, ImagePayload};
use crate::editor::AdjustmentState;
use crate::error::{Error, Result};
use crate::media::image_transform;
use chrono::{DateTime, Utc};
use image_rs::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Prefix of every exported file name.
pub const EXPORT_FILE_PREFIX: &str = "edited-image-";

/// A flattened PNG ready to be delivered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// Suggested file name (`edited-image-<timestamp>.png`).
    pub file_name: String,
    /// Encoded PNG stream.
    pub png_bytes: Vec<u8>,
    /// Width of the flattened raster.
    pub width: u32,
    /// Height of the flattened raster.
    pub height: u32,
}

impl ExportedImage {
    /// Writes the PNG into `dir` under [`Self::file_name`], creating the
    /// directory if needed. Returns the full path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png_bytes)?;
        log::info!("Exported {} ({} bytes)", path.display(), self.png_bytes.len());
        Ok(path)
    }

    /// Writes the PNG into the platform download directory.
    ///
    /// Falls back to `fallback_dir` when the platform has no download
    /// directory, and to the working directory when neither is available.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save_to_downloads(&self, fallback_dir: Option<&Path>) -> Result<PathBuf> {
        self.save_to_downloads_with(dirs::download_dir, fallback_dir)
    }

    fn save_to_downloads_with(
        &self,
        download_dir: impl FnOnce() -> Option<PathBuf>,
        fallback_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        let dir = download_dir()
            .or_else(|| fallback_dir.map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        self.save_to_dir(&dir)
    }
}

/// Builds the download name for an export made at `now`.
///
/// Format: `edited-image-YYYY-MM-DDTHH-MM-SS.png` (UTC, colons replaced
/// by dashes).
#[must_use]
pub fn file_name_at(now: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.png", now.format("%Y-%m-%dT%H-%M-%S"))
}

fn image_format(mime: ImageMime) -> ImageFormat {
    match mime {
        ImageMime::Png => ImageFormat::Png,
        ImageMime::Jpeg => ImageFormat::Jpeg,
        ImageMime::WebP => ImageFormat::WebP,
    }
}

/// Decodes `payload`, falling back to content sniffing when the bytes do not
/// match the declared type.
fn decode(payload: &ImagePayload) -> Result<DynamicImage> {
    image_rs::load_from_memory_with_format(payload.bytes(), image_format(payload.mime()))
        .or_else(|_| image_rs::load_from_memory(payload.bytes()))
        .map_err(|e| Error::Export(format!("Image could not be loaded for download: {e}")))
}

/// Flattens `payload` with `adjustments` into a PNG named for `now`.
///
/// # Errors
///
/// Returns [`Error::Export`] if the source cannot be decoded or the PNG
/// cannot be encoded.
pub fn flatten_at(
    payload: &ImagePayload,
    adjustments: &AdjustmentState,
    now: DateTime<Utc>,
) -> Result<ExportedImage> {
    let source = decode(payload)?;
    let filtered =
        image_transform::apply_filters(&source, adjustments.brightness, adjustments.contrast);
    let flattened = image_transform::rotate(&filtered, adjustments.rotation);

    let mut png_bytes = Vec::new();
    flattened
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| Error::Export(format!("Failed to encode PNG: {e}")))?;

    Ok(ExportedImage {
        file_name: file_name_at(now),
        png_bytes,
        width: flattened.width(),
        height: flattened.height(),
    })
}

/// Flattens on a blocking worker so decode and resampling never stall the
/// caller's executor.
///
/// # Errors
///
/// Returns [`Error::Export`] if decoding or encoding fails, or if the
/// worker is torn down before finishing.
pub async fn flatten(payload: ImagePayload, adjustments: AdjustmentState) -> Result<ExportedImage> {
    tokio::task::spawn_blocking(move || flatten_at(&payload, &adjustments, Utc::now()))
        .await
        .map_err(|e| Error::Export(format!("Export worker failed: {e}")))?
}
