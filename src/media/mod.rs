// SPDX-License-Identifier: MPL-2.0
//! Image handling outside the session state.
//!
//! This module converts payloads to and from data URLs, reads uploads, and
//! bakes view-time adjustments into exported PNG files.

pub mod data_url;
pub mod export;
pub mod image_transform;
pub mod upload;

pub use export::ExportedImage;
pub use upload::UploadFile;
