// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external services and network I/O.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Image editing and style suggestion over the Gemini REST API
//!   (implements [`ImageModel`])
//!
//! [`ImageModel`]: crate::application::port::ImageModel

pub mod gemini;

// Re-export main types for convenience
pub use gemini::GeminiClient;
