// SPDX-License-Identifier: MPL-2.0
//! `prompt_lens` is the core of a prompt-driven photo editor.
//!
//! Edits are produced by a remote generative image model; this crate keeps
//! the linear edit history, applies view-time brightness/contrast/rotation,
//! and flattens the result into a downloadable PNG.

#![doc(html_root_url = "https://docs.rs/prompt_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod infrastructure;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;

pub use editor::{EditSession, Phase};
pub use error::{Error, Result};
