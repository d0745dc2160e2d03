// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`ai`]: Generative image editing and style suggestion
//!
//! # Design Notes
//!
//! - All traits use domain types only (no HTTP or JSON types)
//! - Traits are `Send + Sync` so adapters can be shared with background jobs
//! - Methods return `Result` with port-specific error types

pub mod ai;

// Re-export main types for convenience
pub use ai::{ImageModel, ModelError};
