// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Adjustment types ([`AdjustmentPercent`](editing::AdjustmentPercent),
//!   [`RotationDegrees`](editing::RotationDegrees))
//! - [`error`]: Domain error types ([`PayloadError`](error::PayloadError))
//! - [`media`]: Image types ([`ImageMime`](media::ImageMime),
//!   [`ImagePayload`](media::ImagePayload))

pub mod editing;
pub mod error;
pub mod media;
