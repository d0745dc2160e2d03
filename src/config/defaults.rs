// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Model**: Remote model names and endpoint
//! - **Network**: Request timeout bounds
//! - **Environment**: Variables that override the stored API key

// ==========================================================================
// Model Defaults
// ==========================================================================

/// Model used to edit images from a text instruction.
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Model used to suggest an artistic instruction for an image.
pub const DEFAULT_PROMPT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the `generateContent` REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout for one model round trip (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Environment
// ==========================================================================

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
