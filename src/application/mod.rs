// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The editor drives the ports without knowing the adapter behind them
//!
//! # Example
//!
//! ```ignore
//! use prompt_lens::application::port::ImageModel;
//! use prompt_lens::editor::EditSession;
//! use prompt_lens::infrastructure::gemini::GeminiClient;
//!
//! let client = GeminiClient::from_config(&config)?;
//! let mut session = EditSession::new(client);
//! ```

pub mod port;
