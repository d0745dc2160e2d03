// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for view-time adjustments:
//! - [`AdjustmentPercent`]: Brightness/contrast scale
//! - [`RotationDegrees`]: Rotation angle modulo a full turn

pub mod newtypes;

pub use newtypes::{AdjustmentPercent, RotationDegrees};
