// SPDX-License-Identifier: MPL-2.0
//! View-time adjustments for brightness, contrast and rotation.
//!
//! These values never enter the edit history. They only change how the
//! current image is drawn until the user exports it.

pub use crate::domain::editing::newtypes::adjustment_bounds;
pub use crate::domain::editing::{AdjustmentPercent, RotationDegrees};

/// Brightness, contrast and rotation applied on top of the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentState {
    /// Brightness level (guaranteed valid by type).
    pub brightness: AdjustmentPercent,
    /// Contrast level (guaranteed valid by type).
    pub contrast: AdjustmentPercent,
    /// Clockwise rotation, normalized to `[0, 360)`.
    pub rotation: RotationDegrees,
}

impl AdjustmentState {
    /// Sets brightness, clamped to 50–200%.
    pub fn set_brightness(&mut self, percent: i32) {
        self.brightness = AdjustmentPercent::new(percent);
    }

    /// Sets contrast, clamped to 50–200%.
    pub fn set_contrast(&mut self, percent: i32) {
        self.contrast = AdjustmentPercent::new(percent);
    }

    /// Adds `delta` degrees to the rotation.
    pub fn rotate(&mut self, delta: i32) {
        self.rotation = self.rotation.rotate(delta);
    }

    /// Returns true if any adjustment has been made (non-neutral values).
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.brightness.is_neutral() || !self.contrast.is_neutral() || self.rotation.is_rotated()
    }

    /// Reset adjustments to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Directives a renderer needs to draw the current image.
    #[must_use]
    pub fn directives(&self) -> RenderDirectives {
        RenderDirectives {
            brightness: self.brightness.as_factor(),
            contrast: self.contrast.as_factor(),
            rotation: self.rotation,
        }
    }

    /// `brightness(B%) contrast(C%)`, for a web view.
    #[must_use]
    pub fn css_filter(&self) -> String {
        format!(
            "brightness({}%) contrast({}%)",
            self.brightness.value(),
            self.contrast.value()
        )
    }

    /// `rotate(Rdeg)`, for a web view.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("rotate({}deg)", self.rotation.degrees())
    }
}

/// How to draw an image: scale each channel by `brightness`, then scale its
/// distance from mid-gray by `contrast`, then rotate about the center.
///
/// Rotation is independent of the filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderDirectives {
    /// Brightness multiplier (1.0 = neutral).
    pub brightness: f32,
    /// Contrast multiplier (1.0 = neutral).
    pub contrast: f32,
    /// Clockwise rotation about the image center.
    pub rotation: RotationDegrees,
}

impl RenderDirectives {
    /// Returns true if drawing needs no filter pass.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        (self.brightness - 1.0).abs() < f32::EPSILON && (self.contrast - 1.0).abs() < f32::EPSILON
    }
}
