// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for view-time adjustment values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Adjustment Bounds
// =============================================================================

/// Adjustment bounds (50% to 200%, 100% = neutral).
pub mod adjustment_bounds {
    /// Minimum adjustment percentage.
    pub const MIN: i32 = 50;
    /// Maximum adjustment percentage.
    pub const MAX: i32 = 200;
    /// Default (neutral) adjustment percentage.
    pub const DEFAULT: i32 = 100;
}

// =============================================================================
// AdjustmentPercent
// =============================================================================

/// Brightness or contrast percentage, guaranteed to be within valid range (50%–200%).
///
/// The value is a linear scale: 100% leaves the image untouched, 200% doubles
/// the channel (brightness) or the distance from mid-gray (contrast).
///
/// # Example
///
/// ```
/// use prompt_lens::domain::editing::AdjustmentPercent;
///
/// assert_eq!(AdjustmentPercent::new(500).value(), 200);
/// assert_eq!(AdjustmentPercent::new(-10).value(), 50);
/// assert!(AdjustmentPercent::default().is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjustmentPercent(i32);

impl AdjustmentPercent {
    /// Creates a new adjustment value, clamping to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(adjustment_bounds::MIN, adjustment_bounds::MAX))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g., 100% → 1.0, 150% → 1.5).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        // Range is 50..=200, exactly representable.
        #[allow(clippy::cast_precision_loss)]
        let value = self.0 as f32;
        value / 100.0
    }

    /// Returns whether this represents no adjustment (100%).
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == adjustment_bounds::DEFAULT
    }

    /// Returns whether the adjustment is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= adjustment_bounds::MIN
    }

    /// Returns whether the adjustment is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= adjustment_bounds::MAX
    }
}

impl Default for AdjustmentPercent {
    fn default() -> Self {
        Self(adjustment_bounds::DEFAULT)
    }
}

// =============================================================================
// RotationDegrees
// =============================================================================

/// Rotation angle in whole degrees, normalized to `[0, 360)`.
///
/// Unlike a quarter-turn-only angle, any integer delta is accepted; negative
/// deltas wrap around so `-90` is stored as `270`.
///
/// # Example
///
/// ```
/// use prompt_lens::domain::editing::RotationDegrees;
///
/// let angle = RotationDegrees::default().rotate(-90);
/// assert_eq!(angle.degrees(), 270);
///
/// let full = (0..4).fold(RotationDegrees::default(), |a, _| a.rotate(90));
/// assert_eq!(full.degrees(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationDegrees(u16);

impl RotationDegrees {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a rotation from any signed angle, wrapping into `[0, 360)`.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        // rem_euclid keeps the result in 0..360, which always fits in u16.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let normalized = degrees.rem_euclid(360) as u16;
        Self(normalized)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    /// Adds `delta` degrees, wrapping around a full turn.
    #[must_use]
    pub fn rotate(self, delta: i32) -> Self {
        Self::new(i32::from(self.0) + delta.rem_euclid(360))
    }

    /// Returns true if the angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }

    /// Returns the equivalent quarter turn count if the angle is a multiple of 90°.
    #[must_use]
    pub fn quarter_turns(self) -> Option<u8> {
        if self.0 % 90 == 0 {
            // 0..=3
            #[allow(clippy::cast_possible_truncation)]
            let turns = (self.0 / 90) as u8;
            Some(turns)
        } else {
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
