// SPDX-License-Identifier: MPL-2.0
//! Pixel-level transforms used to flatten view-time adjustments.
//!
//! Brightness and contrast follow the usual 2D-canvas filter semantics
//! (`brightness(N%)` then `contrast(N%)`, each clamped to the channel range),
//! and rotation turns the whole raster about its center into a canvas sized
//! to the rotated bounding box.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::domain::editing::{AdjustmentPercent, RotationDegrees};
use image_rs::{DynamicImage, Rgba, RgbaImage};

// ==========================================================================
// Filters
// ==========================================================================

/// Builds the per-channel lookup table for a brightness/contrast pair.
///
/// The filter only depends on the input channel value, so the whole
/// transform collapses to 256 entries.
#[must_use]
pub fn filter_lut(brightness: AdjustmentPercent, contrast: AdjustmentPercent) -> [u8; 256] {
    let b = f64::from(brightness.as_factor());
    let c = f64::from(contrast.as_factor());
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let normalized = value as f64 / 255.0;
        let brightened = (normalized * b).clamp(0.0, 1.0);
        let contrasted = ((brightened - 0.5) * c + 0.5).clamp(0.0, 1.0);
        *slot = (contrasted * 255.0).round() as u8;
    }
    lut
}

/// Applies brightness then contrast to the color channels of `image`.
///
/// Alpha is left untouched. Neutral values return a clone without touching
/// pixels.
#[must_use]
pub fn apply_filters(
    image: &DynamicImage,
    brightness: AdjustmentPercent,
    contrast: AdjustmentPercent,
) -> DynamicImage {
    if brightness.is_neutral() && contrast.is_neutral() {
        return image.clone();
    }

    let lut = filter_lut(brightness, contrast);
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [lut[r as usize], lut[g as usize], lut[b as usize], a];
    }
    DynamicImage::ImageRgba8(rgba)
}

// ==========================================================================
// Rotation
// ==========================================================================

/// Size of the canvas that fully contains a `width`×`height` raster rotated
/// by `rotation`: `W|cos θ| + H|sin θ|` by `W|sin θ| + H|cos θ|`.
///
/// Values are rounded to the nearest pixel so quarter turns land exactly on
/// swapped dimensions despite floating-point noise. Both sides are at least 1.
#[must_use]
pub fn rotated_bounds(width: u32, height: u32, rotation: RotationDegrees) -> (u32, u32) {
    if let Some(turns) = rotation.quarter_turns() {
        return if turns % 2 == 0 {
            (width.max(1), height.max(1))
        } else {
            (height.max(1), width.max(1))
        };
    }

    let (sin, cos) = rotation.radians().sin_cos();
    let (w, h) = (f64::from(width), f64::from(height));
    let bound_w = (w * cos.abs() + h * sin.abs()).round().max(1.0);
    let bound_h = (w * sin.abs() + h * cos.abs()).round().max(1.0);
    (bound_w as u32, bound_h as u32)
}

/// Rotates `image` clockwise about its center.
///
/// Quarter turns are exact pixel permutations. Other angles are resampled
/// bilinearly into a transparent canvas of [`rotated_bounds`] size.
#[must_use]
pub fn rotate(image: &DynamicImage, rotation: RotationDegrees) -> DynamicImage {
    match rotation.quarter_turns() {
        Some(0) => image.clone(),
        Some(1) => image.rotate90(),
        Some(2) => image.rotate180(),
        Some(3) => image.rotate270(),
        _ => DynamicImage::ImageRgba8(rotate_resampled(&image.to_rgba8(), rotation)),
    }
}

fn rotate_resampled(src: &RgbaImage, rotation: RotationDegrees) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = rotated_bounds(src_w, src_h, rotation);
    let (sin, cos) = rotation.radians().sin_cos();

    let src_cx = f64::from(src_w) / 2.0;
    let src_cy = f64::from(src_h) / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    RgbaImage::from_fn(dst_w, dst_h, |x, y| {
        // Inverse-map the destination pixel center into source space.
        let u = f64::from(x) + 0.5 - dst_cx;
        let v = f64::from(y) + 0.5 - dst_cy;
        let sx = u * cos + v * sin + src_cx;
        let sy = -u * sin + v * cos + src_cy;
        sample_bilinear(src, sx - 0.5, sy - 0.5)
    })
}

/// Samples `src` at a fractional position, treating pixels outside the
/// raster as fully transparent. Interpolation is done on premultiplied color.
fn sample_bilinear(src: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (width, height) = (i64::from(src.width()), i64::from(src.height()));
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (ix, iy) = (x0 as i64, y0 as i64);

    let taps = [
        (ix, iy, (1.0 - fx) * (1.0 - fy)),
        (ix + 1, iy, fx * (1.0 - fy)),
        (ix, iy + 1, (1.0 - fx) * fy),
        (ix + 1, iy + 1, fx * fy),
    ];

    let mut acc = [0.0f64; 4];
    for (px, py, weight) in taps {
        if weight <= 0.0 || px < 0 || py < 0 || px >= width || py >= height {
            continue;
        }
        let [r, g, b, a] = src.get_pixel(px as u32, py as u32).0;
        let alpha = f64::from(a) / 255.0;
        acc[0] += f64::from(r) * alpha * weight;
        acc[1] += f64::from(g) * alpha * weight;
        acc[2] += f64::from(b) * alpha * weight;
        acc[3] += alpha * weight;
    }

    if acc[3] <= f64::EPSILON {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |premultiplied: f64| (premultiplied / acc[3]).round().clamp(0.0, 255.0) as u8;
    Rgba([
        channel(acc[0]),
        channel(acc[1]),
        channel(acc[2]),
        (acc[3] * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
