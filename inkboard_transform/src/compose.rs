// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Smallest scale factor a single compose step may apply.
///
/// Smaller (or non-finite) factors are clamped up to this value so the
/// transform never becomes singular.
pub const MIN_SCALE_FACTOR: f64 = 1e-3;

/// A single compose operation on a surface transform.
///
/// Pivots are expressed in the transform's local (surface) frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Translate by a local-space vector.
    Translate(Vec2),
    /// Rotate by `degrees` about `pivot`.
    RotateDegrees {
        /// Rotation angle in degrees; positive is clockwise on a y-down screen.
        degrees: f64,
        /// Local-space point that stays fixed.
        pivot: Point,
    },
    /// Uniformly scale by `factor` about `pivot`.
    Scale {
        /// Scale factor; clamped to at least [`MIN_SCALE_FACTOR`].
        factor: f64,
        /// Local-space point that stays fixed.
        pivot: Point,
    },
}

impl TransformOp {
    /// Returns the matrix for this operation alone.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Translate(delta) => Affine::translate(delta),
            Self::RotateDegrees { degrees, pivot } => {
                about(pivot, Affine::rotate(degrees.to_radians()))
            }
            Self::Scale { factor, pivot } => about(pivot, Affine::scale(sanitize_scale(factor))),
        }
    }
}

/// One smoothed gesture increment, already converted into local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureStep {
    /// Translation in the transform's local frame.
    pub local_translation: Vec2,
    /// Local-space point that rotation and scale are anchored at.
    pub local_pivot: Point,
    /// Rotation in degrees.
    pub rotation_degrees: f64,
    /// Uniform scale ratio (1.0 is no change).
    pub scale: f64,
}

impl GestureStep {
    /// A step that leaves any transform unchanged.
    pub const IDENTITY: Self = Self {
        local_translation: Vec2::ZERO,
        local_pivot: Point::ZERO,
        rotation_degrees: 0.0,
        scale: 1.0,
    };
}

/// Returns `transform` with `op` applied in its local frame.
#[must_use]
pub fn compose(transform: Affine, op: TransformOp) -> Affine {
    transform * op.to_affine()
}

/// Returns `transform` with a gesture increment applied.
///
/// The order is fixed: translate, translate to the pivot, rotate, scale,
/// translate back from the pivot.
#[must_use]
pub fn compose_gesture(transform: Affine, step: GestureStep) -> Affine {
    let pivot = step.local_pivot.to_vec2();
    transform
        * Affine::translate(step.local_translation)
        * Affine::translate(pivot)
        * Affine::rotate(step.rotation_degrees.to_radians())
        * Affine::scale(sanitize_scale(step.scale))
        * Affine::translate(-pivot)
}

/// Clamps a scale factor into the non-degenerate range.
#[must_use]
pub fn sanitize_scale(factor: f64) -> f64 {
    if factor.is_finite() && factor >= MIN_SCALE_FACTOR {
        factor
    } else {
        if factor.is_finite() {
            log::warn!("clamping scale factor {factor} to {MIN_SCALE_FACTOR}");
        } else {
            log::warn!("replacing non-finite scale factor with {MIN_SCALE_FACTOR}");
        }
        MIN_SCALE_FACTOR
    }
}

/// Returns the uniform zoom encoded in `transform`.
///
/// This is the length of the first linear column, which is exact for the
/// rotation + uniform scale transforms produced by gestures.
#[must_use]
pub fn zoom_of(transform: Affine) -> f64 {
    let [a, b, ..] = transform.as_coeffs();
    Vec2::new(a, b).hypot()
}

fn about(pivot: Point, linear: Affine) -> Affine {
    let pivot = pivot.to_vec2();
    Affine::translate(pivot) * linear * Affine::translate(-pivot)
}
