// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::compose::{GestureStep, TransformOp, compose, compose_gesture, zoom_of};

/// Owner of a drawing surface's surface-to-screen transform.
///
/// The store maps surface-local points onto the screen and back. Every
/// successful mutation bumps [`TransformStore::revision`], which callers use to
/// publish transform-changed notifications. The inverse mapping is derived
/// from the current matrix on each call rather than cached, so it can never
/// be stale.
///
/// Cumulative zoom is kept inside `[min_zoom, max_zoom]` (default
/// `[1e-2, 1e2]`); a compose that would leave that range has its scale
/// component clamped so that it lands on the limit.
#[derive(Clone, Debug)]
pub struct TransformStore {
    transform: Affine,
    min_zoom: f64,
    max_zoom: f64,
    revision: u64,
}

impl Default for TransformStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStore {
    /// Creates a store holding the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
            min_zoom: 1e-2,
            max_zoom: 1e2,
            revision: 0,
        }
    }

    /// Returns the current surface-to-screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the number of successful mutations so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the transform is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.transform == Affine::IDENTITY
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        zoom_of(self.transform)
    }

    /// Returns the configured `(min_zoom, max_zoom)` pair.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum cumulative zoom.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`, and both ends
    /// are kept strictly positive. The current transform is not rescaled. If its
    /// zoom lies outside the new range, later steps may keep it or move it
    /// toward the range, but never further out.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom.max(f64::MIN_POSITIVE);
        self.max_zoom = max_zoom.max(self.min_zoom);
    }

    /// Resets the transform to identity.
    ///
    /// This always bumps the revision, so a reset is always observable.
    /// Returns `true` if the matrix actually changed.
    pub fn reset(&mut self) -> bool {
        let changed = !self.is_identity();
        self.transform = Affine::IDENTITY;
        self.revision += 1;
        log::debug!("transform reset (changed: {changed})");
        changed
    }

    /// Composes `op` onto the current transform in its local frame.
    ///
    /// Returns `false` if the result was rejected as non-finite.
    pub fn compose(&mut self, op: TransformOp) -> bool {
        let next = compose(self.transform, op);
        let next = match op {
            TransformOp::Scale { factor, pivot } => match self.zoom_correction(next) {
                Some(correction) => compose(
                    self.transform,
                    TransformOp::Scale {
                        factor: factor * correction,
                        pivot,
                    },
                ),
                None => next,
            },
            _ => next,
        };
        self.commit(next)
    }

    /// Composes a gesture increment onto the current transform.
    ///
    /// Returns `false` if the result was rejected as non-finite.
    pub fn apply_gesture(&mut self, step: GestureStep) -> bool {
        let next = compose_gesture(self.transform, step);
        let next = match self.zoom_correction(next) {
            Some(correction) => compose_gesture(
                self.transform,
                GestureStep {
                    scale: step.scale * correction,
                    ..step
                },
            ),
            None => next,
        };
        self.commit(next)
    }

    /// Maps a surface-local point onto the screen.
    #[must_use]
    pub fn to_screen_point(&self, local: Point) -> Point {
        self.transform * local
    }

    /// Maps a screen point into surface-local coordinates.
    #[must_use]
    pub fn to_local_point(&self, screen: Point) -> Point {
        self.transform.inverse() * screen
    }

    /// Maps a screen-space displacement into a surface-local displacement.
    ///
    /// Both the vector and the origin are mapped through the inverse and
    /// subtracted, which removes the translation part of the transform.
    #[must_use]
    pub fn to_local_vector(&self, screen: Vec2) -> Vec2 {
        let inverse = self.transform.inverse();
        inverse * screen.to_point() - inverse * Point::ZERO
    }

    /// Returns the axis-aligned screen bounds of a surface-local rectangle.
    ///
    /// For a rotated surface this is the bounding box of the four transformed
    /// corners, matching what a compositor reports as the element's bounds.
    #[must_use]
    pub fn to_screen_rect(&self, local: Rect) -> Rect {
        self.transform.transform_rect_bbox(local)
    }

    /// Returns the factor by which a candidate's scale must be multiplied to
    /// bring its zoom back into range, or `None` if it is already in range.
    ///
    /// The range is widened to include the current zoom, so a zoom left out of
    /// range by [`Self::set_zoom_limits`] is never snapped by a pan or rotate.
    fn zoom_correction(&self, candidate: Affine) -> Option<f64> {
        let zoom = zoom_of(candidate);
        if !zoom.is_finite() || zoom <= 0.0 {
            return None;
        }
        let current = self.zoom();
        let (min_zoom, max_zoom) = if current.is_finite() {
            (self.min_zoom.min(current), self.max_zoom.max(current))
        } else {
            (self.min_zoom, self.max_zoom)
        };
        let clamped = zoom.clamp(min_zoom, max_zoom);
        if (clamped - zoom).abs() < f64::EPSILON {
            return None;
        }
        log::warn!("clamping zoom {zoom} into [{min_zoom}, {max_zoom}]");
        Some(clamped / zoom)
    }

    fn commit(&mut self, next: Affine) -> bool {
        if !next.is_finite() || next.determinant() == 0.0 {
            log::warn!("rejecting degenerate transform {next:?}");
            return false;
        }
        self.transform = next;
        self.revision += 1;
        true
    }
}
