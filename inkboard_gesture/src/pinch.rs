// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of a two-contact sample.

use core::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::contact::ContactPoint;

/// Midpoint, distance and angle of an ordered contact pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Midpoint of the two contacts.
    pub midpoint: Point,
    /// Euclidean distance between the contacts.
    pub distance: f64,
    /// Angle in radians of the vector from the first to the second contact.
    pub angle: f64,
}

impl PinchSample {
    /// Measures an ordered pair (see [`crate::ordered_pair`]).
    #[must_use]
    pub fn from_pair(first: ContactPoint, second: ContactPoint) -> Self {
        let v = second.pos - first.pos;
        Self {
            midpoint: first.pos.midpoint(second.pos),
            distance: v.hypot(),
            angle: v.atan2(),
        }
    }
}

/// Returns `new - old` normalized into `(-π, π]`.
///
/// This removes the wrap-around jump when the line between two fingers
/// crosses the ±π boundary.
#[must_use]
pub fn angle_delta(new: f64, old: f64) -> f64 {
    let mut diff = new - old;
    if !diff.is_finite() {
        return 0.0;
    }
    while diff <= -PI {
        diff += TAU;
    }
    while diff > PI {
        diff -= TAU;
    }
    diff
}
