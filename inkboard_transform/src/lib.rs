// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard_transform --heading-base-level=0

//! Inkboard Transform: the surface-to-screen affine transform store.
//!
//! This crate owns the single piece of geometry shared by every other part of
//! a drawing surface: the pan/zoom/rotate transform that places the surface's
//! local coordinate frame onto the screen. It provides:
//! - Pure composition helpers ([`compose`], [`compose_gesture`]) that return a
//!   new [`Affine`](kurbo::Affine) from a current transform and an operation.
//! - [`TransformStore`], a small owner of the current transform with zoom
//!   limits, a change revision, and forward/inverse point mapping.
//!
//! It does **not** interpret input. Gesture recognition lives in
//! `inkboard_gesture`; ink capture maps contacts through
//! [`TransformStore::to_local_point`] before storing them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use inkboard_transform::{TransformOp, TransformStore};
//!
//! let mut store = TransformStore::new();
//! store.compose(TransformOp::Translate(Vec2::new(10.0, 0.0)));
//! store.compose(TransformOp::Scale { factor: 2.0, pivot: Point::ZERO });
//!
//! let screen = store.to_screen_point(Point::new(1.0, 1.0));
//! assert_eq!(screen, Point::new(12.0, 2.0));
//!
//! let local = store.to_local_point(screen);
//! assert!((local.x - 1.0).abs() < 1e-9 && (local.y - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! Operations are applied in the transform's *local* frame: composing `op`
//! onto `t` yields `t * op`, the same order as chained DOM-matrix calls. A
//! gesture increment is always composed as translate, then rotate and scale
//! about a pivot, then translate back. This order is not commutative.
//!
//! This crate is `no_std`.

#![no_std]

mod compose;
mod store;

pub use compose::{
    GestureStep, MIN_SCALE_FACTOR, TransformOp, compose, compose_gesture, sanitize_scale, zoom_of,
};
pub use store::TransformStore;
