// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard_gesture --heading-base-level=0

//! Inkboard Gesture: two-contact pan/zoom/rotate recognition.
//!
//! This crate turns a stream of two-finger samples into smoothed transform
//! increments and folds them into an [`inkboard_transform::TransformStore`].
//!
//! - [`contact`]: contact points, identifiers, and stable ordering of a pair.
//! - [`pinch`]: midpoint/distance/angle of a pair and angle normalization.
//! - [`GestureEngine`]: the `Idle → Transforming → Idle` state machine.
//!
//! ## Usage
//!
//! 1) Call [`GestureEngine::begin`] when a second contact lands.
//! 2) Call [`GestureEngine::update`] on every two-contact move sample.
//! 3) Call [`GestureEngine::end`] when fewer than two contacts remain.
//!
//! ```rust
//! use kurbo::Point;
//! use inkboard_gesture::{ContactId, ContactPoint, GestureConfig, GestureEngine};
//! use inkboard_transform::TransformStore;
//!
//! let mut store = TransformStore::new();
//! let mut gesture = GestureEngine::new(GestureConfig::default());
//!
//! let a = ContactPoint::new(ContactId(1), Point::new(100.0, 100.0));
//! let b = ContactPoint::new(ContactId(2), Point::new(200.0, 100.0));
//! gesture.begin(a, b);
//!
//! // Spread the fingers to twice the distance.
//! let b = ContactPoint::new(ContactId(2), Point::new(300.0, 100.0));
//! let update = gesture.update(a, b, &mut store).unwrap();
//! assert!((update.scale - 1.9).abs() < 1e-12);
//! assert_eq!(update.rotation_degrees, 0.0);
//!
//! gesture.end();
//! assert!(!gesture.is_active());
//! ```
//!
//! Smoothing is applied per increment (`smoothed = raw * k`) rather than to
//! the accumulated state, and every increment is anchored at the live
//! midpoint of the two contacts.
//!
//! This crate is `no_std`.

#![no_std]

pub mod contact;
mod engine;
pub mod pinch;

pub use contact::{ContactId, ContactPoint, ordered_pair};
pub use engine::{GestureConfig, GestureConfigError, GestureEngine, GestureUpdate};
pub use pinch::{PinchSample, angle_delta};
