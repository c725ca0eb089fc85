// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard --heading-base-level=0

//! Inkboard: a touch drawing surface.
//!
//! One finger draws freehand ink; two fingers pan, zoom and rotate the
//! surface. [`Surface`] ties together the pieces from the component crates:
//!
//! - [`inkboard_transform`]: the surface transform and coordinate mapping.
//! - [`inkboard_gesture`]: smoothed two-contact gesture recognition.
//! - [`inkboard_ink`]: strokes, undo/redo history, and full re-rendering.
//! - [`inkboard_imaging`]: the imaging IR the surface renders into.
//!
//! The host feeds every input sample (the full set of active contacts, in
//! screen space) to [`Surface::handle_contacts`] and reflects queued
//! [`Notification`]s in its own UI.
//!
//! ## Example
//!
//! ```rust
//! use inkboard::{InkboardConfig, Mode, Notification, Surface};
//! use inkboard_gesture::{ContactId, ContactPoint};
//! use inkboard_imaging_ref::RefBackend;
//! use kurbo::Point;
//!
//! let touch = |id, x, y| ContactPoint::new(ContactId(id), Point::new(x, y));
//! let mut surface = Surface::new(InkboardConfig::default(), RefBackend::default()).unwrap();
//!
//! // Draw a short stroke below the 70px toolbar.
//! assert_eq!(surface.handle_contacts(&[touch(1, 100.0, 200.0)]), Mode::Drawing);
//! surface.handle_contacts(&[touch(1, 150.0, 220.0)]);
//! assert_eq!(surface.handle_contacts(&[]), Mode::Idle);
//!
//! // Pinch outwards to zoom.
//! surface.handle_contacts(&[touch(2, 100.0, 300.0), touch(3, 200.0, 300.0)]);
//! surface.handle_contacts(&[touch(2, 100.0, 300.0), touch(3, 300.0, 300.0)]);
//! surface.handle_contacts(&[]);
//! assert!((surface.transform_store().zoom() - 1.9).abs() < 1e-9);
//!
//! let notes = surface.drain_notifications();
//! assert!(matches!(notes[0], Notification::HistoryChanged { len: 1, .. }));
//! assert!(matches!(notes[1], Notification::TransformChanged { is_identity: false, .. }));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod surface;

pub use config::{
    ConfigError, DEFAULT_LOGICAL_SIZE, DEFAULT_TOP_OFFSET, InkboardConfig, SurfaceGeometry,
};
pub use surface::{Mode, Notification, Surface};

pub use inkboard_gesture::{ContactId, ContactPoint, GestureConfig};
pub use inkboard_ink::{InkStyle, PRESET_WIDTHS};
