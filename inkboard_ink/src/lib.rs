// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard_ink --heading-base-level=0

//! Inkboard Ink: freehand stroke capture, undo/redo history, and rendering.
//!
//! Strokes are stored as surface-local points (already mapped through the
//! inverse of the surface transform), so they keep their appearance when the
//! surface is later panned, zoomed or rotated.
//!
//! - [`InkStyle`]: color, width and opacity captured when a stroke starts.
//! - [`Stroke`] and [`StrokeShape`]: a point sequence and the geometry it
//!   renders as (dot, segment, or midpoint-smoothed quadratic curve).
//! - [`History`]: finalized strokes plus a redo stack.
//! - [`InkEngine`]: the `Idle → Drawing → Idle` capture state machine.
//! - [`InkRenderer`]: replays the whole history into an
//!   [`ImagingBackend`](inkboard_imaging::ImagingBackend) on every change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use inkboard_ink::{InkEngine, InkStyle};
//!
//! let mut ink = InkEngine::new(InkStyle::default());
//! ink.begin(Point::new(10.0, 10.0));
//! ink.append(Point::new(20.0, 15.0));
//! ink.append(Point::new(30.0, 10.0));
//! assert!(ink.finish());
//!
//! assert_eq!(ink.history().len(), 1);
//! assert!(ink.undo());
//! assert!(ink.history().is_empty());
//! assert!(ink.redo());
//! assert_eq!(ink.history().strokes()[0].points().len(), 3);
//! ```
//!
//! Re-rendering always replays the authoritative vector history rather than
//! patching raster state, so any sequence of undo and redo lands on exactly
//! the same frame as the history it restores.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod engine;
mod history;
mod render;
mod stroke;
mod style;

pub use engine::{DEFAULT_MIN_POINT_DISTANCE, InkEngine};
pub use history::History;
pub use render::InkRenderer;
pub use stroke::{END_CAP_DIVISOR, Stroke, StrokeShape, smooth_path};
pub use style::{InkStyle, PRESET_WIDTHS, StyleError};
