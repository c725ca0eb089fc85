// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard_imaging --heading-base-level=0

//! Inkboard Imaging: the drawing vocabulary between strokes and pixels.
//!
//! A surface re-renders by emitting a short stream of plain-data operations
//! into an [`ImagingBackend`]. This crate defines that stream and nothing
//! else, so the ink engine never depends on a concrete rasterizer (a web
//! canvas, a CPU rasterizer, a GPU scene).
//!
//! - [`PathId`] and [`PaintId`] are opaque handles. Their lifetimes are
//!   managed through [`ResourceBackend`].
//! - [`StateOp`] changes what later draws look like: the transform, the
//!   current paint and stroke, and opacity layers.
//! - [`DrawOp`] puts ink down: stroked paths and filled circles.
//!
//! Output is write-only. There is no read-back, and every frame starts with
//! [`DrawOp::Clear`].
//!
//! # Example
//!
//! ```ignore
//! # use inkboard_imaging::*;
//! # use peniko::{Brush, Color};
//! let mut backend = MyBackend::default();
//!
//! let paint = backend.create_paint(PaintDesc {
//!     brush: Brush::Solid(Color::BLACK),
//! });
//! let mut path = kurbo::BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 10.0));
//! let path = backend.create_path(PathDesc { path });
//!
//! backend.draw(DrawOp::Clear);
//! backend.state(StateOp::SetPaint(paint));
//! backend.state(StateOp::SetStroke(StrokeStyle::new(3.0)));
//! backend.with_opacity_layer(0.5, |b| b.draw(DrawOp::StrokePath(path)));
//! ```

#![no_std]

use peniko::Brush;

/// Handle to a path created with [`ResourceBackend::create_path`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Handle to a paint created with [`ResourceBackend::create_paint`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by [`StateOp::SetTransform`].
pub type Affine = kurbo::Affine;

/// Pen used by [`StateOp::SetStroke`]: width, joins, caps.
pub type StrokeStyle = kurbo::Stroke;

/// A compositing layer pushed with [`StateOp::PushLayer`].
///
/// Everything drawn inside the layer is composited into the parent at once,
/// so a translucent stroke whose segments overlap does not darken where they
/// cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOp {
    /// Opacity in `0..=1` applied when the layer is composited.
    pub opacity: f32,
}

/// Operations that change the state later draws use.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the current transform.
    SetTransform(Affine),
    /// Push a layer. Must be matched by a [`StateOp::PopLayer`].
    PushLayer(LayerOp),
    /// Pop the most recently pushed layer.
    PopLayer,
    /// Select the paint for subsequent draws.
    SetPaint(PaintId),
    /// Select the pen for subsequent path strokes.
    SetStroke(StrokeStyle),
}

/// Operations that produce pixels from the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface to transparent, ignoring transform and layers.
    Clear,
    /// Stroke a path with the current pen and paint.
    StrokePath(PathId),
    /// Fill a circle with the current paint.
    FillCircle {
        /// Center X coordinate.
        cx: f64,
        /// Center Y coordinate.
        cy: f64,
        /// Radius.
        radius: f64,
    },
}

/// Geometry for a path resource, in the coordinates of the current transform.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Path geometry.
    pub path: kurbo::BezPath,
}

/// Brush for a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// A [`peniko::Brush`], which backends map onto their native paint.
    pub brush: Brush,
}

/// Creation and destruction of backend resources.
///
/// An ID stays valid, and refers to the same resource, until the matching
/// `destroy_*` call.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// A sink for imaging operations.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Helpers built on [`ImagingBackend`].
///
/// Kept apart from [`ImagingBackend`] so that `&mut dyn ImagingBackend`
/// still works while these take closures.
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` inside a layer of the given opacity, popping it afterwards.
    ///
    /// If `f` panics the layer is not popped.
    #[inline]
    fn with_opacity_layer<R>(&mut self, opacity: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.state(StateOp::PushLayer(LayerOp { opacity }));
        let out = f(self);
        self.state(StateOp::PopLayer);
        out
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}
