// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inkboard_imaging_ref --heading-base-level=0

//! Inkboard Imaging Reference Backend.
//!
//! [`RefBackend`] implements [`ImagingBackend`] by logging every operation
//! together with the imaging state in force when it was applied. It does not
//! rasterize. Tests, benchmarks and demos use it to assert on rendered
//! frames.
//!
//! Draw events carry the *resolved* geometry and brush, so two frames can be
//! compared for equality even though they allocated different resource IDs.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use inkboard_imaging::{
    Affine, DrawOp, ImagingBackend, LayerOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle,
};
use kurbo::BezPath;
use peniko::Brush;

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Number of active layers on the layer stack.
    pub layer_stack_depth: u32,
    /// The most recently pushed layer op, if any.
    pub layer_top: Option<LayerOp>,
    /// Current paint, resolved to its brush, if set and alive.
    pub brush: Option<Brush>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            layer_stack_depth: 0,
            layer_top: None,
            brush: None,
            stroke: None,
        }
    }
}

/// Draw operation with its resource references resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedDraw {
    /// [`DrawOp::Clear`].
    Clear,
    /// [`DrawOp::StrokePath`] with the path geometry, or `None` if the ID was dead.
    StrokePath(Option<BezPath>),
    /// [`DrawOp::FillCircle`].
    FillCircle {
        /// Center X coordinate.
        cx: f64,
        /// Center Y coordinate.
        cy: f64,
        /// Radius.
        radius: f64,
    },
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// The draw with resources resolved at the time it was applied.
        resolved: ResolvedDraw,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// Resource descriptors live in vectors indexed by their IDs, and every
/// applied operation is appended to the [`Event`] log.
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Current imaging state.
    state: StateSnapshot,
    layer_stack: Vec<LayerOp>,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Clears the event log but keeps resources and state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the number of [`DrawOp::Clear`] ops applied so far.
    ///
    /// Each full re-render starts with exactly one clear, so this counts
    /// frames.
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Draw { op: DrawOp::Clear, .. }))
            .count()
    }

    /// Returns the resolved draws (with their state) of the most recent frame.
    ///
    /// A frame starts at the last [`DrawOp::Clear`]; if there was none, all
    /// draws are returned.
    pub fn last_frame(&self) -> Vec<(ResolvedDraw, StateSnapshot)> {
        let start = self
            .events
            .iter()
            .rposition(|e| matches!(e, Event::Draw { op: DrawOp::Clear, .. }))
            .unwrap_or(0);
        self.events[start..]
            .iter()
            .filter_map(|e| match e {
                Event::Draw {
                    resolved, state, ..
                } => Some((resolved.clone(), state.clone())),
                Event::State { .. } => None,
            })
            .collect()
    }

    /// Returns the number of path resources currently alive.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|p| p.is_some()).count()
    }

    /// Returns the number of paint resources currently alive.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().filter(|p| p.is_some()).count()
    }

    /// Returns the current layer stack depth.
    pub fn layer_depth(&self) -> usize {
        self.layer_stack.len()
    }

    fn path(&self, id: PathId) -> Option<BezPath> {
        self.paths
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map(|desc| desc.path.clone())
    }

    fn brush(&self, id: PaintId) -> Option<Brush> {
        self.paints
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map(|desc| desc.brush.clone())
    }

    fn sync_layers(&mut self) {
        self.state.layer_stack_depth = u32::try_from(self.layer_stack.len())
            .expect("RefBackend: too many layer stack entries for u32");
        self.state.layer_top = self.layer_stack.last().cloned();
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("RefBackend: too many paths for u32 PathId");
        self.paths.push(Some(desc));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some(slot) = self.paths.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some(slot) = self.paints.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::PushLayer(layer) => {
                self.layer_stack.push(layer.clone());
                self.sync_layers();
            }
            StateOp::PopLayer => {
                self.layer_stack.pop();
                self.sync_layers();
            }
            StateOp::SetPaint(id) => self.state.brush = self.brush(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        let resolved = match &op {
            DrawOp::Clear => ResolvedDraw::Clear,
            DrawOp::StrokePath(id) => ResolvedDraw::StrokePath(self.path(*id)),
            DrawOp::FillCircle { cx, cy, radius } => ResolvedDraw::FillCircle {
                cx: *cx,
                cy: *cy,
                radius: *radius,
            },
        };
        self.events.push(Event::Draw {
            op,
            resolved,
            state: self.state.clone(),
        });
    }
}
