// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peniko::Color;

use crate::history::History;
use crate::stroke::Stroke;
use crate::style::{InkStyle, StyleError};

/// Default minimum distance between consecutive sampled points, in local units.
pub const DEFAULT_MIN_POINT_DISTANCE: f64 = 0.5;

/// Freehand capture state machine: `Idle → Drawing → Idle`.
///
/// The engine owns the [`History`] and at most one in-progress stroke. Entry
/// conditions for drawing (a single contact, no active gesture, inside the
/// surface) are the caller's concern; the engine only tracks points.
#[derive(Clone, Debug)]
pub struct InkEngine {
    history: History,
    current: Option<Stroke>,
    style: InkStyle,
    min_point_distance: f64,
}

impl Default for InkEngine {
    fn default() -> Self {
        Self::new(InkStyle::default())
    }
}

impl InkEngine {
    /// Creates an idle engine with an empty history.
    #[must_use]
    pub fn new(style: InkStyle) -> Self {
        Self {
            history: History::new(),
            current: None,
            style,
            min_point_distance: DEFAULT_MIN_POINT_DISTANCE,
        }
    }

    /// Sets the distance under which appended points are dropped.
    ///
    /// Negative or non-finite values are treated as zero.
    #[must_use]
    pub fn with_min_point_distance(mut self, distance: f64) -> Self {
        self.min_point_distance = if distance.is_finite() {
            distance.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Returns `true` while a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Starts a stroke at `point` using the current style.
    ///
    /// A stroke that is already in progress is finished first.
    pub fn begin(&mut self, point: Point) {
        if self.finish() {
            log::debug!("ink: previous stroke finished by a new begin");
        }
        log::debug!("ink: begin at {point:?}");
        self.current = Some(Stroke::new(point, self.style));
    }

    /// Appends a point to the in-progress stroke.
    ///
    /// Returns `false` when idle, or when the point is within the minimum
    /// point distance of the previous one.
    pub fn append(&mut self, point: Point) -> bool {
        let Some(stroke) = self.current.as_mut() else {
            return false;
        };
        if stroke.last_point().distance(point) < self.min_point_distance {
            return false;
        }
        stroke.push(point);
        true
    }

    /// Moves the in-progress stroke into the history.
    ///
    /// Returns `false` if no stroke was in progress.
    pub fn finish(&mut self) -> bool {
        let Some(stroke) = self.current.take() else {
            return false;
        };
        log::debug!("ink: stroke finished with {} points", stroke.points().len());
        self.history.push(stroke);
        true
    }

    /// Drops the in-progress stroke without recording it.
    pub fn cancel(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Undoes the most recent finalized stroke.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            log::debug!("ink: undo, {} strokes remain", self.history.len());
        }
        changed
    }

    /// Re-appends the most recently undone stroke.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            log::debug!("ink: redo, {} strokes", self.history.len());
        }
        changed
    }

    /// Drops every stroke, including one in progress, and the redo stack.
    pub fn clear(&mut self) -> bool {
        let dropped_current = self.cancel();
        let cleared = self.history.clear();
        if cleared || dropped_current {
            log::debug!("ink: cleared");
        }
        cleared || dropped_current
    }

    /// Returns the style the next stroke will use.
    #[must_use]
    pub fn style(&self) -> &InkStyle {
        &self.style
    }

    /// Replaces the style for subsequent strokes.
    pub fn set_style(&mut self, style: InkStyle) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Sets the color for subsequent strokes.
    pub fn set_color(&mut self, color: Color) {
        self.style = self.style.with_color(color);
    }

    /// Sets the width for subsequent strokes.
    pub fn set_width(&mut self, width: f64) -> Result<(), StyleError> {
        self.style = self.style.with_width(width)?;
        Ok(())
    }

    /// Sets the opacity for subsequent strokes.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), StyleError> {
        self.style = self.style.with_opacity(opacity)?;
        Ok(())
    }

    /// Returns the finalized history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the in-progress stroke, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Iterates every stroke in paint order: history, then the in-progress one.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + Clone {
        self.history.strokes().iter().chain(self.current.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;
    use peniko::Color;

    use super::InkEngine;
    use crate::{InkStyle, StyleError};

    #[test]
    fn tap_keeps_a_single_point() {
        let mut ink = InkEngine::default();
        ink.begin(Point::new(3.0, 4.0));
        assert!(ink.is_drawing());
        assert!(ink.finish());
        assert!(!ink.is_drawing());
        assert_eq!(ink.history().strokes()[0].points(), [Point::new(3.0, 4.0)]);
    }

    #[test]
    fn append_drops_nearby_points() {
        let mut ink = InkEngine::default();
        ink.begin(Point::ZERO);
        assert!(!ink.append(Point::new(0.1, 0.1)));
        assert!(ink.append(Point::new(1.0, 0.0)));
        assert_eq!(ink.current().map(|s| s.points().len()), Some(2));

        let mut dense = InkEngine::default().with_min_point_distance(0.0);
        dense.begin(Point::ZERO);
        assert!(dense.append(Point::ZERO));
    }

    #[test]
    fn idle_operations_are_noops() {
        let mut ink = InkEngine::default();
        assert!(!ink.append(Point::ZERO));
        assert!(!ink.finish());
        assert!(!ink.undo());
        assert!(!ink.redo());
        assert!(!ink.clear());
    }

    #[test]
    fn begin_finishes_the_previous_stroke() {
        let mut ink = InkEngine::default();
        ink.begin(Point::ZERO);
        ink.begin(Point::new(10.0, 0.0));
        assert_eq!(ink.history().len(), 1);
        assert!(ink.is_drawing());
    }

    #[test]
    fn style_applies_only_to_later_strokes() {
        let mut ink = InkEngine::default();
        ink.begin(Point::ZERO);
        ink.set_color(Color::WHITE);
        ink.set_width(10.0).unwrap();
        ink.finish();
        ink.begin(Point::new(5.0, 5.0));
        ink.finish();

        let strokes = ink.history().strokes();
        assert_eq!(strokes[0].style(), &InkStyle::default());
        assert_eq!(strokes[1].style().color, Color::WHITE);
        assert_eq!(strokes[1].style().width, 10.0);
    }

    #[test]
    fn invalid_style_is_rejected_and_kept() {
        let mut ink = InkEngine::default();
        assert_eq!(ink.set_width(-1.0), Err(StyleError::Width(-1.0)));
        assert_eq!(ink.set_opacity(2.0), Err(StyleError::Opacity(2.0)));
        let bad = InkStyle {
            width: 0.0,
            ..InkStyle::default()
        };
        assert!(ink.set_style(bad).is_err());
        assert_eq!(ink.style(), &InkStyle::default());
    }

    #[test]
    fn strokes_iterates_history_then_current() {
        let mut ink = InkEngine::default();
        ink.begin(Point::new(1.0, 0.0));
        ink.finish();
        ink.begin(Point::new(2.0, 0.0));
        let xs: Vec<f64> = ink.strokes().map(|s| s.points()[0].x).collect();
        assert_eq!(xs, [1.0, 2.0]);
    }

    #[test]
    fn new_stroke_clears_redo() {
        let mut ink = InkEngine::default();
        ink.begin(Point::ZERO);
        ink.finish();
        ink.undo();
        assert!(ink.history().can_redo());
        ink.begin(Point::new(4.0, 4.0));
        ink.finish();
        assert!(!ink.history().can_redo());
    }

    #[test]
    fn clear_drops_current_and_history() {
        let mut ink = InkEngine::default();
        ink.begin(Point::ZERO);
        ink.finish();
        ink.begin(Point::new(1.0, 1.0));
        assert!(ink.clear());
        assert!(!ink.is_drawing());
        assert!(ink.history().is_empty());
    }
}
