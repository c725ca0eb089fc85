// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::stroke::Stroke;

/// Finalized strokes in paint order, plus a redo stack.
///
/// Insertion order is z-order is chronological order. Undo moves the most
/// recent stroke onto the redo stack; redo moves it back to the *end* of the
/// history. Any other mutation clears the redo stack: branching history is not
/// supported.
///
/// The revision counter increases only when the history or the redo stack
/// actually changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    strokes: Vec<Stroke>,
    redo: Vec<Stroke>,
    revision: u64,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns finalized strokes, oldest first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns undone strokes, most recently undone last.
    #[must_use]
    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo
    }

    /// Returns the number of finalized strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if there are no finalized strokes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Returns `true` if [`History::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Returns `true` if [`History::redo`] would do something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a finalized stroke and clears the redo stack.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.redo.clear();
        self.revision += 1;
    }

    /// Moves the most recent stroke to the redo stack.
    ///
    /// Returns `false` (and changes nothing) if the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.strokes.pop() else {
            return false;
        };
        self.redo.push(stroke);
        self.revision += 1;
        true
    }

    /// Re-appends the most recently undone stroke.
    ///
    /// Returns `false` (and changes nothing) if the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.redo.pop() else {
            return false;
        };
        self.strokes.push(stroke);
        self.revision += 1;
        true
    }

    /// Removes every stroke and clears the redo stack.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn clear(&mut self) -> bool {
        if self.strokes.is_empty() && self.redo.is_empty() {
            return false;
        }
        self.strokes.clear();
        self.redo.clear();
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::History;
    use crate::{InkStyle, Stroke};

    fn stroke(x: f64) -> Stroke {
        Stroke::new(Point::new(x, 0.0), InkStyle::default())
    }

    fn xs(history: &History) -> alloc::vec::Vec<f64> {
        history.strokes().iter().map(|s| s.points()[0].x).collect()
    }

    #[test]
    fn empty_history_operations_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(!history.clear());
        assert_eq!(history.revision(), 0);
    }

    #[test]
    fn undo_redo_is_an_inverse() {
        let mut history = History::new();
        for x in [1.0, 2.0, 3.0] {
            history.push(stroke(x));
        }
        let before = history.strokes().to_vec();

        assert!(history.undo());
        assert_eq!(xs(&history), [1.0, 2.0]);
        assert!(history.can_redo());
        assert!(history.redo());
        assert_eq!(history.strokes(), before.as_slice());
        assert!(!history.can_redo());
    }

    #[test]
    fn push_clears_redo() {
        let mut history = History::new();
        history.push(stroke(1.0));
        history.push(stroke(2.0));
        history.undo();
        history.push(stroke(3.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(xs(&history), [1.0, 3.0]);
    }

    #[test]
    fn redo_reappends_at_the_end() {
        let mut history = History::new();
        history.push(stroke(1.0));
        history.push(stroke(2.0));
        history.undo();
        history.undo();
        // Redo restores the most recently undone stroke first.
        history.redo();
        assert_eq!(xs(&history), [1.0]);
        history.redo();
        assert_eq!(xs(&history), [1.0, 2.0]);
    }

    #[test]
    fn clear_drops_everything_and_bumps_revision() {
        let mut history = History::new();
        history.push(stroke(1.0));
        history.push(stroke(2.0));
        history.undo();
        let rev = history.revision();
        assert!(history.clear());
        assert!(history.is_empty());
        assert!(!history.can_redo());
        assert_eq!(history.revision(), rev + 1);
    }
}
