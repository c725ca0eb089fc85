// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point};

use crate::style::InkStyle;

/// Divisor applied to a curve's width to size its end-cap dot.
///
/// The midpoint construction stops the smoothed curve short of the last
/// sample; a dot of radius `width / END_CAP_DIVISOR` seals the visible end.
pub const END_CAP_DIVISOR: f64 = 2.2;

/// One continuous freehand ink path in surface-local coordinates.
///
/// A stroke always holds at least one point.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    style: InkStyle,
}

/// Geometry a [`Stroke`] renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeShape {
    /// A single point: a filled dot whose diameter is the stroke width.
    Dot(Circle),
    /// Two points: a straight stroked segment.
    Segment(Line),
    /// Three or more points: a smoothed stroked path plus a filled end cap.
    Curve {
        /// Smoothed path (see [`smooth_path`]).
        path: BezPath,
        /// Dot sealing the last point.
        end_cap: Circle,
    },
}

impl Stroke {
    /// Starts a stroke at `start` with the given style.
    #[must_use]
    pub fn new(start: Point, style: InkStyle) -> Self {
        Self {
            points: vec![start],
            style,
        }
    }

    /// Creates a stroke from a complete point list, or `None` if it is empty.
    #[must_use]
    pub fn from_points(points: Vec<Point>, style: InkStyle) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points, style })
        }
    }

    /// Returns the sampled points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the style captured when the stroke started.
    #[must_use]
    pub fn style(&self) -> &InkStyle {
        &self.style
    }

    /// Returns the most recently sampled point.
    #[must_use]
    pub fn last_point(&self) -> Point {
        // Never empty: `new` and `from_points` both guarantee a first point.
        self.points[self.points.len() - 1]
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the geometry this stroke renders as.
    #[must_use]
    pub fn shape(&self) -> StrokeShape {
        let width = self.style.width;
        match *self.points.as_slice() {
            [p] => StrokeShape::Dot(Circle::new(p, width / 2.0)),
            [p0, p1] => StrokeShape::Segment(Line::new(p0, p1)),
            _ => StrokeShape::Curve {
                path: smooth_path(&self.points),
                end_cap: Circle::new(self.last_point(), width / END_CAP_DIVISOR),
            },
        }
    }
}

/// Builds a continuously-differentiable path through sampled points.
///
/// Starting at the first point, each intermediate point becomes the control
/// point of a quadratic curve that ends at the midpoint between it and the
/// next point. A final straight segment runs into the last point. Fewer than
/// three points produce a plain polyline.
#[must_use]
pub fn smooth_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    for pair in rest.windows(2) {
        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
    }
    if let Some(&last) = rest.last() {
        path.line_to(last);
    }
    path
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Circle, Line, PathEl, Point};

    use super::{END_CAP_DIVISOR, Stroke, StrokeShape, smooth_path};
    use crate::InkStyle;

    fn style(width: f64) -> InkStyle {
        InkStyle::default().with_width(width).unwrap()
    }

    #[test]
    fn single_point_is_a_dot_of_stroke_width() {
        let stroke = Stroke::new(Point::new(5.0, 6.0), style(10.0));
        assert_eq!(
            stroke.shape(),
            StrokeShape::Dot(Circle::new(Point::new(5.0, 6.0), 5.0))
        );
    }

    #[test]
    fn two_points_are_a_segment() {
        let mut stroke = Stroke::new(Point::new(0.0, 0.0), style(3.0));
        stroke.push(Point::new(4.0, 3.0));
        assert_eq!(
            stroke.shape(),
            StrokeShape::Segment(Line::new((0.0, 0.0), (4.0, 3.0)))
        );
    }

    #[test]
    fn curve_threads_midpoints_and_caps_the_end() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 10.0),
        ];
        let stroke = Stroke::from_points(points, style(11.0)).unwrap();
        let StrokeShape::Curve { path, end_cap } = stroke.shape() else {
            panic!("expected a curve");
        };
        assert_eq!(
            path.elements(),
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::QuadTo(Point::new(10.0, 0.0), Point::new(15.0, 5.0)),
                PathEl::QuadTo(Point::new(20.0, 10.0), Point::new(25.0, 10.0)),
                PathEl::LineTo(Point::new(30.0, 10.0)),
            ]
        );
        assert_eq!(end_cap.center, Point::new(30.0, 10.0));
        assert!((end_cap.radius - 11.0 / END_CAP_DIVISOR).abs() < 1e-12);
    }

    #[test]
    fn three_points_make_one_quad() {
        let path = smooth_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ]);
        assert_eq!(
            path.elements(),
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::QuadTo(Point::new(10.0, 10.0), Point::new(15.0, 5.0)),
                PathEl::LineTo(Point::new(20.0, 0.0)),
            ]
        );
    }

    #[test]
    fn short_inputs_degrade_gracefully() {
        assert!(smooth_path(&[]).elements().is_empty());
        assert_eq!(
            smooth_path(&[Point::new(1.0, 2.0)]).elements(),
            [PathEl::MoveTo(Point::new(1.0, 2.0))]
        );
        assert_eq!(
            smooth_path(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).elements(),
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn empty_point_list_is_not_a_stroke() {
        assert!(Stroke::from_points(vec![], InkStyle::default()).is_none());
    }
}
