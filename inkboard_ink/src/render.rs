// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use inkboard_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingBackendExt, PaintDesc, PaintId, PathDesc, PathId,
    StateOp, StrokeStyle,
};
use kurbo::{BezPath, Cap, Circle, Join, Shape};
use peniko::Brush;

use crate::stroke::{Stroke, StrokeShape};

/// Replays a full stroke history into an imaging backend.
///
/// Every call to [`InkRenderer::render`] produces a complete frame: clear,
/// fixed device scale, then every stroke in paint order. Resources created for
/// a frame stay alive until the next frame (or [`InkRenderer::release`]).
#[derive(Debug, Default)]
pub struct InkRenderer {
    paths: Vec<PathId>,
    paints: Vec<PaintId>,
}

impl InkRenderer {
    /// Creates a renderer holding no backend resources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `strokes` as a fresh frame.
    ///
    /// `device_scale` maps logical surface units to device pixels and is
    /// unaffected by pan, zoom, or rotation.
    pub fn render<'a, B>(
        &mut self,
        backend: &mut B,
        device_scale: f64,
        strokes: impl IntoIterator<Item = &'a Stroke>,
    ) where
        B: ImagingBackend + ?Sized,
    {
        self.release(backend);
        backend.draw(DrawOp::Clear);
        backend.state(StateOp::SetTransform(Affine::scale(device_scale)));

        let mut count = 0_usize;
        for stroke in strokes {
            self.render_stroke(backend, stroke);
            count += 1;
        }
        log::trace!("ink: rendered {count} strokes at device scale {device_scale}");
    }

    /// Destroys the resources created for the last frame.
    pub fn release<B>(&mut self, backend: &mut B)
    where
        B: ImagingBackend + ?Sized,
    {
        for id in self.paths.drain(..) {
            backend.destroy_path(id);
        }
        for id in self.paints.drain(..) {
            backend.destroy_paint(id);
        }
    }

    fn render_stroke<B>(&mut self, backend: &mut B, stroke: &Stroke)
    where
        B: ImagingBackend + ?Sized,
    {
        let style = stroke.style();
        let paint = backend.create_paint(PaintDesc {
            brush: Brush::Solid(style.color),
        });
        self.paints.push(paint);

        let shape = stroke.shape();
        let path = match &shape {
            StrokeShape::Dot(_) => None,
            StrokeShape::Segment(line) => Some(self.create_path(backend, line.to_path(0.1))),
            StrokeShape::Curve { path, .. } => Some(self.create_path(backend, path.clone())),
        };
        let pen = StrokeStyle::new(style.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);

        let emit = |backend: &mut B| {
            backend.state(StateOp::SetPaint(paint));
            match shape {
                StrokeShape::Dot(dot) => fill_circle(backend, dot),
                StrokeShape::Segment(_) => {
                    backend.state(StateOp::SetStroke(pen));
                    if let Some(path) = path {
                        backend.draw(DrawOp::StrokePath(path));
                    }
                }
                StrokeShape::Curve { end_cap, .. } => {
                    backend.state(StateOp::SetStroke(pen));
                    if let Some(path) = path {
                        backend.draw(DrawOp::StrokePath(path));
                    }
                    fill_circle(backend, end_cap);
                }
            }
        };

        if style.opacity < 1.0 {
            backend.with_opacity_layer(style.opacity, emit);
        } else {
            emit(backend);
        }
    }

    fn create_path<B>(&mut self, backend: &mut B, path: BezPath) -> PathId
    where
        B: ImagingBackend + ?Sized,
    {
        let id = backend.create_path(PathDesc { path });
        self.paths.push(id);
        id
    }
}

fn fill_circle<B: ImagingBackend + ?Sized>(backend: &mut B, circle: Circle) {
    backend.draw(DrawOp::FillCircle {
        cx: circle.center.x,
        cy: circle.center.y,
        radius: circle.radius,
    });
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use inkboard_imaging::{Affine, DrawOp, LayerOp, StateOp};
    use inkboard_imaging_ref::{Event, RefBackend, ResolvedDraw};
    use kurbo::{Cap, Join, Point};
    use peniko::{Brush, Color};

    use super::InkRenderer;
    use crate::{InkStyle, Stroke};

    fn stroke(points: &[(f64, f64)], style: InkStyle) -> Stroke {
        Stroke::from_points(points.iter().map(|&p| Point::from(p)).collect(), style).unwrap()
    }

    fn draws(backend: &RefBackend) -> Vec<ResolvedDraw> {
        backend.last_frame().into_iter().map(|(d, _)| d).collect()
    }

    #[test]
    fn frame_starts_with_clear_and_device_scale() {
        let mut backend = RefBackend::default();
        let mut renderer = InkRenderer::new();
        renderer.render(&mut backend, 2.0, core::iter::empty());
        let events = backend.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::Draw { op: DrawOp::Clear, .. }));
        assert!(matches!(
            &events[1],
            Event::State { op: StateOp::SetTransform(t), .. } if *t == Affine::scale(2.0)
        ));
    }

    #[test]
    fn shapes_map_to_draws() {
        let style = InkStyle::default().with_width(4.0).unwrap();
        let strokes = [
            stroke(&[(1.0, 1.0)], style),
            stroke(&[(0.0, 0.0), (10.0, 0.0)], style),
            stroke(&[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0)], style),
        ];
        let mut backend = RefBackend::default();
        InkRenderer::new().render(&mut backend, 1.0, &strokes);

        let frame = backend.last_frame();
        assert_eq!(frame.len(), 5);
        assert_eq!(frame[0].0, ResolvedDraw::Clear);
        assert_eq!(
            frame[1].0,
            ResolvedDraw::FillCircle {
                cx: 1.0,
                cy: 1.0,
                radius: 2.0
            }
        );
        assert!(matches!(frame[2].0, ResolvedDraw::StrokePath(Some(_))));
        assert!(matches!(frame[3].0, ResolvedDraw::StrokePath(Some(_))));
        let ResolvedDraw::FillCircle { cx, cy, radius } = frame[4].0 else {
            panic!("expected end cap");
        };
        assert_eq!((cx, cy), (20.0, 10.0));
        assert!((radius - 4.0 / 2.2).abs() < 1e-12);

        let pen = frame[2].1.stroke.as_ref().unwrap();
        assert_eq!(pen.width, 4.0);
        assert_eq!(pen.join, Join::Round);
        assert_eq!(pen.start_cap, Cap::Round);
        assert_eq!(pen.end_cap, Cap::Round);
    }

    #[test]
    fn each_stroke_uses_its_own_color() {
        let red = InkStyle::default().with_color(Color::from_rgb8(255, 0, 0));
        let blue = InkStyle::default().with_color(Color::from_rgb8(0, 0, 255));
        let strokes = [stroke(&[(0.0, 0.0)], red), stroke(&[(5.0, 5.0)], blue)];
        let mut backend = RefBackend::default();
        InkRenderer::new().render(&mut backend, 1.0, &strokes);

        let frame = backend.last_frame();
        assert_eq!(frame[1].1.brush, Some(Brush::Solid(red.color)));
        assert_eq!(frame[2].1.brush, Some(Brush::Solid(blue.color)));
    }

    #[test]
    fn partial_opacity_draws_inside_a_layer() {
        let faint = InkStyle::default().with_opacity(0.5).unwrap();
        let strokes = [stroke(&[(0.0, 0.0), (3.0, 0.0)], faint)];
        let mut backend = RefBackend::default();
        InkRenderer::new().render(&mut backend, 1.0, &strokes);

        let (_, state) = &backend.last_frame()[1];
        assert_eq!(state.layer_stack_depth, 1);
        assert_eq!(state.layer_top, Some(LayerOp { opacity: 0.5 }));
        assert_eq!(backend.layer_depth(), 0);
    }

    #[test]
    fn resources_are_released_on_next_frame() {
        let strokes = [
            stroke(&[(0.0, 0.0), (3.0, 0.0)], InkStyle::default()),
            stroke(&[(0.0, 0.0), (3.0, 0.0), (6.0, 3.0)], InkStyle::default()),
        ];
        let mut backend = RefBackend::default();
        let mut renderer = InkRenderer::new();
        renderer.render(&mut backend, 1.0, &strokes);
        assert_eq!(backend.live_paths(), 2);
        assert_eq!(backend.live_paints(), 2);

        renderer.render(&mut backend, 1.0, &strokes[..1]);
        assert_eq!(backend.live_paths(), 1);
        assert_eq!(backend.live_paints(), 1);

        renderer.release(&mut backend);
        assert_eq!(backend.live_paths(), 0);
        assert_eq!(backend.live_paints(), 0);
    }

    #[test]
    fn replaying_the_same_history_repeats_the_frame() {
        let strokes = [
            stroke(&[(0.0, 0.0), (3.0, 0.0), (6.0, 3.0)], InkStyle::default()),
            stroke(&[(9.0, 9.0)], InkStyle::default()),
        ];
        let mut backend = RefBackend::default();
        let mut renderer = InkRenderer::new();
        renderer.render(&mut backend, 1.5, &strokes);
        let first = draws(&backend);
        renderer.render(&mut backend, 1.5, &strokes);
        assert_eq!(draws(&backend), first);
        assert_eq!(backend.clear_count(), 2);
    }
}
