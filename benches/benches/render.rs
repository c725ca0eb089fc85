// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use inkboard::{ContactId, ContactPoint, InkboardConfig, Surface};
use inkboard_imaging_ref::RefBackend;
use inkboard_ink::{InkEngine, InkRenderer, InkStyle, smooth_path};
use kurbo::Point;

/// Builds a history of `strokes` wavy strokes with `points` samples each.
fn history(strokes: usize, points: usize) -> InkEngine {
    let mut ink = InkEngine::new(InkStyle::default());
    for s in 0..strokes {
        let y0 = (s % 200) as f64 * 8.0;
        ink.begin(Point::new(0.0, y0));
        for i in 1..points {
            let x = i as f64 * 3.0;
            ink.append(Point::new(x, y0 + (x * 0.1).sin() * 5.0));
        }
        ink.finish();
    }
    ink
}

fn bench_full_rerender(c: &mut Criterion) {
    let mut group = c.benchmark_group("ink/render");

    // Every history mutation replays everything, so cost scales with the
    // total number of sampled points.
    for strokes in [10_usize, 100, 1_000] {
        let ink = history(strokes, 64);
        group.throughput(Throughput::Elements((strokes * 64) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(strokes), &ink, |b, ink| {
            let mut backend = RefBackend::default();
            let mut renderer = InkRenderer::new();
            b.iter(|| {
                backend.clear_events();
                renderer.render(&mut backend, 2.0, ink.strokes());
                black_box(backend.events().len());
            });
        });
    }
    group.finish();
}

fn bench_smooth_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("ink/smooth_path");
    for len in [16_usize, 256, 4_096] {
        let points: Vec<Point> = (0..len)
            .map(|i| Point::new(i as f64, (i as f64 * 0.2).cos() * 10.0))
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| black_box(smooth_path(points)));
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    let mut surface = Surface::new(InkboardConfig::default(), RefBackend::default()).unwrap();
    for s in 0..200_u64 {
        let y = 100.0 + (s % 100) as f64 * 10.0;
        for i in 0..32 {
            let x = 10.0 + f64::from(i) * 12.0;
            surface.handle_contacts(&[ContactPoint::new(ContactId(s), Point::new(x, y))]);
        }
        surface.handle_contacts(&[]);
    }

    c.bench_function("surface/undo_redo_200_strokes", |b| {
        b.iter(|| {
            surface.undo();
            surface.redo();
            surface.backend_mut().clear_events();
        });
    });
}

criterion_group!(
    benches,
    bench_full_rerender,
    bench_smooth_path,
    bench_undo_redo
);
criterion_main!(benches);
