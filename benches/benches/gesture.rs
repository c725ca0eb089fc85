// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use inkboard_gesture::{ContactId, ContactPoint, GestureConfig, GestureEngine};
use inkboard_transform::TransformStore;
use kurbo::Point;

fn pinch_samples(n: usize) -> Vec<(ContactPoint, ContactPoint)> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.01;
            let a = Point::new(400.0 - t * 50.0, 400.0 + t.sin() * 20.0);
            let b = Point::new(600.0 + t * 50.0, 420.0 + t.cos() * 20.0);
            (
                ContactPoint::new(ContactId(1), a),
                ContactPoint::new(ContactId(2), b),
            )
        })
        .collect()
}

fn bench_gesture_updates(c: &mut Criterion) {
    let samples = pinch_samples(1_000);
    c.bench_function("gesture/update_1000_samples", |b| {
        b.iter_batched(
            || {
                let mut engine = GestureEngine::new(GestureConfig::default());
                engine.begin(samples[0].0, samples[0].1);
                (engine, TransformStore::new())
            },
            |(mut engine, mut store)| {
                for &(first, second) in &samples[1..] {
                    black_box(engine.update(first, second, &mut store));
                }
                black_box(store.transform());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_point_mapping(c: &mut Criterion) {
    let mut store = TransformStore::new();
    let mut engine = GestureEngine::new(GestureConfig::default());
    let samples = pinch_samples(50);
    engine.begin(samples[0].0, samples[0].1);
    for &(first, second) in &samples[1..] {
        engine.update(first, second, &mut store);
    }

    c.bench_function("transform/to_local_point", |b| {
        b.iter(|| black_box(store.to_local_point(black_box(Point::new(321.0, 654.0)))));
    });
}

criterion_group!(benches, bench_gesture_updates, bench_point_mapping);
criterion_main!(benches);
