// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture basics.
//!
//! Feed a pinch directly into a `GestureEngine` and watch the transform store
//! accumulate smoothed increments, then map points between spaces.
//!
//! Run:
//! - `cargo run -p inkboard_demos --example gesture_basics`

use inkboard_gesture::{ContactId, ContactPoint, GestureConfig, GestureEngine};
use inkboard_transform::TransformStore;
use kurbo::Point;

fn main() {
    let mut store = TransformStore::new();
    let mut gesture = GestureEngine::new(GestureConfig::default());

    let a = |x, y| ContactPoint::new(ContactId(1), Point::new(x, y));
    let b = |x, y| ContactPoint::new(ContactId(2), Point::new(x, y));

    gesture.begin(a(100.0, 100.0), b(200.0, 100.0));
    for (second, label) in [
        (b(300.0, 100.0), "spread to double distance"),
        (b(300.0, 100.2), "sub-threshold jitter"),
        (b(200.0, 200.0), "swing the second finger"),
    ] {
        match gesture.update(a(100.0, 100.0), second, &mut store) {
            Some(update) => println!(
                "{label}: scale x{:.3}, rotate {:.2} deg, pan {:?} -> zoom {:.3}",
                update.scale,
                update.rotation_degrees,
                update.translation,
                store.zoom()
            ),
            None => println!("{label}: dropped"),
        }
    }
    gesture.end();

    let local = Point::new(50.0, 50.0);
    let screen = store.to_screen_point(local);
    println!("local {local:?} is on screen at {screen:?}");
    println!("and maps back to {:?}", store.to_local_point(screen));

    store.reset();
    println!("after reset: identity = {}", store.is_identity());
}
