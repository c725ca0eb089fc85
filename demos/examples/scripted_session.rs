// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted touch session.
//!
//! Loads a surface configuration from JSON, replays a fixed sequence of touch
//! samples (a stroke, a pinch, a second stroke, undo and redo) against the
//! recording backend, and prints the notifications and the final frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p inkboard_demos --example scripted_session`

use inkboard::{ContactId, ContactPoint, InkboardConfig, Notification, Surface};
use inkboard_imaging_ref::{RefBackend, ResolvedDraw};
use kurbo::Point;
use peniko::Color;

const CONFIG: &str = include_str!("../session.json");

fn touch(id: u64, x: f64, y: f64) -> ContactPoint {
    ContactPoint::new(ContactId(id), Point::new(x, y))
}

fn report(surface: &mut Surface<RefBackend>) {
    for note in surface.drain_notifications() {
        match note {
            Notification::TransformChanged {
                transform,
                is_identity,
            } => {
                println!(
                    "  transform -> {:?} (reset {})",
                    transform.as_coeffs(),
                    if is_identity { "hidden" } else { "shown" }
                );
            }
            Notification::HistoryChanged {
                len,
                can_undo,
                can_redo,
            } => {
                println!("  history -> {len} strokes (undo: {can_undo}, redo: {can_redo})");
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config: InkboardConfig = serde_json::from_str(CONFIG)?;
    let mut surface = Surface::new(config, RefBackend::default())?;
    println!("surface: {:?} on screen", surface.surface_screen_rect());

    println!("stroke 1 (black wave)");
    for i in 0..=8 {
        let x = 100.0 + f64::from(i) * 25.0;
        let y = 200.0 + if i % 2 == 0 { 0.0 } else { 30.0 };
        surface.handle_contacts(&[touch(1, x, y)]);
    }
    surface.handle_contacts(&[]);
    report(&mut surface);

    println!("pinch out and rotate");
    surface.handle_contacts(&[touch(2, 300.0, 400.0), touch(3, 400.0, 400.0)]);
    surface.handle_contacts(&[touch(2, 290.0, 390.0), touch(3, 430.0, 430.0)]);
    surface.handle_contacts(&[touch(2, 280.0, 380.0), touch(3, 450.0, 470.0)]);
    surface.handle_contacts(&[]);
    report(&mut surface);

    println!("stroke 2 (translucent red tap)");
    surface.set_color(Color::from_rgb8(220, 40, 40));
    surface.set_width(10.0)?;
    surface.set_opacity(0.5)?;
    surface.handle_contacts(&[touch(4, 500.0, 600.0)]);
    surface.handle_contacts(&[]);
    report(&mut surface);

    println!("undo, redo, reset");
    surface.undo();
    surface.redo();
    surface.reset_transform();
    report(&mut surface);

    println!("final frame:");
    for (draw, state) in surface.backend().last_frame() {
        let what = match draw {
            ResolvedDraw::Clear => "clear".to_owned(),
            ResolvedDraw::FillCircle { cx, cy, radius } => {
                format!("dot at ({cx:.1}, {cy:.1}) r={radius:.2}")
            }
            ResolvedDraw::StrokePath(Some(path)) => {
                format!("stroke with {} elements", path.elements().len())
            }
            ResolvedDraw::StrokePath(None) => "stroke with a released path".to_owned(),
        };
        println!("  {what} (layers: {})", state.layer_stack_depth);
    }

    Ok(())
}
