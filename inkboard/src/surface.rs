// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use inkboard_gesture::{ContactId, ContactPoint, GestureEngine, ordered_pair};
use inkboard_imaging::ImagingBackend;
use inkboard_ink::{History, InkEngine, InkRenderer, InkStyle, StyleError};
use inkboard_transform::TransformStore;
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::Color;
use smallvec::SmallVec;

use crate::config::{ConfigError, InkboardConfig, SurfaceGeometry};

/// Which engine currently owns the input stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No engine is active.
    #[default]
    Idle,
    /// A single contact is laying down a stroke.
    Drawing,
    /// Two contacts are panning, zooming, or rotating the surface.
    Transforming,
}

/// Change the host should reflect in its own UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    /// The surface transform changed or was reset.
    TransformChanged {
        /// The new surface transform.
        transform: Affine,
        /// Whether the transform is the identity (nothing to reset).
        is_identity: bool,
    },
    /// The stroke history changed.
    HistoryChanged {
        /// Number of finalized strokes.
        len: usize,
        /// Whether undo would do something.
        can_undo: bool,
        /// Whether redo would do something.
        can_redo: bool,
    },
}

/// A touch drawing surface rendering into an imaging backend.
///
/// All input arrives through [`Surface::handle_contacts`], which receives the
/// full set of active contacts on every sample and routes it to at most one
/// engine. Any change to the strokes re-renders the whole history into the
/// backend.
#[derive(Debug)]
pub struct Surface<B: ImagingBackend> {
    geometry: SurfaceGeometry,
    transform: TransformStore,
    gesture: GestureEngine,
    ink: InkEngine,
    renderer: InkRenderer,
    backend: B,
    stroke_contact: Option<ContactId>,
    previous_ids: SmallVec<[ContactId; 4]>,
    notifications: Vec<Notification>,
    seen_transform_revision: u64,
    seen_history_revision: u64,
}

impl<B: ImagingBackend> Surface<B> {
    /// Creates a surface and renders its first (empty) frame.
    pub fn new(config: InkboardConfig, backend: B) -> Result<Self, ConfigError> {
        config.validate()?;
        let transform = TransformStore::new();
        let ink = InkEngine::new(config.ink).with_min_point_distance(config.min_point_distance);
        let mut surface = Self {
            geometry: config.geometry,
            seen_transform_revision: transform.revision(),
            seen_history_revision: ink.history().revision(),
            transform,
            gesture: GestureEngine::new(config.gesture),
            ink,
            renderer: InkRenderer::new(),
            backend,
            stroke_contact: None,
            previous_ids: SmallVec::new(),
            notifications: Vec::new(),
        };
        surface.render();
        Ok(surface)
    }

    /// Routes one input sample and returns the resulting mode.
    ///
    /// `contacts` is every contact currently touching, in screen space.
    pub fn handle_contacts(&mut self, contacts: &[ContactPoint]) -> Mode {
        let previous = core::mem::replace(
            &mut self.previous_ids,
            contacts.iter().map(|c| c.id).collect(),
        );
        let ink_dirty = match contacts {
            [] => self.end_all(),
            [contact] => self.single_contact(*contact, &previous),
            [_, _] => self.two_contacts(contacts, &previous),
            _ => {
                log::trace!("{} contacts; ending active mode", contacts.len());
                self.end_all()
            }
        };
        self.sync(ink_dirty);
        self.mode()
    }

    fn single_contact(&mut self, contact: ContactPoint, previous: &[ContactId]) -> bool {
        if self.gesture.is_active() {
            // The finger left behind by a pinch is in `previous`, so it never
            // starts a stroke below.
            self.gesture.end();
        }
        let mut ink_dirty = false;
        if self.ink.is_drawing() {
            if self.stroke_contact == Some(contact.id) {
                if !self.contains_screen_point(contact.pos) {
                    return false;
                }
                let local = self.screen_to_local(contact.pos);
                let appended = self.ink.append(local);
                if appended {
                    log::trace!("ink append {local:?}");
                }
                return appended;
            }
            // A different finger replaced the drawing one within one sample.
            ink_dirty = self.finish_stroke();
        }
        // Only a contact that just landed may start a stroke.
        if previous.contains(&contact.id) || !self.contains_screen_point(contact.pos) {
            return ink_dirty;
        }
        let local = self.screen_to_local(contact.pos);
        self.ink.begin(local);
        self.stroke_contact = Some(contact.id);
        true
    }

    fn two_contacts(&mut self, contacts: &[ContactPoint], previous: &[ContactId]) -> bool {
        let Some((first, second)) = ordered_pair(contacts) else {
            return false;
        };
        let first = self.to_surface_space(first);
        let second = self.to_surface_space(second);

        if self.gesture.contact_ids() == Some((first.id, second.id)) {
            self.gesture.update(first, second, &mut self.transform);
            return false;
        }

        let ink_dirty = self.finish_stroke();
        self.gesture.end();
        let any_new = !previous.contains(&first.id) || !previous.contains(&second.id);
        if any_new && self.contains_surface_point(first.pos) && self.contains_surface_point(second.pos)
        {
            self.gesture.begin(first, second);
        }
        ink_dirty
    }

    fn finish_stroke(&mut self) -> bool {
        self.stroke_contact = None;
        self.ink.finish()
    }

    fn end_all(&mut self) -> bool {
        self.gesture.end();
        self.finish_stroke()
    }

    /// Emits notifications for revisions that moved and re-renders if needed.
    fn sync(&mut self, mut ink_dirty: bool) {
        let transform_revision = self.transform.revision();
        if transform_revision != self.seen_transform_revision {
            self.seen_transform_revision = transform_revision;
            self.notifications.push(Notification::TransformChanged {
                transform: self.transform.transform(),
                is_identity: self.transform.is_identity(),
            });
        }
        let history = self.ink.history();
        if history.revision() != self.seen_history_revision {
            self.seen_history_revision = history.revision();
            self.notifications.push(Notification::HistoryChanged {
                len: history.len(),
                can_undo: history.can_undo(),
                can_redo: history.can_redo(),
            });
            ink_dirty = true;
        }
        if ink_dirty {
            self.render();
        }
    }

    /// Re-renders the full history (and any stroke in progress).
    pub fn render(&mut self) {
        self.renderer.render(
            &mut self.backend,
            self.geometry.device_scale,
            self.ink.strokes(),
        );
    }

    /// Undoes the most recent finalized stroke.
    pub fn undo(&mut self) -> bool {
        let changed = self.ink.undo();
        self.sync(false);
        changed
    }

    /// Redoes the most recently undone stroke.
    pub fn redo(&mut self) -> bool {
        let changed = self.ink.redo();
        self.sync(false);
        changed
    }

    /// Erases every stroke, including one in progress.
    pub fn clear(&mut self) -> bool {
        self.stroke_contact = None;
        let changed = self.ink.clear();
        self.sync(changed);
        changed
    }

    /// Returns the surface to the identity transform.
    ///
    /// Always queues a [`Notification::TransformChanged`].
    pub fn reset_transform(&mut self) {
        if self.transform.reset() {
            log::debug!("surface transform reset");
        }
        self.sync(false);
    }

    /// Replaces the style used by subsequent strokes.
    pub fn set_ink_style(&mut self, style: InkStyle) -> Result<(), StyleError> {
        self.ink.set_style(style)
    }

    /// Sets the color used by subsequent strokes.
    pub fn set_color(&mut self, color: Color) {
        self.ink.set_color(color);
    }

    /// Sets the width used by subsequent strokes.
    pub fn set_width(&mut self, width: f64) -> Result<(), StyleError> {
        self.ink.set_width(width)
    }

    /// Sets the opacity used by subsequent strokes.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), StyleError> {
        self.ink.set_opacity(opacity)
    }

    /// Sets the cumulative zoom range the gesture may reach.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.transform.set_zoom_limits(min_zoom, max_zoom);
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.ink.is_drawing() {
            Mode::Drawing
        } else if self.gesture.is_active() {
            Mode::Transforming
        } else {
            Mode::Idle
        }
    }

    /// Returns the current surface transform (local to surface space).
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform.transform()
    }

    /// Returns the transform store.
    #[must_use]
    pub fn transform_store(&self) -> &TransformStore {
        &self.transform
    }

    /// Returns the finalized stroke history.
    #[must_use]
    pub fn history(&self) -> &History {
        self.ink.history()
    }

    /// Returns the ink engine.
    #[must_use]
    pub fn ink(&self) -> &InkEngine {
        &self.ink
    }

    /// Returns the surface geometry.
    #[must_use]
    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    /// Returns the on-screen bounding box of the transformed surface.
    #[must_use]
    pub fn surface_screen_rect(&self) -> Rect {
        self.transform.to_screen_rect(self.geometry.local_bounds()) + self.top_offset()
    }

    /// Maps a screen-space point onto the surface's local coordinates.
    #[must_use]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        self.transform.to_local_point(screen - self.top_offset())
    }

    /// Returns the render backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the render backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Releases frame resources and returns the backend.
    pub fn into_backend(mut self) -> B {
        self.renderer.release(&mut self.backend);
        self.backend
    }

    /// Takes every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        core::mem::take(&mut self.notifications)
    }

    fn top_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.geometry.top_offset)
    }

    fn to_surface_space(&self, contact: ContactPoint) -> ContactPoint {
        ContactPoint::new(contact.id, contact.pos - self.top_offset())
    }

    fn contains_screen_point(&self, screen: Point) -> bool {
        contains_inclusive(self.surface_screen_rect(), screen)
    }

    fn contains_surface_point(&self, surface: Point) -> bool {
        contains_inclusive(
            self.transform.to_screen_rect(self.geometry.local_bounds()),
            surface,
        )
    }
}

/// Like [`Rect::contains`], but the right and bottom edges count as inside.
fn contains_inclusive(rect: Rect, point: Point) -> bool {
    (rect.x0..=rect.x1).contains(&point.x) && (rect.y0..=rect.y1).contains(&point.y)
}
