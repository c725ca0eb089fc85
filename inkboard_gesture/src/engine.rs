// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use inkboard_transform::{GestureStep, TransformStore};
use kurbo::{Point, Vec2};

use crate::contact::{ContactId, ContactPoint};
use crate::pinch::{PinchSample, angle_delta};

/// Error returned when a [`GestureConfig`] holds an unusable value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GestureConfigError {
    /// The smoothing factor was outside `(0, 1]`.
    #[error("smoothing factor must be in (0, 1], got {0}")]
    Smoothing(f64),
    /// A pixel threshold was negative or not finite.
    #[error("pixel threshold must be finite and non-negative, got {0}")]
    Threshold(f64),
}

/// Tuning for [`GestureEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Fraction of each raw increment that is applied, in `(0, 1]`.
    pub smoothing: f64,
    /// Samples whose midpoint, distance and arc movement all stay below this
    /// many pixels are dropped.
    pub min_motion: f64,
    /// Below this finger separation the distance ratio and angle are treated
    /// as unchanged.
    pub min_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.9,
            min_motion: 0.5,
            min_distance: 1.0,
        }
    }
}

impl GestureConfig {
    /// Creates a configuration with the given smoothing factor and default
    /// thresholds.
    pub fn new(smoothing: f64) -> Result<Self, GestureConfigError> {
        let config = Self {
            smoothing,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<(), GestureConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(GestureConfigError::Smoothing(self.smoothing));
        }
        for threshold in [self.min_motion, self.min_distance] {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(GestureConfigError::Threshold(threshold));
            }
        }
        Ok(())
    }
}

/// The smoothed increment applied by one [`GestureEngine::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureUpdate {
    /// Smoothed screen-space translation.
    pub translation: Vec2,
    /// Smoothed rotation in degrees.
    pub rotation_degrees: f64,
    /// Smoothed scale ratio, `1 + (raw - 1) * k`.
    pub scale: f64,
    /// Screen-space midpoint the increment was anchored at.
    pub midpoint: Point,
    /// Whether the transform store accepted the increment.
    pub applied: bool,
}

#[derive(Clone, Copy, Debug)]
struct Baseline {
    ids: (ContactId, ContactId),
    sample: PinchSample,
}

/// Two-contact pan/zoom/rotate state machine.
///
/// Contacts passed to [`GestureEngine::begin`] and [`GestureEngine::update`]
/// must already be ordered (see [`crate::ordered_pair`]).
#[derive(Clone, Debug, Default)]
pub struct GestureEngine {
    config: GestureConfig,
    baseline: Option<Baseline>,
}

impl GestureEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            baseline: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next update.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Returns the identifiers of the contacts driving the active gesture.
    #[must_use]
    pub fn contact_ids(&self) -> Option<(ContactId, ContactId)> {
        self.baseline.map(|b| b.ids)
    }

    /// Starts a gesture with the given ordered pair as the baseline sample.
    ///
    /// Starting while already active replaces the baseline.
    pub fn begin(&mut self, first: ContactPoint, second: ContactPoint) {
        let sample = PinchSample::from_pair(first, second);
        log::debug!(
            "gesture begin: contacts ({:?}, {:?}) distance {}",
            first.id,
            second.id,
            sample.distance
        );
        self.baseline = Some(Baseline {
            ids: (first.id, second.id),
            sample,
        });
    }

    /// Folds one two-contact move sample into `store`.
    ///
    /// Returns the applied increment, or `None` if the engine is idle, the
    /// contact identities changed (the sample becomes the new baseline), or
    /// the motion was below [`GestureConfig::min_motion`].
    pub fn update(
        &mut self,
        first: ContactPoint,
        second: ContactPoint,
        store: &mut TransformStore,
    ) -> Option<GestureUpdate> {
        let baseline = self.baseline.as_mut()?;
        let sample = PinchSample::from_pair(first, second);
        if baseline.ids != (first.id, second.id) {
            log::debug!("gesture contacts changed; re-baselining");
            *baseline = Baseline {
                ids: (first.id, second.id),
                sample,
            };
            return None;
        }

        let config = self.config;
        let previous = baseline.sample;
        let raw_translation = sample.midpoint - previous.midpoint;
        let measurable =
            previous.distance >= config.min_distance && sample.distance >= config.min_distance;
        let (raw_ratio, raw_rotation) = if measurable {
            (
                sample.distance / previous.distance,
                angle_delta(sample.angle, previous.angle),
            )
        } else {
            (1.0, 0.0)
        };

        let arc = (raw_rotation * previous.distance * 0.5).abs();
        if raw_translation.hypot() < config.min_motion
            && (sample.distance - previous.distance).abs() < config.min_motion
            && arc < config.min_motion
        {
            log::trace!("gesture sample below motion threshold; dropped");
            return None;
        }

        let k = config.smoothing;
        let translation = raw_translation * k;
        let rotation_degrees = raw_rotation.to_degrees() * k;
        let scale = 1.0 + (raw_ratio - 1.0) * k;

        let step = GestureStep {
            local_translation: store.to_local_vector(translation),
            local_pivot: store.to_local_point(sample.midpoint),
            rotation_degrees,
            scale,
        };
        let applied = store.apply_gesture(step);
        log::trace!(
            "gesture update: translate {translation:?} rotate {rotation_degrees} scale {scale}"
        );

        baseline.sample = sample;
        Some(GestureUpdate {
            translation,
            rotation_degrees,
            scale,
            midpoint: sample.midpoint,
            applied,
        })
    }

    /// Ends the gesture and clears the baseline.
    pub fn end(&mut self) {
        if self.baseline.take().is_some() {
            log::debug!("gesture end");
        }
    }
}
