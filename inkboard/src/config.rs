// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use inkboard_gesture::{GestureConfig, GestureConfigError};
use inkboard_ink::{DEFAULT_MIN_POINT_DISTANCE, InkStyle, StyleError};
use kurbo::Rect;

/// Default logical (backing-store) width and height of the surface.
pub const DEFAULT_LOGICAL_SIZE: f64 = 1600.0;

/// Default height of the toolbar reserved above the surface, in screen units.
pub const DEFAULT_TOP_OFFSET: f64 = 70.0;

/// Error returned when an [`InkboardConfig`] cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A geometry field was non-finite or out of range.
    #[error("invalid surface geometry: {field} = {value}")]
    Geometry {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The minimum point distance was negative or not finite.
    #[error("minimum point distance must be finite and non-negative, got {0}")]
    MinPointDistance(f64),
    /// The initial ink style was invalid.
    #[error(transparent)]
    Style(#[from] StyleError),
    /// The gesture tuning was invalid.
    #[error(transparent)]
    Gesture(#[from] GestureConfigError),
}

/// Size and placement of the drawing surface.
///
/// The surface has a square backing store of `logical_size` device pixels
/// shown at `logical_size / device_scale` screen units, below a toolbar of
/// `top_offset` screen units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceGeometry {
    /// Backing-store width and height.
    pub logical_size: f64,
    /// Backing-store units per screen unit.
    pub device_scale: f64,
    /// Screen-space height reserved above the surface.
    pub top_offset: f64,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            logical_size: DEFAULT_LOGICAL_SIZE,
            device_scale: 1.0,
            top_offset: DEFAULT_TOP_OFFSET,
        }
    }
}

impl SurfaceGeometry {
    /// Creates a validated geometry.
    pub fn new(logical_size: f64, device_scale: f64, top_offset: f64) -> Result<Self, ConfigError> {
        let geometry = Self {
            logical_size,
            device_scale,
            top_offset,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Derives the geometry for a screen `screen_width` units wide, with the
    /// default logical size and toolbar height.
    pub fn from_screen_width(screen_width: f64) -> Result<Self, ConfigError> {
        if !(screen_width.is_finite() && screen_width > 0.0) {
            return Err(ConfigError::Geometry {
                field: "screen_width",
                value: screen_width,
            });
        }
        Self::new(
            DEFAULT_LOGICAL_SIZE,
            DEFAULT_LOGICAL_SIZE / screen_width,
            DEFAULT_TOP_OFFSET,
        )
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("logical_size", self.logical_size),
            ("device_scale", self.device_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Geometry { field, value });
            }
        }
        if !(self.top_offset.is_finite() && self.top_offset >= 0.0) {
            return Err(ConfigError::Geometry {
                field: "top_offset",
                value: self.top_offset,
            });
        }
        Ok(())
    }

    /// Side length of the surface in local units.
    #[must_use]
    pub fn local_size(&self) -> f64 {
        self.logical_size / self.device_scale
    }

    /// The untransformed surface rectangle in local units.
    #[must_use]
    pub fn local_bounds(&self) -> Rect {
        let size = self.local_size();
        Rect::new(0.0, 0.0, size, size)
    }
}

/// Everything needed to construct a [`Surface`](crate::Surface).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InkboardConfig {
    /// Surface size and placement.
    pub geometry: SurfaceGeometry,
    /// Two-finger gesture tuning.
    pub gesture: GestureConfig,
    /// Style of the first stroke.
    pub ink: InkStyle,
    /// Points closer than this to the previous sample are dropped.
    pub min_point_distance: f64,
}

impl Default for InkboardConfig {
    fn default() -> Self {
        Self {
            geometry: SurfaceGeometry::default(),
            gesture: GestureConfig::default(),
            ink: InkStyle::default(),
            min_point_distance: DEFAULT_MIN_POINT_DISTANCE,
        }
    }
}

impl InkboardConfig {
    /// Checks every nested setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.gesture.validate()?;
        self.ink.validate()?;
        if !(self.min_point_distance.is_finite() && self.min_point_distance >= 0.0) {
            return Err(ConfigError::MinPointDistance(self.min_point_distance));
        }
        Ok(())
    }
}
