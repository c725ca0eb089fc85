// Copyright 2025 the Inkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Stroke widths offered by a typical size picker.
pub const PRESET_WIDTHS: [f64; 5] = [1.0, 3.0, 5.0, 10.0, 30.0];

/// Error returned when an [`InkStyle`] field is out of range.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// Width was zero, negative, or not finite.
    #[error("stroke width must be finite and positive, got {0}")]
    Width(f64),
    /// Opacity was outside `[0, 1]`.
    #[error("opacity must be in [0, 1], got {0}")]
    Opacity(f32),
}

/// Appearance of a stroke, fixed when the stroke starts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkStyle {
    /// Ink color.
    pub color: Color,
    /// Stroke width in surface-local units.
    pub width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Default for InkStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 3.0,
            opacity: 1.0,
        }
    }
}

impl InkStyle {
    /// Creates a validated style.
    pub fn new(color: Color, width: f64, opacity: f32) -> Result<Self, StyleError> {
        let style = Self {
            color,
            width,
            opacity,
        };
        style.validate()?;
        Ok(style)
    }

    /// Checks width and opacity.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_width(self.width)?;
        check_opacity(self.opacity)?;
        Ok(())
    }

    /// Returns a copy with a different color.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns a copy with a different width.
    pub fn with_width(self, width: f64) -> Result<Self, StyleError> {
        check_width(width)?;
        Ok(Self { width, ..self })
    }

    /// Returns a copy with a different opacity.
    pub fn with_opacity(self, opacity: f32) -> Result<Self, StyleError> {
        check_opacity(opacity)?;
        Ok(Self { opacity, ..self })
    }
}

fn check_width(width: f64) -> Result<(), StyleError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(StyleError::Width(width))
    }
}

fn check_opacity(opacity: f32) -> Result<(), StyleError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(StyleError::Opacity(opacity))
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::{InkStyle, PRESET_WIDTHS, StyleError};

    #[test]
    fn presets_are_valid_widths() {
        for width in PRESET_WIDTHS {
            assert!(InkStyle::default().with_width(width).is_ok());
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            InkStyle::new(Color::BLACK, 0.0, 1.0),
            Err(StyleError::Width(0.0))
        );
        assert!(InkStyle::new(Color::BLACK, f64::INFINITY, 1.0).is_err());
        assert_eq!(
            InkStyle::default().with_opacity(1.5),
            Err(StyleError::Opacity(1.5))
        );
        assert!(InkStyle::default().with_opacity(f32::NAN).is_err());
    }

    #[test]
    fn builders_keep_other_fields() {
        let style = InkStyle::default()
            .with_color(Color::WHITE)
            .with_width(10.0)
            .and_then(|s| s.with_opacity(0.5))
            .unwrap();
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.width, 10.0);
        assert_eq!(style.opacity, 0.5);
    }
}
