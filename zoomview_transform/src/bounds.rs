// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when zoom configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomError {
    /// The scale bounds are non-positive, non-finite, or `min_scale > max_scale`.
    InvalidBounds {
        /// The rejected lower bound.
        min_scale: f64,
        /// The rejected upper bound.
        max_scale: f64,
    },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                min_scale,
                max_scale,
            } => write!(
                f,
                "invalid zoom bounds [{min_scale}, {max_scale}]: both must be positive and finite with min <= max"
            ),
        }
    }
}

impl core::error::Error for ZoomError {}

/// Inclusive range of allowed scale factors.
///
/// The only way to obtain a `ZoomBounds` is through [`ZoomBounds::new`] (or
/// deserialization, which goes through the same check), so a value in hand
/// always satisfies `0 < min_scale <= max_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawZoomBounds"))]
pub struct ZoomBounds {
    min_scale: f64,
    max_scale: f64,
}

impl ZoomBounds {
    /// Smallest scale allowed when no bounds are configured.
    pub const DEFAULT_MIN_SCALE: f64 = 0.5;
    /// Largest scale allowed when no bounds are configured.
    pub const DEFAULT_MAX_SCALE: f64 = 3.0;

    /// Validates and creates a bounds pair.
    ///
    /// Both values must be finite and strictly positive, and `min_scale` must
    /// not exceed `max_scale`. The conventional `min_scale <= 1 <= max_scale`
    /// is not required.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ZoomError> {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && max_scale > 0.0
            && min_scale <= max_scale;
        if !valid {
            return Err(ZoomError::InvalidBounds {
                min_scale,
                max_scale,
            });
        }
        Ok(Self {
            min_scale,
            max_scale,
        })
    }

    /// Lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns `true` if `scale` lies within the bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min_scale && scale <= self.max_scale
    }

    /// The bound `scale` must be pulled back to, if it lies outside.
    #[must_use]
    pub fn violated_bound(&self, scale: f64) -> Option<f64> {
        if scale > self.max_scale {
            Some(self.max_scale)
        } else if scale < self.min_scale {
            Some(self.min_scale)
        } else {
            None
        }
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawZoomBounds {
    min_scale: f64,
    max_scale: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawZoomBounds> for ZoomBounds {
    type Error = ZoomError;

    fn try_from(raw: RawZoomBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_scale, raw.max_scale)
    }
}
