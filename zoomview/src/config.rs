// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoomview_transform::{ZoomBounds, ZoomError};

/// Configuration of a [`ZoomView`](crate::ZoomView).
///
/// Covers both common widget flavors: a zoom-only view (`drag_enabled =
/// false`) and a pan + zoom view, each with its own scale limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Allowed scale range.
    pub bounds: ZoomBounds,
    /// Whether single-pointer drags pan the content.
    pub drag_enabled: bool,
}

impl ZoomConfig {
    /// Validates the scale range and creates a configuration.
    pub fn new(min_scale: f64, max_scale: f64, drag_enabled: bool) -> Result<Self, ZoomError> {
        Ok(Self {
            bounds: ZoomBounds::new(min_scale, max_scale)?,
            drag_enabled,
        })
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            bounds: ZoomBounds::default(),
            drag_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use zoomview_transform::{ZoomBounds, ZoomError};

    use super::ZoomConfig;

    #[test]
    fn default_is_pan_and_zoom_with_default_bounds() {
        let config = ZoomConfig::default();
        assert!(config.drag_enabled);
        assert_eq!(config.bounds, ZoomBounds::default());
    }

    #[test]
    fn new_validates_bounds() {
        let config = ZoomConfig::new(0.2, 2.0, false).unwrap();
        assert!(!config.drag_enabled);
        assert_eq!(config.bounds.min_scale(), 0.2);

        assert_eq!(
            ZoomConfig::new(2.0, 0.2, true),
            Err(ZoomError::InvalidBounds {
                min_scale: 2.0,
                max_scale: 0.2
            })
        );
    }
}
