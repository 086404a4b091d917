// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch helper: turn successive finger-to-finger vectors into scale factors.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use zoomview_gesture::pinch::pinch_scale_factor;
//!
//! // Fingers 10px apart, then 15px apart.
//! let factor = pinch_scale_factor(Vec2::new(6.0, 8.0), Vec2::new(9.0, 12.0));
//! assert!((factor - 1.5).abs() < 1e-12);
//!
//! // Coincident fingers give no usable reference length.
//! assert_eq!(pinch_scale_factor(Vec2::ZERO, Vec2::new(3.0, 4.0)), 1.0);
//! ```

use kurbo::{Point, Vec2};

/// Ratio of the current pinch span to the previous one.
///
/// Only the lengths matter; the direction of the vectors is ignored, so a
/// pinch that also rotates does not change the factor.
///
/// Returns `1.0` (no change) when the previous span has zero length, or when
/// the ratio would be zero or not finite.
#[must_use]
pub fn pinch_scale_factor(previous: Vec2, current: Vec2) -> f64 {
    let previous_len = previous.hypot();
    if previous_len == 0.0 {
        return 1.0;
    }
    let factor = current.hypot() / previous_len;
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

/// Vector from the second pointer to the first.
#[must_use]
pub fn pinch_vector(first: Point, second: Point) -> Vec2 {
    first - second
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{pinch_scale_factor, pinch_vector};

    #[test]
    fn spreading_fingers_zooms_in() {
        let factor = pinch_scale_factor(Vec2::new(6.0, 8.0), Vec2::new(9.0, 12.0));
        assert!((factor - 1.5).abs() < 1e-12);
    }

    #[test]
    fn closing_fingers_zooms_out() {
        let factor = pinch_scale_factor(Vec2::new(0.0, 20.0), Vec2::new(0.0, 5.0));
        assert!((factor - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rotation_alone_keeps_scale() {
        let factor = pinch_scale_factor(Vec2::new(10.0, 0.0), Vec2::new(0.0, -10.0));
        assert!((factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_previous_span_is_neutral() {
        assert_eq!(pinch_scale_factor(Vec2::ZERO, Vec2::new(100.0, 0.0)), 1.0);
        assert_eq!(pinch_scale_factor(Vec2::ZERO, Vec2::ZERO), 1.0);
    }

    #[test]
    fn collapsing_to_a_point_is_neutral() {
        assert_eq!(pinch_scale_factor(Vec2::new(3.0, 4.0), Vec2::ZERO), 1.0);
    }

    #[test]
    fn non_finite_spans_are_neutral() {
        assert_eq!(pinch_scale_factor(Vec2::new(3.0, 4.0), Vec2::new(f64::NAN, 0.0)), 1.0);
        assert_eq!(
            pinch_scale_factor(Vec2::new(1e-300, 0.0), Vec2::new(f64::MAX, 0.0)),
            1.0
        );
    }

    #[test]
    fn vector_points_from_second_to_first() {
        let v = pinch_vector(Point::new(10.0, 20.0), Point::new(4.0, 12.0));
        assert_eq!(v, Vec2::new(6.0, 8.0));
    }
}
