// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of candidate transforms back into the valid region.

use kurbo::{Size, Vec2};

use crate::bounds::ZoomBounds;
use crate::transform::{Transform, viewport_center};

/// Signed distances between the content edges and the viewport edges.
///
/// A positive value means a gap: the viewport edge is not covered by content.
/// A negative value means the content overhangs that edge.
///
/// `bottom` is measured at the `y = 0` edge of the viewport and `top` at the
/// `y = height` edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderDistances {
    /// Gap at the `x = 0` edge.
    pub left: f64,
    /// Gap at the `x = width` edge.
    pub right: f64,
    /// Gap at the `y = height` edge.
    pub top: f64,
    /// Gap at the `y = 0` edge.
    pub bottom: f64,
}

impl BorderDistances {
    /// Measures the border distances of `content` placed by `transform`.
    #[must_use]
    pub fn measure(transform: Transform, content: Size, viewport: Size) -> Self {
        let scaled = content * transform.scale;
        let t = transform.translation;
        Self {
            left: t.x,
            right: -(t.x + scaled.width - viewport.width),
            bottom: t.y,
            top: -(t.y + scaled.height - viewport.height),
        }
    }
}

/// Returns the nearest valid transform for `candidate`.
///
/// Each axis is corrected on its own:
/// - If the scaled content is larger than the viewport along the axis, any
///   gap is closed by sliding the content toward it.
/// - Otherwise, if the content overhangs exactly one edge, that overhang is
///   removed. Content that already sits inside the viewport is left where it
///   is; it is not re-centered.
///
/// Finally the scale is pulled back into `bounds`, pivoting about the
/// viewport center. That last step can reopen a gap; the next clamp closes
/// it.
///
/// Missing content, or a viewport or content with an empty dimension, makes
/// this a no-op.
#[must_use]
pub fn clamp_transform(
    candidate: Transform,
    content: Option<Size>,
    viewport: Size,
    bounds: ZoomBounds,
) -> Transform {
    let Some(content) = content else {
        return candidate;
    };
    if !has_area(viewport) || !has_area(content) {
        return candidate;
    }

    let scaled = content * candidate.scale;
    let borders = BorderDistances::measure(candidate, content, viewport);
    let correction = Vec2::new(
        axis_correction(borders.left, borders.right, scaled.width > viewport.width),
        axis_correction(
            borders.bottom,
            borders.top,
            scaled.height > viewport.height,
        ),
    );

    let mut clamped = candidate;
    if correction != Vec2::ZERO {
        log::trace!("closing border gap by {correction:?}");
        clamped = clamped.translate_by(correction);
    }

    if let Some(bound) = bounds.violated_bound(clamped.scale) {
        log::trace!("scale {} pulled back to {bound}", clamped.scale);
        clamped = if clamped.scale > 0.0 && clamped.scale.is_finite() {
            let pivoted = clamped.scale_about(bound / clamped.scale, viewport_center(viewport));
            Transform::new(bound, pivoted.translation)
        } else {
            // No pivot math is possible from a collapsed scale.
            Transform::new(bound, clamped.translation)
        };
    }

    clamped
}

/// Initial placement for freshly loaded content: cover the viewport, centered.
///
/// The content is scaled so that it fills the viewport on both axes
/// (cropping the overflow), centered, and then run through
/// [`clamp_transform`]. Without content, or with an empty viewport, the
/// identity transform is returned.
#[must_use]
pub fn center_crop(content: Option<Size>, viewport: Size, bounds: ZoomBounds) -> Transform {
    let Some(content) = content else {
        return Transform::IDENTITY;
    };
    if !has_area(viewport) || !has_area(content) {
        return Transform::IDENTITY;
    }

    let scale = (viewport.width / content.width).max(viewport.height / content.height);
    let scaled = content * scale;
    let translation = (viewport.to_vec2() - scaled.to_vec2()) * 0.5;
    clamp_transform(
        Transform::new(scale, translation),
        Some(content),
        viewport,
        bounds,
    )
}

/// Correction along one axis.
///
/// `near` is the gap at the low-coordinate edge, `far` the gap at the
/// high-coordinate edge. `overflows` is set when the scaled content is larger
/// than the viewport along this axis.
fn axis_correction(near: f64, far: f64, overflows: bool) -> f64 {
    if overflows {
        if far > 0.0 {
            far
        } else if near > 0.0 {
            -near
        } else {
            0.0
        }
    } else if (near < 0.0) != (far < 0.0) {
        if far < 0.0 { far } else { -near }
    } else {
        0.0
    }
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
