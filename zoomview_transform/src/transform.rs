// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale + translation mapping content space into viewport space.
///
/// A content point `p` lands at `p * scale + translation` in the viewport.
/// Values are immutable: every operation returns a new `Transform` built from
/// the previous one, so a session can always fall back to its last committed
/// value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor, applied equally to X and Y.
    pub scale: f64,
    /// Offset of the content origin in viewport coordinates.
    pub translation: Vec2,
}

impl Transform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self::new(1.0, Vec2::ZERO);

    /// Creates a transform from a scale factor and a translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Horizontal translation (`translateX`).
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.translation.x
    }

    /// Vertical translation (`translateY`).
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.translation.y
    }

    /// Returns this transform followed by a translation in viewport space.
    #[must_use]
    pub fn translate_by(self, delta: Vec2) -> Self {
        Self::new(self.scale, self.translation + delta)
    }

    /// Returns this transform followed by a uniform scale about `pivot`.
    ///
    /// `pivot` is expressed in viewport coordinates and stays fixed: whatever
    /// content point sat under it before still sits under it afterwards.
    #[must_use]
    pub fn scale_about(self, factor: f64, pivot: Point) -> Self {
        let pivot = pivot.to_vec2();
        Self::new(
            self.scale * factor,
            pivot + (self.translation - pivot) * factor,
        )
    }

    /// Maps a content-space point into viewport space.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translation.x,
            pt.y * self.scale + self.translation.y,
        )
    }

    /// Maps a viewport-space point back into content space.
    ///
    /// Returns `None` when the scale is zero and no inverse exists.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Option<Point> {
        if self.scale == 0.0 {
            return None;
        }
        Some(((pt.to_vec2() - self.translation) / self.scale).to_point())
    }

    /// Rectangle covered by content of the given intrinsic size, in viewport space.
    #[must_use]
    pub fn content_rect(&self, content: Size) -> Rect {
        Rect::from_origin_size(self.translation.to_point(), content * self.scale)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.translation.is_finite()
    }

    /// Converts to a [`kurbo::Affine`] for handing to a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.to_affine()
    }
}

/// Center of a viewport of the given size, in viewport coordinates.
#[must_use]
pub fn viewport_center(viewport: Size) -> Point {
    Point::new(viewport.width * 0.5, viewport.height * 0.5)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{Transform, viewport_center};

    #[test]
    fn translate_by_accumulates() {
        let t = Transform::IDENTITY
            .translate_by(Vec2::new(10.0, -5.0))
            .translate_by(Vec2::new(2.5, 1.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.translation, Vec2::new(12.5, -4.0));
    }

    #[test]
    fn scale_about_keeps_pivot_fixed() {
        let t = Transform::new(1.5, Vec2::new(-40.0, 25.0));
        let pivot = Point::new(200.0, 150.0);
        let content_at_pivot = t.view_to_content_point(pivot).unwrap();

        let scaled = t.scale_about(2.0, pivot);
        assert!((scaled.scale - 3.0).abs() < 1e-12);

        let back = scaled.content_to_view_point(content_at_pivot);
        assert!((back.x - pivot.x).abs() < 1e-9);
        assert!((back.y - pivot.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let t = Transform::new(0.75, Vec2::new(12.0, -8.0));
        let pt = Point::new(33.0, 44.0);
        let via_affine = t.to_affine() * pt;
        let direct = t.content_to_view_point(pt);
        assert!((via_affine.x - direct.x).abs() < 1e-9);
        assert!((via_affine.y - direct.y).abs() < 1e-9);
    }

    #[test]
    fn content_rect_is_scaled_and_offset() {
        let t = Transform::new(2.0, Vec2::new(-10.0, 5.0));
        let rect = t.content_rect(Size::new(100.0, 50.0));
        assert_eq!(rect.x0, -10.0);
        assert_eq!(rect.y0, 5.0);
        assert_eq!(rect.x1, 190.0);
        assert_eq!(rect.y1, 105.0);
    }

    #[test]
    fn zero_scale_has_no_inverse() {
        let t = Transform::new(0.0, Vec2::ZERO);
        assert_eq!(t.view_to_content_point(Point::ORIGIN), None);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Transform::IDENTITY.is_finite());
        assert!(!Transform::new(f64::NAN, Vec2::ZERO).is_finite());
        assert!(!Transform::new(1.0, Vec2::new(f64::INFINITY, 0.0)).is_finite());
    }

    #[test]
    fn viewport_center_is_half_size() {
        assert_eq!(viewport_center(Size::new(400.0, 300.0)), Point::new(200.0, 150.0));
    }
}
