// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};
use zoomview_gesture::{GestureDelta, GesturePhase, GestureRecognizer, GestureState, PointerEvent};
use zoomview_transform::{
    Transform, ZoomBounds, ZoomError, center_crop, clamp_transform, viewport_center,
};

use crate::config::ZoomConfig;

/// What the host gets back for every pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventResponse {
    /// Whether the view handled the event.
    ///
    /// When `false` the host should run its own handling (tap, click, ...).
    pub consumed: bool,
    /// The committed transform after the event.
    pub transform: Transform,
}

/// Headless pan/zoom view session.
///
/// `ZoomView` owns the gesture state and the committed transform of one
/// displayed piece of content. The host feeds it pointer events along with the
/// current viewport size, and renders with the returned transform.
///
/// Every delta is composed onto the previously committed transform and run
/// through [`clamp_transform`] before it is committed.
#[derive(Clone, Debug)]
pub struct ZoomView {
    recognizer: GestureRecognizer,
    bounds: ZoomBounds,
    gesture: GestureState,
    transform: Transform,
    content: Option<Size>,
}

impl ZoomView {
    /// Creates a view with no content and the identity transform.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config.drag_enabled),
            bounds: config.bounds,
            gesture: GestureState::new(),
            transform: Transform::IDENTITY,
            content: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        ZoomConfig {
            bounds: self.bounds,
            drag_enabled: self.recognizer.drag_enabled(),
        }
    }

    /// Sets the intrinsic size of the displayed content, or `None` when
    /// nothing is loaded.
    ///
    /// The committed transform is not touched; the next gesture step clamps
    /// against the new size. Call [`ZoomView::reset`] to fit fresh content.
    pub fn set_content(&mut self, content: Option<Size>) {
        self.content = content;
    }

    /// Intrinsic size of the displayed content, if any.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Whether single-pointer drags pan the content.
    #[must_use]
    pub fn is_drag_enabled(&self) -> bool {
        self.recognizer.drag_enabled()
    }

    /// Enables or disables single-pointer panning. Pinch zoom stays active.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.recognizer.set_drag_enabled(enabled);
    }

    /// Allowed scale range.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Replaces the allowed scale range.
    ///
    /// On error the previous bounds stay in effect. The committed transform is
    /// brought into the new range by the next gesture step.
    pub fn set_zoom_bounds(&mut self, min_scale: f64, max_scale: f64) -> Result<(), ZoomError> {
        self.bounds = ZoomBounds::new(min_scale, max_scale)?;
        log::debug!("zoom bounds set to [{min_scale}, {max_scale}]");
        Ok(())
    }

    /// The committed transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The committed transform as an affine, ready for a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Phase of the gesture in progress.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Processes one pointer event against the current viewport size.
    pub fn handle_pointer(&mut self, event: &PointerEvent, viewport: Size) -> EventResponse {
        let outcome = self.recognizer.update(&mut self.gesture, event);
        if let Some(delta) = outcome.delta {
            self.commit(delta, viewport);
        }
        EventResponse {
            consumed: outcome.consumed,
            transform: self.transform,
        }
    }

    /// Places the content to cover the viewport, centered, and drops any
    /// gesture in progress.
    ///
    /// Without content the identity transform is restored.
    pub fn reset(&mut self, viewport: Size) -> Transform {
        self.gesture.reset();
        self.transform = center_crop(self.content, viewport, self.bounds);
        log::debug!("view reset to {:?}", self.transform);
        self.transform
    }

    fn commit(&mut self, delta: GestureDelta, viewport: Size) {
        let candidate = match delta {
            GestureDelta::Translate(offset) => self.transform.translate_by(offset),
            GestureDelta::Scale(factor) => self
                .transform
                .scale_about(factor, viewport_center(viewport)),
        };
        let clamped = clamp_transform(candidate, self.content, viewport, self.bounds);
        if !clamped.is_finite() {
            log::warn!("discarding non-finite transform {clamped:?} from {delta:?}");
            return;
        }
        self.transform = clamped;
    }
}

impl Default for ZoomView {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
