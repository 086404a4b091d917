// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag/pinch recognition: classify pointer events and emit relative deltas.
//!
//! ## Usage
//!
//! 1) Keep one [`GestureState`] per view.
//! 2) Feed every pointer event through [`GestureRecognizer::update`].
//! 3) Compose any emitted [`GestureDelta`] onto the last *committed*
//!    transform, clamp it, and commit the result.
//! 4) Report [`GestureOutcome::consumed`] back to the host so unhandled events
//!    can fall through to its own tap/click handling.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use zoomview_gesture::{GestureDelta, GestureRecognizer, GestureState, PointerEvent, PointerId};
//!
//! let recognizer = GestureRecognizer::new(true);
//! let mut state = GestureState::new();
//!
//! let down = recognizer.update(&mut state, &PointerEvent::down(PointerId(0), (100.0, 100.0)));
//! assert!(down.consumed);
//! assert_eq!(down.delta, None);
//!
//! let moved = recognizer.update(&mut state, &PointerEvent::moved(PointerId(0), (130.0, 115.0)));
//! assert_eq!(moved.delta, Some(GestureDelta::Translate(Vec2::new(30.0, 15.0))));
//! ```

use kurbo::{Point, Vec2};

use crate::pinch::pinch_scale_factor;
use crate::pointer::{PointerEvent, PointerId, PointerPhase};
use crate::state::{GesturePhase, GestureState};

/// Relative change to apply to the committed transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureDelta {
    /// Translate by this vector, in viewport coordinates.
    Translate(Vec2),
    /// Scale by this factor about the viewport center.
    Scale(f64),
}

/// Result of feeding one event to the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOutcome {
    /// Whether the recognizer handled the event.
    ///
    /// `false` lets the host fall back to its own gesture handling.
    pub consumed: bool,
    /// Candidate delta, if the event moved the content.
    pub delta: Option<GestureDelta>,
}

impl GestureOutcome {
    /// Not handled; no delta.
    pub const IGNORED: Self = Self {
        consumed: false,
        delta: None,
    };

    /// Handled; no delta.
    pub const CONSUMED: Self = Self {
        consumed: true,
        delta: None,
    };

    fn emit(delta: GestureDelta) -> Self {
        Self {
            consumed: true,
            delta: Some(delta),
        }
    }
}

/// Single-finger drag and two-finger pinch recognizer.
///
/// The recognizer holds only configuration; all per-sequence state lives in
/// the [`GestureState`] passed to [`GestureRecognizer::update`].
///
/// Only the first two pointers of a sequence take part in a pinch. While
/// more than two are down, events produce no delta and are not consumed.
#[derive(Clone, Copy, Debug)]
pub struct GestureRecognizer {
    drag_enabled: bool,
}

impl GestureRecognizer {
    /// Creates a recognizer; `drag_enabled` controls single-pointer panning.
    #[must_use]
    pub fn new(drag_enabled: bool) -> Self {
        Self { drag_enabled }
    }

    /// Whether single-pointer drags translate the content.
    #[must_use]
    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Enables or disables single-pointer drags. Pinch zoom is unaffected.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    /// Processes one pointer event, updating `state`.
    pub fn update(&self, state: &mut GestureState, event: &PointerEvent) -> GestureOutcome {
        match event.phase {
            PointerPhase::Down => self.on_down(state, event.id, event.position),
            PointerPhase::Move => self.on_move(state, event.id, event.position),
            PointerPhase::Up => Self::on_up(state, event.id),
        }
    }

    fn on_down(&self, state: &mut GestureState, id: PointerId, position: Point) -> GestureOutcome {
        state.press(id, position);
        match state.pointer_count() {
            1 => {
                // A lone pointer down starts a fresh sequence.
                state.two_pointer_lock = false;
                if !self.drag_enabled {
                    return GestureOutcome::IGNORED;
                }
                state.anchor = position;
                state.set_phase(GesturePhase::Dragging);
                log::debug!("drag started at {position:?}");
                GestureOutcome::CONSUMED
            }
            2 => {
                state.pinch_vector = state.pair_vector().unwrap_or(Vec2::ZERO);
                state.two_pointer_lock = true;
                state.set_phase(GesturePhase::Pinching);
                log::debug!("pinch started with span {:?}", state.pinch_vector);
                GestureOutcome::CONSUMED
            }
            _ => GestureOutcome::IGNORED,
        }
    }

    fn on_move(&self, state: &mut GestureState, id: PointerId, position: Point) -> GestureOutcome {
        if !state.track(id, position) {
            return GestureOutcome::IGNORED;
        }
        match state.pointer_count() {
            1 => {
                if !self.drag_enabled || state.two_pointer_lock {
                    return GestureOutcome::IGNORED;
                }
                let delta = position - state.anchor;
                state.anchor = position;
                log::trace!("drag delta {delta:?}");
                GestureOutcome::emit(GestureDelta::Translate(delta))
            }
            2 => {
                let Some(current) = state.pair_vector() else {
                    return GestureOutcome::IGNORED;
                };
                let factor = pinch_scale_factor(state.pinch_vector, current);
                state.pinch_vector = current;
                log::trace!("pinch factor {factor}");
                GestureOutcome::emit(GestureDelta::Scale(factor))
            }
            _ => GestureOutcome::IGNORED,
        }
    }

    fn on_up(state: &mut GestureState, id: PointerId) -> GestureOutcome {
        state.release(id);
        match state.pointer_count() {
            0 => {
                if state.phase() != GesturePhase::Idle {
                    log::debug!("gesture ended");
                }
                state.reset();
            }
            1 => {
                // The lock survives until the last pointer lifts.
                state.set_phase(GesturePhase::Dragging);
            }
            2 => {
                // Back from three pointers: measure from the remaining pair.
                state.pinch_vector = state.pair_vector().unwrap_or(Vec2::ZERO);
                state.set_phase(GesturePhase::Pinching);
            }
            _ => {}
        }
        GestureOutcome::IGNORED
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(true)
    }
}
