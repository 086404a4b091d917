// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::pinch::pinch_vector;
use crate::pointer::PointerId;

/// Which gesture the active pointers currently form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One pointer is down.
    ///
    /// Moves only translate while [`GestureState::two_pointer_lock`] is clear.
    Dragging,
    /// Two pointers are down; moves scale.
    Pinching,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActivePointer {
    id: PointerId,
    position: Point,
}

/// Mutable state of one touch sequence.
///
/// A session owns one `GestureState` and lends it to
/// [`GestureRecognizer::update`](crate::GestureRecognizer::update) for every
/// event. The sequence starts with the first pointer down and ends, resetting
/// everything, when the last pointer lifts.
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    /// Last known single-pointer position; drag deltas are measured from here.
    pub anchor: Point,
    /// Last known vector between the first two active pointers.
    pub pinch_vector: Vec2,
    /// Set when a pinch begins; suppresses drag moves until every pointer lifts.
    pub two_pointer_lock: bool,
    phase: GesturePhase,
    // In arrival order; slots 0 and 1 form the pinch pair.
    pointers: SmallVec<[ActivePointer; 4]>,
}

impl GestureState {
    /// Creates an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` when no pointer is down.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of the pointer in `slot`, in arrival order.
    #[must_use]
    pub fn pointer_position(&self, slot: usize) -> Option<Point> {
        self.pointers.get(slot).map(|p| p.position)
    }

    /// Returns `true` if the pointer with this id is down.
    #[must_use]
    pub fn is_active(&self, id: PointerId) -> bool {
        self.pointers.iter().any(|p| p.id == id)
    }

    /// Forgets every pointer and returns to [`GesturePhase::Idle`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_phase(&mut self, phase: GesturePhase) {
        self.phase = phase;
    }

    /// Records a pointer going down. A repeated down for an active id only
    /// updates its position.
    pub(crate) fn press(&mut self, id: PointerId, position: Point) {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(existing) => existing.position = position,
            None => self.pointers.push(ActivePointer { id, position }),
        }
    }

    /// Updates the position of an active pointer. Returns `false` for unknown ids.
    pub(crate) fn track(&mut self, id: PointerId, position: Point) -> bool {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes an active pointer, keeping the order of the others. Returns
    /// `false` for unknown ids.
    pub(crate) fn release(&mut self, id: PointerId) -> bool {
        match self.pointers.iter().position(|p| p.id == id) {
            Some(slot) => {
                self.pointers.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Vector between the pointers in slots 0 and 1.
    pub(crate) fn pair_vector(&self) -> Option<Vec2> {
        match self.pointers.as_slice() {
            [first, second, ..] => Some(pinch_vector(first.position, second.position)),
            _ => None,
        }
    }
}
