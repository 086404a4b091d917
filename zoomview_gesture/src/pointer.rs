// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Host-assigned identifier of one pointer (finger, pen, mouse button).
///
/// Ids only need to be stable for the lifetime of a single contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl From<u64> for PointerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer made contact.
    Down,
    /// The pointer moved while in contact.
    Move,
    /// The pointer lifted.
    Up,
}

/// One pointer event, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this event belongs to.
    pub id: PointerId,
    /// Position in viewport coordinates.
    pub position: Point,
    /// What happened to the pointer.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub fn new(id: PointerId, position: impl Into<Point>, phase: PointerPhase) -> Self {
        Self {
            id,
            position: position.into(),
            phase,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Down)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Move)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(id: PointerId, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Up)
    }
}
