// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_gesture --heading-base-level=0

//! Zoomview Gesture: drag and pinch recognition for pan/zoom views.
//!
//! This crate turns a stream of raw pointer events into relative transform
//! deltas:
//!
//! - One pointer down and moving produces [`GestureDelta::Translate`].
//! - Two pointers down and moving produce [`GestureDelta::Scale`], the ratio
//!   of the finger span to the previous one, applied about the viewport
//!   center.
//!
//! ## Design
//!
//! - [`GestureRecognizer`] holds configuration only. The per-sequence
//!   [`GestureState`] is owned by the caller and passed in by `&mut`.
//! - Deltas are relative. Callers compose them onto the last committed
//!   transform (never onto an unclamped candidate), so each step starts from a
//!   known-valid value.
//! - Once a pinch starts, single-pointer drags stay suppressed until every
//!   pointer has lifted. Lifting one finger of a pinch therefore never makes the
//!   content jump to the remaining finger.
//! - Events that the recognizer does not handle report `consumed = false` so
//!   the host can run its own tap or click detection.
//!
//! ## Example
//!
//! ```rust
//! use zoomview_gesture::{GestureDelta, GestureRecognizer, GestureState, PointerEvent, PointerId};
//!
//! let recognizer = GestureRecognizer::default();
//! let mut state = GestureState::new();
//!
//! recognizer.update(&mut state, &PointerEvent::down(PointerId(0), (106.0, 108.0)));
//! recognizer.update(&mut state, &PointerEvent::down(PointerId(1), (100.0, 100.0)));
//!
//! // The span grows from 10px to 15px.
//! let out = recognizer.update(&mut state, &PointerEvent::moved(PointerId(0), (109.0, 112.0)));
//! let Some(GestureDelta::Scale(factor)) = out.delta else { unreachable!() };
//! assert!((factor - 1.5).abs() < 1e-12);
//! assert!(state.two_pointer_lock);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pinch;
mod pointer;
pub mod recognizer;
mod state;

pub use pointer::{PointerEvent, PointerId, PointerPhase};
pub use recognizer::{GestureDelta, GestureOutcome, GestureRecognizer};
pub use state::{GesturePhase, GestureState};
