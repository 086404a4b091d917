// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview --heading-base-level=0

//! Zoomview: a headless pan/zoom session for image viewers.
//!
//! [`ZoomView`] combines the drag/pinch recognizer from `zoomview_gesture` with
//! the clamping rules from `zoomview_transform`. The host owns rendering,
//! layout and event delivery; the view owns gesture state and the committed
//! content transform.
//!
//! For every pointer event the view:
//! 1. Updates the gesture state and derives a relative delta, if any.
//! 2. Composes the delta onto the last committed transform.
//! 3. Clamps the candidate so the content stays attached to the viewport and
//!    the scale stays within the configured bounds.
//! 4. Commits it and reports whether the event was consumed.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use zoomview::{PointerEvent, PointerId, ZoomConfig, ZoomView};
//!
//! let viewport = Size::new(400.0, 400.0);
//! let mut view = ZoomView::new(ZoomConfig::new(0.2, 2.0, true).unwrap());
//! view.set_content(Some(Size::new(800.0, 600.0)));
//!
//! view.handle_pointer(&PointerEvent::down(PointerId(0), (300.0, 300.0)), viewport);
//! let response = view.handle_pointer(&PointerEvent::moved(PointerId(0), (250.0, 280.0)), viewport);
//!
//! assert!(response.consumed);
//! assert_eq!(response.transform.translation, Vec2::new(-50.0, -20.0));
//!
//! // Lifting the finger is left for the host's own click handling.
//! let response = view.handle_pointer(&PointerEvent::up(PointerId(0), (250.0, 280.0)), viewport);
//! assert!(!response.consumed);
//! ```
//!
//! ## Configuration
//!
//! [`ZoomConfig`] holds the scale bounds and whether single-pointer panning is
//! enabled. Bounds are validated when they are built; an invalid pair is
//! reported as [`ZoomError::InvalidBounds`] before any gesture runs. With the
//! `serde` feature the configuration can be loaded from any serde format, and
//! deserialization applies the same validation.
//!
//! ## Logging
//!
//! The crates log through the [`log`] facade: gesture transitions and resets
//! at `debug`, individual deltas and clamp corrections at `trace`, and
//! discarded non-finite transforms at `warn`. No logger is installed.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod view;

pub use config::ZoomConfig;
pub use view::{EventResponse, ZoomView};
pub use zoomview_gesture::{GesturePhase, PointerEvent, PointerId, PointerPhase};
pub use zoomview_transform::{Transform, ZoomBounds, ZoomError};
