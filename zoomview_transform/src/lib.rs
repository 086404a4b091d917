// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoomview_transform --heading-base-level=0

//! Zoomview Transform: the value model and clamping rules of a pan/zoom view.
//!
//! This crate provides a small, headless model of how displayed content is
//! placed inside a viewport. It focuses on:
//! - A uniform scale + translation [`Transform`] from content to viewport space.
//! - Validated [`ZoomBounds`] for the allowed scale range.
//! - [`clamp_transform`], which projects any candidate transform back into the
//!   valid region: content stays attached to the viewport and the scale stays
//!   within bounds.
//!
//! It does **not** interpret input events or render anything. Callers are
//! expected to:
//! - Produce candidate transforms (for example from `zoomview_gesture`
//!   deltas) by composing onto the last committed transform.
//! - Clamp every candidate before committing it.
//! - Hand the committed transform (or [`Transform::to_affine`]) to their
//!   renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use zoomview_transform::{Transform, ZoomBounds, clamp_transform};
//!
//! let content = Size::new(800.0, 600.0);
//! let viewport = Size::new(400.0, 400.0);
//! let bounds = ZoomBounds::new(0.2, 2.0).unwrap();
//!
//! // Dragged too far: a gap opened on the left and the content slid up.
//! let candidate = Transform::new(1.0, Vec2::new(50.0, -250.0));
//! let committed = clamp_transform(candidate, Some(content), viewport, bounds);
//!
//! assert_eq!(committed.translation, Vec2::new(0.0, -200.0));
//! ```
//!
//! ## Clamping rules
//!
//! - Content larger than the viewport on an axis must cover it: any gap is
//!   closed.
//! - Content smaller than the viewport on an axis may sit anywhere inside it;
//!   if it overhangs exactly one edge, that edge is pulled back in. It is not
//!   re-centered.
//! - The scale is pulled back into [`ZoomBounds`] last, about the viewport
//!   center.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod clamp;
mod transform;

pub use bounds::{ZoomBounds, ZoomError};
pub use clamp::{BorderDistances, center_crop, clamp_transform};
pub use transform::{Transform, viewport_center};
