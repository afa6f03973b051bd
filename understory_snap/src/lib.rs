// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_snap --heading-base-level=0

//! Understory Snap: headless snap-to-location paging for scroll viewports.
//!
//! This crate turns free-form scrolling into paging over an arbitrary set of
//! rest positions. Given a set of snap locations, the viewport geometry, and
//! the offset a drag release would decelerate to, it computes the corrected
//! offset the viewport should come to rest at. It focuses on:
//! - Sorted, deduplicated location sets ([`SnapLocations`]).
//! - Edge alignment: snap the leading edge, center, or trailing edge of the
//!   viewport to a location ([`SnapEdge`]).
//! - Axis inference from viewport hints and content shape ([`infer_axis`]).
//! - Drag-end decisions and a two-stage handler pipeline
//!   ([`SnapResolver::on_drag_end`], [`pipeline::dispatch_drag_end`]).
//!
//! It does **not** render, animate, recognize gestures, or lay out items.
//! Callers are expected to:
//! - Implement [`SnapViewport`] for their scroll container (or pass a
//!   [`SnapGeometry`] snapshot).
//! - Compute snap locations from their own layout (for example with
//!   [`SnapLocations::from_extents`]).
//! - Forward drag releases to [`SnapResolver::on_drag_end`] and animate to the
//!   returned offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_snap::{SnapConfig, SnapEdge, SnapGeometry, SnapLocations, SnapResolver};
//!
//! // A horizontal carousel: 300x100 window over 1200 units of content.
//! let viewport = SnapGeometry::new(Size::new(300.0, 100.0), Size::new(1200.0, 100.0));
//!
//! // Cards are 100 units wide with 20 units of spacing.
//! let locations = SnapLocations::from_extents([100.0; 10], 20.0);
//! let resolver = SnapResolver::new(SnapConfig::default().with_edge(SnapEdge::Min))
//!     .with_locations(locations);
//!
//! // A fling would stop at x = 250; snapping moves it to the card at 240.
//! let decision = resolver.on_drag_end(&viewport, Vec2::new(1.5, 0.0), Point::new(250.0, 0.0));
//! assert_eq!(decision.target(), Some(Point::new(240.0, 0.0)));
//! ```
//!
//! ## Design notes
//!
//! - Locations are positions in content coordinates. The configured edge
//!   converts the requested offset into the position of that viewport edge
//!   before comparison and converts the chosen location back afterwards, so a
//!   centered carousel lists card centers and a leading one lists card starts.
//! - The resolver borrows the viewport per call and never caches geometry.
//! - Every input resolves to an offset; degenerate geometry yields zero rather
//!   than an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod locations;
mod modes;
pub mod pipeline;
mod resolver;
mod viewport;

pub use locations::{LocationError, SnapLocations};
pub use modes::{Axis, SnapDirection, SnapEdge};
pub use pipeline::DragEndHandler;
pub use resolver::{
    DragEndDecision, SnapConfig, SnapResolver, SnapResolverDebugInfo, infer_axis, resolve_offset,
};
pub use viewport::{SnapGeometry, SnapViewport, ViewportKind};
