// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-end pipeline: run the resolver first, then any downstream handler.
//!
//! Hosts often already have a drag-end handler installed before snapping is
//! added (for example, one that records analytics or chains another
//! behavior). Rather than intercepting and forwarding calls, the host runs
//! [`dispatch_drag_end`] and passes its existing handler along as
//! `downstream`. The resolver's [`DragEndDecision`] decides whether that
//! handler still runs and what target it observes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_snap::pipeline::dispatch_drag_end;
//! use understory_snap::{SnapConfig, SnapDirection, SnapGeometry, SnapLocations, SnapResolver};
//!
//! let config = SnapConfig::default().with_direction(SnapDirection::Horizontal);
//! let resolver = SnapResolver::new(config).with_locations(SnapLocations::new([100.0, 200.0]));
//! let viewport = SnapGeometry::new(Size::new(100.0, 50.0), Size::new(1000.0, 50.0));
//!
//! let mut seen = None;
//! let mut downstream = |_velocity: Vec2, target: &mut Point| seen = Some(*target);
//!
//! let mut target = Point::new(170.0, 0.0);
//! let animate = dispatch_drag_end(
//!     &resolver,
//!     &viewport,
//!     Vec2::new(5.0, 0.0),
//!     &mut target,
//!     Some(&mut downstream),
//! );
//!
//! // The pending target was rewritten before the downstream handler saw it.
//! assert_eq!(target, Point::new(200.0, 0.0));
//! assert_eq!(seen, Some(Point::new(200.0, 0.0)));
//! assert_eq!(animate, Some(Point::new(200.0, 0.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::resolver::{DragEndDecision, SnapResolver};
use crate::viewport::SnapViewport;

/// A host handler notified when a drag gesture is about to end.
///
/// `target` is the offset the viewport will decelerate to; handlers may
/// rewrite it.
pub trait DragEndHandler {
    /// Called once per drag release.
    fn will_end_dragging(&mut self, velocity: Vec2, target: &mut Point);
}

impl<F: FnMut(Vec2, &mut Point)> DragEndHandler for F {
    fn will_end_dragging(&mut self, velocity: Vec2, target: &mut Point) {
        self(velocity, target);
    }
}

/// Run snapping and then the downstream handler for a drag release.
///
/// - [`DragEndDecision::Defer`]: `target` is untouched and `downstream` runs.
/// - [`DragEndDecision::AnimateTo`]: `target` is untouched and `downstream`
///   is skipped.
/// - [`DragEndDecision::Retarget`]: `target` is replaced, then `downstream`
///   runs and may adjust it further.
///
/// Returns the offset the host should start animating to immediately, if any.
pub fn dispatch_drag_end<V: SnapViewport + ?Sized>(
    resolver: &SnapResolver,
    viewport: &V,
    velocity: Vec2,
    target: &mut Point,
    downstream: Option<&mut dyn DragEndHandler>,
) -> Option<Point> {
    let decision = resolver.on_drag_end(viewport, velocity, *target);
    if let DragEndDecision::Retarget(offset) = decision {
        *target = offset;
    }
    if let Some(handler) = downstream.filter(|_| decision.invokes_downstream()) {
        handler.will_end_dragging(velocity, target);
    }
    decision.target()
}
