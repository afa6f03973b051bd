// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping carousels.
//!
//! Three horizontal carousels share the same card layout but align cards to
//! a different viewport edge: leading, center, and trailing. A toy host
//! stands in for the UI toolkit, feeding drag releases through the snap
//! pipeline and "animating" by jumping to the returned offset.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_snap_demos --example snap_carousel`

use kurbo::{Point, Size, Vec2};
use understory_snap::pipeline::dispatch_drag_end;
use understory_snap::{
    Axis, SnapConfig, SnapDirection, SnapEdge, SnapGeometry, SnapLocations, SnapResolver,
    SnapViewport, ViewportKind,
};

/// A single row of equally sized cards, laid out like a flow layout.
struct CardStrip {
    count: usize,
    card_extent: f64,
    spacing: f64,
    leading_inset: f64,
    trailing_inset: f64,
}

impl CardStrip {
    fn content_extent(&self) -> f64 {
        let count = self.count as f64;
        self.leading_inset
            + count * self.card_extent
            + (count - 1.0).max(0.0) * self.spacing
            + self.trailing_inset
    }

    /// Content position of each card's `edge`.
    fn snap_locations(&self, edge: SnapEdge) -> SnapLocations {
        let stride = self.card_extent + self.spacing;
        let cards = (0..self.count).map(|i| self.leading_inset + i as f64 * stride);
        match edge {
            SnapEdge::Min => SnapLocations::new(cards),
            SnapEdge::Mid => SnapLocations::new(cards.map(|start| start + self.card_extent / 2.0)),
            SnapEdge::Max => SnapLocations::new(cards.map(|start| start + self.card_extent)),
        }
    }
}

/// The host-side scroll container.
struct Carousel {
    name: &'static str,
    bounds: Size,
    content: Size,
    offset: Point,
    resolver: SnapResolver,
}

impl Carousel {
    fn new(name: &'static str, bounds: Size, strip: &CardStrip, edge: SnapEdge) -> Self {
        let mut carousel = Self {
            name,
            bounds,
            content: Size::new(strip.content_extent(), bounds.height),
            offset: Point::ZERO,
            resolver: SnapResolver::new(SnapConfig::new(edge, SnapDirection::Horizontal)),
        };
        let locations = strip.snap_locations(edge);
        let geometry = carousel.geometry();
        if let Some(offset) = carousel.resolver.set_locations(locations, &geometry, true) {
            carousel.offset = offset;
        }
        carousel
    }

    /// Detached copy of the geometry, for calls that also mutate the resolver.
    fn geometry(&self) -> SnapGeometry {
        SnapGeometry::new(self.bounds, self.content)
            .with_offset(self.offset)
            .with_kind(self.kind())
    }

    /// Simulate a drag release that would decelerate to `natural_target`.
    fn fling(&mut self, velocity: Vec2, natural_target: Point) {
        let mut target = natural_target;
        let mut downstream = |velocity: Vec2, target: &mut Point| {
            log::debug!(
                "{}: downstream saw target {target:?} at {velocity:?}",
                self.name
            );
        };
        let animate = dispatch_drag_end(
            &self.resolver,
            &*self,
            velocity,
            &mut target,
            Some(&mut downstream),
        );
        let rest = animate.unwrap_or(target);
        println!(
            "{:>8}: fling to x = {:>7.1} (v = {:>4.1}) rests at x = {:>7.1}",
            self.name, natural_target.x, velocity.x, rest.x
        );
        self.offset = rest;
    }
}

impl SnapViewport for Carousel {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn kind(&self) -> ViewportKind {
        ViewportKind::Grid {
            axis: Axis::Horizontal,
        }
    }
}

fn main() {
    env_logger::init();

    let bounds = Size::new(375.0, 200.0);
    let narrow = CardStrip {
        count: 20,
        card_extent: bounds.height * 0.8,
        spacing: 10.0,
        leading_inset: 16.0,
        trailing_inset: 16.0,
    };
    let wide = CardStrip {
        count: 20,
        card_extent: bounds.height * 1.5,
        spacing: 10.0,
        leading_inset: 16.0,
        trailing_inset: 16.0,
    };

    let mut carousels = [
        Carousel::new("leading", bounds, &narrow, SnapEdge::Min),
        Carousel::new("center", bounds, &wide, SnapEdge::Mid),
        Carousel::new("trailing", bounds, &narrow, SnapEdge::Max),
    ];

    for carousel in &carousels {
        println!(
            "{:>8}: {} locations, content {:.0} wide, axis {:?}",
            carousel.name,
            carousel.resolver.locations().len(),
            carousel.content.width,
            carousel.resolver.infer_direction(carousel),
        );
    }

    for (velocity, target) in [
        (Vec2::new(1.8, 0.0), Point::new(410.0, 0.0)),
        (Vec2::new(0.0, 0.0), Point::new(655.0, 0.0)),
        (Vec2::new(-2.4, 0.0), Point::new(120.0, 0.0)),
        (Vec2::new(6.0, 0.0), Point::new(1.0e5, 0.0)),
    ] {
        for carousel in &mut carousels {
            carousel.fling(velocity, target);
        }
    }

    // Switching the edge realigns the current offset immediately.
    let center = &mut carousels[1];
    let geometry = center.geometry();
    if let Some(offset) = center.resolver.set_edge(SnapEdge::Min, &geometry, true) {
        println!(
            "{:>8}: edge -> Min, realigned {:.1} -> {:.1}",
            center.name, center.offset.x, offset.x
        );
        center.offset = offset;
    }
    println!("{:?}", center.resolver.debug_info());
}
