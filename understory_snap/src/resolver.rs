// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap resolution: axis inference, offset correction, and drag-end decisions.

use kurbo::{Point, Size, Vec2};
use log::{debug, trace};

use crate::locations::SnapLocations;
use crate::modes::{Axis, SnapDirection, SnapEdge};
use crate::viewport::{SnapViewport, ViewportKind};

/// Resolves the axis snapping applies to.
///
/// First match wins:
/// 1. [`ViewportKind::List`] always snaps vertically.
/// 2. An explicit `direction` is returned unchanged.
/// 3. [`ViewportKind::Grid`] uses the grid's own scroll axis.
/// 4. Otherwise the larger content dimension wins; ties resolve to vertical.
#[must_use]
pub fn infer_axis(direction: SnapDirection, kind: ViewportKind, content_size: Size) -> Axis {
    if kind == ViewportKind::List {
        return Axis::Vertical;
    }
    if let Some(axis) = direction.axis() {
        return axis;
    }
    if let ViewportKind::Grid { axis } = kind {
        return axis;
    }
    if content_size.width > content_size.height {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Maps a requested scroll offset to the nearest snap location.
///
/// Only the `axis` component of `requested` is considered; the returned point
/// carries the corrected value on `axis` and `0` on the other axis.
///
/// The requested offset is first converted into the position of `edge`, then
/// bracketed by the two surrounding locations. The nearer one wins, with the
/// exact midpoint going to the later location. Targets are kept within the
/// content extent and never negative. Degenerate input (non-positive or NaN
/// offsets, empty content) resolves to [`Point::ZERO`].
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_snap::{Axis, SnapEdge, SnapLocations, resolve_offset};
///
/// let locations = SnapLocations::new([100.0, 200.0, 300.0]);
/// let snapped = resolve_offset(
///     Point::new(120.0, 0.0),
///     Size::new(50.0, 50.0),
///     Size::new(1000.0, 50.0),
///     SnapEdge::Mid,
///     Axis::Horizontal,
///     &locations,
/// );
/// assert_eq!(snapped, Point::new(75.0, 0.0));
/// ```
#[must_use]
pub fn resolve_offset(
    requested: Point,
    bounds: Size,
    content_size: Size,
    edge: SnapEdge,
    axis: Axis,
    locations: &SnapLocations,
) -> Point {
    let requested_value = axis.component(requested);
    if requested_value.is_nan() || requested_value <= 0.0 {
        return Point::ZERO;
    }

    let extent = axis.extent(bounds);
    let maximum = edge.maximum_value(extent, axis.extent(content_size));
    let value = edge.to_edge_position(requested_value, extent);

    let last = locations.last();
    if value > last {
        // Past the final location: pin to it without re-applying the edge.
        let location = last.min(maximum).max(0.0);
        trace!("snap {value} past last location {last}, pinned to {location}");
        return axis.point(location);
    }

    let (prev, next) = locations.bracket(value);
    let next = next.min(maximum);

    let span = (next - prev).abs();
    let mid = next - span / 2.0;
    if mid <= 0.0 {
        return Point::ZERO;
    }

    let chosen = if value < mid { prev } else { next };
    let location = edge.to_offset(chosen, extent).max(0.0);
    trace!("snap {value} between {prev} and {next} (mid {mid}) -> {location}");
    axis.point(location)
}

/// Snap configuration with named defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Viewport edge aligned to snap locations. Defaults to [`SnapEdge::Min`].
    pub edge: SnapEdge,
    /// Axis snapping applies to. Defaults to [`SnapDirection::Automatic`].
    pub direction: SnapDirection,
}

impl SnapConfig {
    /// Creates a configuration from an edge and a direction.
    #[must_use]
    pub fn new(edge: SnapEdge, direction: SnapDirection) -> Self {
        Self { edge, direction }
    }

    /// Returns a copy with the given edge.
    #[must_use]
    pub fn with_edge(mut self, edge: SnapEdge) -> Self {
        self.edge = edge;
        self
    }

    /// Returns a copy with the given direction.
    #[must_use]
    pub fn with_direction(mut self, direction: SnapDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// What the host should do when a drag gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEndDecision {
    /// No snap locations are configured; keep the host's own target and
    /// continue with any downstream handlers as if snapping were absent.
    Defer,
    /// The drag ended at rest. Animate straight to the offset and stop; the
    /// pending target is not negotiated further and downstream handlers do
    /// not run.
    AnimateTo(Point),
    /// The drag ended with momentum. Replace the pending deceleration target
    /// with the offset, animate to it, and let downstream handlers run.
    Retarget(Point),
}

impl DragEndDecision {
    /// The corrected offset, if snapping produced one.
    #[must_use]
    pub fn target(self) -> Option<Point> {
        match self {
            Self::Defer => None,
            Self::AnimateTo(offset) | Self::Retarget(offset) => Some(offset),
        }
    }

    /// Whether the host's pending target offset should be replaced.
    #[must_use]
    pub fn overrides_target(self) -> bool {
        matches!(self, Self::Retarget(_))
    }

    /// Whether previously-installed host handlers should still run.
    #[must_use]
    pub fn invokes_downstream(self) -> bool {
        !matches!(self, Self::AnimateTo(_))
    }
}

/// Snapping state bound to a single viewport.
///
/// `SnapResolver` owns its [`SnapConfig`] and [`SnapLocations`] and borrows
/// the viewport's geometry per call through [`SnapViewport`]. It never
/// animates anything itself: every operation returns the offset the host
/// should move to.
///
/// ```rust
/// use kurbo::{Point, Size, Vec2};
/// use understory_snap::{
///     DragEndDecision, SnapConfig, SnapDirection, SnapGeometry, SnapLocations, SnapResolver,
/// };
///
/// let config = SnapConfig::default().with_direction(SnapDirection::Vertical);
/// let resolver =
///     SnapResolver::new(config).with_locations(SnapLocations::new([100.0, 200.0, 300.0]));
/// let viewport = SnapGeometry::new(Size::new(320.0, 100.0), Size::new(320.0, 1000.0));
///
/// // Released with downward momentum, heading for y = 160.
/// let decision = resolver.on_drag_end(&viewport, Vec2::new(0.0, 2.0), Point::new(0.0, 160.0));
/// assert_eq!(decision, DragEndDecision::Retarget(Point::new(0.0, 200.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SnapResolver {
    config: SnapConfig,
    locations: SnapLocations,
}

impl SnapResolver {
    /// Creates a resolver with no snap locations beyond `0`.
    #[must_use]
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            locations: SnapLocations::default(),
        }
    }

    /// Returns the resolver with the given locations installed.
    #[must_use]
    pub fn with_locations(mut self, locations: SnapLocations) -> Self {
        self.locations = locations;
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> SnapConfig {
        self.config
    }

    /// Returns the current snap edge.
    #[must_use]
    pub fn edge(&self) -> SnapEdge {
        self.config.edge
    }

    /// Returns the configured direction (possibly [`SnapDirection::Automatic`]).
    #[must_use]
    pub fn direction(&self) -> SnapDirection {
        self.config.direction
    }

    /// Returns the current snap locations.
    #[must_use]
    pub fn locations(&self) -> &SnapLocations {
        &self.locations
    }

    /// Resolves the effective axis for `viewport`.
    ///
    /// See [`infer_axis`] for the resolution order.
    #[must_use]
    pub fn infer_direction<V: SnapViewport + ?Sized>(&self, viewport: &V) -> Axis {
        infer_axis(self.config.direction, viewport.kind(), viewport.content_size())
    }

    /// Maps `requested` to the nearest snap location for `viewport`.
    #[must_use]
    pub fn resolve_offset<V: SnapViewport + ?Sized>(
        &self,
        viewport: &V,
        requested: Point,
    ) -> Point {
        resolve_offset(
            requested,
            viewport.bounds(),
            viewport.content_size(),
            self.config.edge,
            self.infer_direction(viewport),
            &self.locations,
        )
    }

    /// Returns the snap offset nearest to the viewport's current offset.
    #[must_use]
    pub fn realign<V: SnapViewport + ?Sized>(&self, viewport: &V) -> Point {
        self.resolve_offset(viewport, viewport.content_offset())
    }

    /// Decides how a drag release should be corrected.
    ///
    /// `velocity` is the release velocity and `requested` the offset the
    /// host would decelerate to on its own.
    #[must_use]
    pub fn on_drag_end<V: SnapViewport + ?Sized>(
        &self,
        viewport: &V,
        velocity: Vec2,
        requested: Point,
    ) -> DragEndDecision {
        if !self.locations.has_snap_targets() {
            return DragEndDecision::Defer;
        }

        let axis = self.infer_direction(viewport);
        let offset = self.resolve_offset(viewport, requested);
        let speed = axis.vec_component(velocity).abs();

        let decision = if speed > 0.0 {
            DragEndDecision::Retarget(offset)
        } else {
            DragEndDecision::AnimateTo(offset)
        };
        debug!("drag end on {axis:?} axis at {requested:?}, speed {speed}: {decision:?}");
        decision
    }

    /// Replaces the snap locations.
    ///
    /// When `realign_now` is set, returns the offset the host should animate
    /// to so the viewport rests on the new locations.
    pub fn set_locations<V: SnapViewport + ?Sized>(
        &mut self,
        locations: SnapLocations,
        viewport: &V,
        realign_now: bool,
    ) -> Option<Point> {
        debug!("snap locations set to {locations}");
        self.locations = locations;
        self.realign_if(viewport, realign_now)
    }

    /// Replaces the snap edge, optionally realigning.
    pub fn set_edge<V: SnapViewport + ?Sized>(
        &mut self,
        edge: SnapEdge,
        viewport: &V,
        realign_now: bool,
    ) -> Option<Point> {
        debug!("snap edge set to {edge:?}");
        self.config.edge = edge;
        self.realign_if(viewport, realign_now)
    }

    /// Replaces the snap direction, optionally realigning.
    pub fn set_direction<V: SnapViewport + ?Sized>(
        &mut self,
        direction: SnapDirection,
        viewport: &V,
        realign_now: bool,
    ) -> Option<Point> {
        debug!("snap direction set to {direction:?}");
        self.config.direction = direction;
        self.realign_if(viewport, realign_now)
    }

    /// Replaces edge and direction together, optionally realigning.
    pub fn set_config<V: SnapViewport + ?Sized>(
        &mut self,
        config: SnapConfig,
        viewport: &V,
        realign_now: bool,
    ) -> Option<Point> {
        debug!("snap config set to {config:?}");
        self.config = config;
        self.realign_if(viewport, realign_now)
    }

    /// Snapshot of the current resolver state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SnapResolverDebugInfo {
        SnapResolverDebugInfo {
            edge: self.config.edge,
            direction: self.config.direction,
            locations: self.locations.clone(),
            snapping_active: self.locations.has_snap_targets(),
        }
    }

    fn realign_if<V: SnapViewport + ?Sized>(
        &self,
        viewport: &V,
        realign_now: bool,
    ) -> Option<Point> {
        realign_now.then(|| self.realign(viewport))
    }
}

/// Debug snapshot of a [`SnapResolver`] state.
#[derive(Clone, Debug)]
pub struct SnapResolverDebugInfo {
    /// Configured snap edge.
    pub edge: SnapEdge,
    /// Configured direction, before inference.
    pub direction: SnapDirection,
    /// Installed snap locations.
    pub locations: SnapLocations,
    /// Whether drag ends are currently corrected.
    pub snapping_active: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{DragEndDecision, SnapConfig, SnapResolver, infer_axis, resolve_offset};
    use crate::{Axis, SnapDirection, SnapEdge, SnapGeometry, SnapLocations, ViewportKind};

    fn horizontal(bounds: f64, content: f64) -> SnapGeometry {
        SnapGeometry::new(Size::new(bounds, 100.0), Size::new(content, 100.0))
    }

    fn resolver(edge: SnapEdge, locations: &[f64]) -> SnapResolver {
        SnapResolver::new(SnapConfig::new(edge, SnapDirection::Horizontal))
            .with_locations(SnapLocations::new(locations.iter().copied()))
    }

    #[test]
    fn list_kind_wins_over_explicit_direction() {
        let axis = infer_axis(
            SnapDirection::Horizontal,
            ViewportKind::List,
            Size::new(1000.0, 10.0),
        );
        assert_eq!(axis, Axis::Vertical);
    }

    #[test]
    fn explicit_direction_wins_over_grid_and_aspect() {
        let kind = ViewportKind::Grid {
            axis: Axis::Vertical,
        };
        let axis = infer_axis(SnapDirection::Horizontal, kind, Size::new(10.0, 1000.0));
        assert_eq!(axis, Axis::Horizontal);
    }

    #[test]
    fn grid_axis_ignores_aspect_ratio() {
        let kind = ViewportKind::Grid {
            axis: Axis::Vertical,
        };
        let axis = infer_axis(SnapDirection::Automatic, kind, Size::new(300.0, 100.0));
        assert_eq!(axis, Axis::Vertical);

        let kind = ViewportKind::Grid {
            axis: Axis::Horizontal,
        };
        let axis = infer_axis(SnapDirection::Automatic, kind, Size::new(100.0, 300.0));
        assert_eq!(axis, Axis::Horizontal);
    }

    #[test]
    fn plain_viewport_uses_larger_content_dimension() {
        let plain = ViewportKind::Plain;
        assert_eq!(
            infer_axis(SnapDirection::Automatic, plain, Size::new(300.0, 100.0)),
            Axis::Horizontal
        );
        assert_eq!(
            infer_axis(SnapDirection::Automatic, plain, Size::new(100.0, 300.0)),
            Axis::Vertical
        );
        // Ties and empty content fall back to vertical.
        assert_eq!(
            infer_axis(SnapDirection::Automatic, plain, Size::new(200.0, 200.0)),
            Axis::Vertical
        );
        assert_eq!(
            infer_axis(SnapDirection::Automatic, plain, Size::ZERO),
            Axis::Vertical
        );
    }

    #[test]
    fn non_positive_request_resolves_to_zero() {
        let locations = SnapLocations::new([100.0, 200.0]);
        let bounds = Size::new(50.0, 50.0);
        let content = Size::new(1000.0, 50.0);
        for x in [0.0, -0.0, -10.0, f64::NAN] {
            for edge in [SnapEdge::Min, SnapEdge::Mid, SnapEdge::Max] {
                let out = resolve_offset(
                    Point::new(x, 0.0),
                    bounds,
                    content,
                    edge,
                    Axis::Horizontal,
                    &locations,
                );
                assert_eq!(out, Point::ZERO, "x = {x}, edge = {edge:?}");
            }
        }
    }

    #[test]
    fn mid_edge_scenario() {
        let r = resolver(SnapEdge::Mid, &[0.0, 100.0, 200.0, 300.0]);
        let vp = horizontal(50.0, 1000.0);
        // 120 + 25 = 145, bracketed by (100, 200), midpoint 150: choose 100, minus 25.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(120.0, 0.0)),
            Point::new(75.0, 0.0)
        );
        // 140 + 25 = 165 crosses the midpoint: choose 200, minus 25.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(140.0, 0.0)),
            Point::new(175.0, 0.0)
        );
    }

    #[test]
    fn exact_midpoint_favors_next() {
        let r = resolver(SnapEdge::Min, &[100.0, 200.0]);
        let vp = horizontal(10.0, 1000.0);
        assert_eq!(
            r.resolve_offset(&vp, Point::new(150.0, 0.0)),
            Point::new(200.0, 0.0)
        );
        assert_eq!(
            r.resolve_offset(&vp, Point::new(149.9, 0.0)),
            Point::new(100.0, 0.0)
        );
    }

    #[test]
    fn max_edge_aligns_trailing_edge() {
        let r = resolver(SnapEdge::Max, &[100.0, 200.0, 300.0]);
        let vp = horizontal(100.0, 1000.0);
        // Trailing edge at 60 + 100 = 160 → nearer to 200 → offset 100.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(60.0, 0.0)),
            Point::new(100.0, 0.0)
        );
        // Trailing edge at 40 + 100 = 140 → nearer to 100 → offset 0.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(40.0, 0.0)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn beyond_last_location_pins_to_it() {
        let r = resolver(SnapEdge::Min, &[100.0, 200.0, 300.0]);
        let vp = horizontal(100.0, 500.0);
        assert_eq!(
            r.resolve_offset(&vp, Point::new(450.0, 0.0)),
            Point::new(300.0, 0.0)
        );
    }

    #[test]
    fn beyond_last_location_skips_edge_readjustment() {
        let locations = [0.0, 100.0, 200.0, 300.0];

        let r = resolver(SnapEdge::Mid, &locations);
        let vp = horizontal(50.0, 1000.0);
        // Center at 280 + 25 = 305 is past the last location: offset is 300, not 275.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(280.0, 0.0)),
            Point::new(300.0, 0.0)
        );
        // Center at 270 + 25 = 295 is bracketed by (200, 300) → 300 - 25.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(270.0, 0.0)),
            Point::new(275.0, 0.0)
        );

        let r = resolver(SnapEdge::Max, &locations);
        let vp = horizontal(100.0, 1000.0);
        // Trailing edge at 250 + 100 = 350 is past the last location.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(250.0, 0.0)),
            Point::new(300.0, 0.0)
        );
        // Trailing edge at 190 + 100 = 290 → 300 - 100.
        assert_eq!(
            r.resolve_offset(&vp, Point::new(190.0, 0.0)),
            Point::new(200.0, 0.0)
        );
    }

    #[test]
    fn targets_are_clamped_to_content_extent() {
        // Maximum Min-edge offset is 500 - 100 = 400.
        let r = resolver(SnapEdge::Min, &[200.0, 450.0]);
        let vp = horizontal(100.0, 500.0);
        assert_eq!(
            r.resolve_offset(&vp, Point::new(430.0, 0.0)),
            Point::new(400.0, 0.0)
        );
        assert_eq!(
            r.resolve_offset(&vp, Point::new(480.0, 0.0)),
            Point::new(400.0, 0.0)
        );
    }

    #[test]
    fn content_smaller_than_viewport_resolves_to_zero() {
        let r = resolver(SnapEdge::Min, &[100.0, 200.0]);
        let vp = horizontal(300.0, 250.0);
        assert_eq!(r.resolve_offset(&vp, Point::new(120.0, 0.0)), Point::ZERO);
        assert_eq!(r.resolve_offset(&vp, Point::new(900.0, 0.0)), Point::ZERO);
    }

    #[test]
    fn zero_bounds_and_content_are_safe() {
        let r = resolver(SnapEdge::Mid, &[100.0, 200.0]);
        let vp = horizontal(0.0, 0.0);
        assert_eq!(r.resolve_offset(&vp, Point::new(120.0, 0.0)), Point::ZERO);
    }

    #[test]
    fn orthogonal_axis_is_zeroed() {
        let r = SnapResolver::new(SnapConfig::new(SnapEdge::Min, SnapDirection::Vertical))
            .with_locations(SnapLocations::new([100.0, 200.0]));
        let vp = SnapGeometry::new(Size::new(100.0, 100.0), Size::new(100.0, 1000.0));
        assert_eq!(
            r.resolve_offset(&vp, Point::new(37.0, 180.0)),
            Point::new(0.0, 200.0)
        );
    }

    #[test]
    fn drag_end_without_targets_defers() {
        let r = resolver(SnapEdge::Min, &[]);
        let vp = horizontal(100.0, 1000.0);
        let decision = r.on_drag_end(&vp, Vec2::new(3.0, 0.0), Point::new(140.0, 0.0));
        assert_eq!(decision, DragEndDecision::Defer);
        assert_eq!(decision.target(), None);
        assert!(!decision.overrides_target());
        assert!(decision.invokes_downstream());
    }

    #[test]
    fn drag_end_at_rest_animates_directly() {
        let r = resolver(SnapEdge::Min, &[100.0, 200.0]);
        let vp = horizontal(100.0, 1000.0);
        // Vertical speed does not count on a horizontal axis.
        let decision = r.on_drag_end(&vp, Vec2::new(0.0, 9.0), Point::new(140.0, 0.0));
        assert_eq!(decision, DragEndDecision::AnimateTo(Point::new(100.0, 0.0)));
        assert!(!decision.overrides_target());
        assert!(!decision.invokes_downstream());
    }

    #[test]
    fn drag_end_with_momentum_retargets() {
        let r = resolver(SnapEdge::Min, &[100.0, 200.0]);
        let vp = horizontal(100.0, 1000.0);
        let decision = r.on_drag_end(&vp, Vec2::new(-4.0, 0.0), Point::new(160.0, 0.0));
        assert_eq!(decision, DragEndDecision::Retarget(Point::new(200.0, 0.0)));
        assert_eq!(decision.target(), Some(Point::new(200.0, 0.0)));
        assert!(decision.overrides_target());
        assert!(decision.invokes_downstream());
    }

    #[test]
    fn setters_realign_only_when_asked() {
        let vp = horizontal(100.0, 1000.0).with_offset(Point::new(130.0, 0.0));
        let mut r = SnapResolver::new(SnapConfig::new(SnapEdge::Min, SnapDirection::Horizontal));

        let none = r.set_locations(SnapLocations::new([100.0, 200.0]), &vp, false);
        assert_eq!(none, None);
        assert!(r.locations().has_snap_targets());

        let realigned = r.set_locations(SnapLocations::new([100.0, 200.0]), &vp, true);
        assert_eq!(realigned, Some(Point::new(100.0, 0.0)));

        // Centering moves the reference point to 130 + 50 = 180 → 200 - 50.
        let realigned = r.set_edge(SnapEdge::Mid, &vp, true);
        assert_eq!(realigned, Some(Point::new(150.0, 0.0)));
        assert_eq!(r.edge(), SnapEdge::Mid);

        let realigned = r.set_direction(SnapDirection::Vertical, &vp, true);
        assert_eq!(realigned, Some(Point::ZERO));
        assert_eq!(r.direction(), SnapDirection::Vertical);

        let none = r.set_config(SnapConfig::default(), &vp, false);
        assert_eq!(none, None);
        assert_eq!(r.config(), SnapConfig::default());
    }

    #[test]
    fn debug_info_reflects_state() {
        let r = resolver(SnapEdge::Max, &[10.0]);
        let info = r.debug_info();
        assert_eq!(info.edge, SnapEdge::Max);
        assert_eq!(info.direction, SnapDirection::Horizontal);
        assert_eq!(info.locations.as_slice(), &[0.0, 10.0]);
        assert!(info.snapping_active);

        let info = SnapResolver::default().debug_info();
        assert!(!info.snapping_active);
        assert_eq!(info.edge, SnapEdge::Min);
        assert_eq!(info.direction, SnapDirection::Automatic);
    }
}
