// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Which axis snapping is applied to.
///
/// `Automatic` defers the decision to [`crate::infer_axis`], which consults the
/// viewport kind and content aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapDirection {
    /// Resolve the axis from viewport hints and content geometry.
    ///
    /// List-like viewports always snap vertically. Grid-like viewports use
    /// their own scroll axis. Anything else snaps along the larger content
    /// dimension, falling back to vertical on ties.
    #[default]
    Automatic,
    /// Snap along the vertical (Y) axis only.
    Vertical,
    /// Snap along the horizontal (X) axis only.
    Horizontal,
}

impl SnapDirection {
    /// Returns the explicit axis, or `None` for [`SnapDirection::Automatic`].
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Automatic => None,
            Self::Vertical => Some(Axis::Vertical),
            Self::Horizontal => Some(Axis::Horizontal),
        }
    }
}

impl From<Axis> for SnapDirection {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Horizontal,
            Axis::Vertical => Self::Vertical,
        }
    }
}

/// A resolved scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis.
    Horizontal,
    /// The Y axis.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the component of `pt` along this axis.
    #[must_use]
    pub fn component(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn vec_component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Builds a point with `value` on this axis and `0` on the other.
    #[must_use]
    pub fn point(self, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(value, 0.0),
            Self::Vertical => Point::new(0.0, value),
        }
    }
}

/// The viewport edge that is aligned to a snap location.
///
/// Snap locations are content positions. The edge decides which point of the
/// viewport should land on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapEdge {
    /// Align the leading edge (left for horizontal, top for vertical).
    #[default]
    Min,
    /// Align the center of the viewport.
    Mid,
    /// Align the trailing edge (right for horizontal, bottom for vertical).
    Max,
}

impl SnapEdge {
    /// Converts a viewport offset into the position of this edge.
    ///
    /// `extent` is the viewport size along the active axis.
    #[must_use]
    pub fn to_edge_position(self, offset: f64, extent: f64) -> f64 {
        match self {
            Self::Min => offset,
            Self::Mid => offset + extent / 2.0,
            Self::Max => offset + extent,
        }
    }

    /// Inverse of [`SnapEdge::to_edge_position`].
    #[must_use]
    pub fn to_offset(self, position: f64, extent: f64) -> f64 {
        match self {
            Self::Min => position,
            Self::Mid => position - extent / 2.0,
            Self::Max => position - extent,
        }
    }

    /// Greatest edge position reachable without scrolling past the content.
    ///
    /// `extent` is the viewport size and `content` the content size, both
    /// along the active axis.
    #[must_use]
    pub fn maximum_value(self, extent: f64, content: f64) -> f64 {
        match self {
            Self::Min => content - extent,
            Self::Mid => content - extent / 2.0,
            Self::Max => content,
        }
    }
}
