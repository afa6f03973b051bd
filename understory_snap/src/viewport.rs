// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided viewport geometry.

use kurbo::{Point, Size};

use crate::modes::Axis;

/// Structural hint about the scroll container, used by axis inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportKind {
    /// A generic scroll region with no structural hints.
    #[default]
    Plain,
    /// A single-column list; always snaps vertically.
    List,
    /// A grid-like container that reports its own scroll axis.
    Grid {
        /// The axis the grid's layout scrolls along.
        axis: Axis,
    },
}

/// Read-only view of a scroll viewport's geometry.
///
/// Hosts implement this for whatever owns their scroll state. The resolver
/// borrows it for the duration of one call and never stores it, so a binding
/// never controls or outlives the viewport.
pub trait SnapViewport {
    /// Visible size of the viewport.
    fn bounds(&self) -> Size;

    /// Total scrollable content size.
    fn content_size(&self) -> Size;

    /// Current scroll offset of the viewport's leading corner.
    fn content_offset(&self) -> Point;

    /// Structural hint for axis inference.
    fn kind(&self) -> ViewportKind {
        ViewportKind::Plain
    }
}

impl<V: SnapViewport + ?Sized> SnapViewport for &V {
    fn bounds(&self) -> Size {
        (**self).bounds()
    }

    fn content_size(&self) -> Size {
        (**self).content_size()
    }

    fn content_offset(&self) -> Point {
        (**self).content_offset()
    }

    fn kind(&self) -> ViewportKind {
        (**self).kind()
    }
}

/// A plain snapshot of viewport geometry.
///
/// Useful when the host already has the numbers at hand, and in tests.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SnapGeometry {
    /// Visible size of the viewport.
    pub bounds: Size,
    /// Total scrollable content size.
    pub content_size: Size,
    /// Current scroll offset.
    pub offset: Point,
    /// Structural hint for axis inference.
    pub kind: ViewportKind,
}

impl SnapGeometry {
    /// Creates a plain viewport snapshot at offset zero.
    #[must_use]
    pub fn new(bounds: Size, content_size: Size) -> Self {
        Self {
            bounds,
            content_size,
            offset: Point::ZERO,
            kind: ViewportKind::Plain,
        }
    }

    /// Returns a copy with the given current offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a copy with the given viewport kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ViewportKind) -> Self {
        self.kind = kind;
        self
    }
}

impl SnapViewport for SnapGeometry {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn kind(&self) -> ViewportKind {
        self.kind
    }
}
