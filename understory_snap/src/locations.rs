// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted, deduplicated snap locations along one axis.

use alloc::vec::Vec;
use core::fmt;

/// Error returned by [`SnapLocations::try_new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationError {
    /// A location was NaN or infinite.
    NonFinite {
        /// Position of the offending value in the input sequence.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index, value } => {
                write!(f, "snap location {value} at index {index} is not finite")
            }
        }
    }
}

impl core::error::Error for LocationError {}

/// An ordered set of candidate snap offsets along one axis.
///
/// Locations are positions in the host's content coordinate space; the
/// resolver's [`SnapEdge`](crate::SnapEdge) decides which point of the
/// viewport lands on them.
/// The set upholds three invariants:
/// - it always contains `0`, even if the input did not;
/// - values are unique (exact equality, with `-0.0` folded into `0.0`);
/// - values are sorted ascending.
///
/// A set is built wholesale from raw input and never mutated in place;
/// callers replace it when their layout changes.
///
/// ```rust
/// use understory_snap::SnapLocations;
///
/// let locations = SnapLocations::new([200.0, 100.0, 200.0]);
/// assert_eq!(locations.as_slice(), &[0.0, 100.0, 200.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<f64>", into = "Vec<f64>"))]
pub struct SnapLocations {
    values: Vec<f64>,
}

impl SnapLocations {
    /// Builds a location set from raw offsets.
    ///
    /// Non-finite values are dropped with a warning. An empty input yields
    /// the singleton `{0}`.
    #[must_use]
    pub fn new(raw: impl IntoIterator<Item = f64>) -> Self {
        let mut values = Vec::new();
        values.push(0.0);
        for (index, value) in raw.into_iter().enumerate() {
            if value.is_finite() {
                values.push(value);
            } else {
                log::warn!("dropping non-finite snap location {value} at index {index}");
            }
        }
        Self::from_finite(values)
    }

    /// Builds a location set, rejecting the first non-finite value.
    pub fn try_new(raw: impl IntoIterator<Item = f64>) -> Result<Self, LocationError> {
        let mut values = Vec::new();
        values.push(0.0);
        for (index, value) in raw.into_iter().enumerate() {
            if !value.is_finite() {
                return Err(LocationError::NonFinite { index, value });
            }
            values.push(value);
        }
        Ok(Self::from_finite(values))
    }

    /// Builds locations for a strip of consecutive items.
    ///
    /// Each item contributes one location at its trailing edge plus
    /// `spacing`, which is the leading edge of the item after it. Together
    /// with the implicit `0` this yields the leading edge of every item.
    ///
    /// ```rust
    /// use understory_snap::SnapLocations;
    ///
    /// let locations = SnapLocations::from_extents([80.0, 80.0, 120.0], 10.0);
    /// assert_eq!(locations.as_slice(), &[0.0, 90.0, 180.0, 310.0]);
    /// ```
    #[must_use]
    pub fn from_extents(extents: impl IntoIterator<Item = f64>, spacing: f64) -> Self {
        let mut running = 0.0;
        Self::new(extents.into_iter().map(|extent| {
            running += extent + spacing;
            running
        }))
    }

    fn from_finite(mut values: Vec<f64>) -> Self {
        for value in &mut values {
            // Fold `-0.0` so it deduplicates against the mandatory `0`.
            if *value == 0.0 {
                *value = 0.0;
            }
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { values }
    }

    /// Returns the locations as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates the locations in ascending order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, f64>> {
        self.values.iter().copied()
    }

    /// Number of locations, including the mandatory `0`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a location set contains at least `0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if any location besides the mandatory `0` is configured.
    #[must_use]
    pub fn has_snap_targets(&self) -> bool {
        self.values.len() > 1
    }

    /// Smallest location.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Largest location.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Returns `true` if `value` is exactly one of the locations.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let value = if value == 0.0 { 0.0 } else { value };
        self.values
            .binary_search_by(|l| l.total_cmp(&value))
            .is_ok()
    }

    /// Returns the `(prev, next)` pair bracketing `value`.
    ///
    /// `next` is the first location strictly greater than `value` and `prev`
    /// the location before it (or `next` itself when it is the first entry).
    /// When no location is greater, the pair spans the whole set.
    #[must_use]
    pub fn bracket(&self, value: f64) -> (f64, f64) {
        let i = self.values.partition_point(|&l| l <= value);
        match self.values.get(i) {
            Some(&next) => (self.values[i.saturating_sub(1)], next),
            None => (self.first(), self.last()),
        }
    }
}

impl Default for SnapLocations {
    fn default() -> Self {
        Self {
            values: alloc::vec![0.0],
        }
    }
}

impl From<Vec<f64>> for SnapLocations {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<SnapLocations> for Vec<f64> {
    fn from(locations: SnapLocations) -> Self {
        locations.values
    }
}

impl FromIterator<f64> for SnapLocations {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SnapLocations {
    type Item = f64;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SnapLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
