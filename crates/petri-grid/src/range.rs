//! Inclusive index spans along one grid axis.

use std::fmt;

/// The minimal contiguous span along one axis containing every index of
/// interest, or empty when no such index exists.
///
/// Bounds are inclusive. The range only guarantees *coverage*: every
/// index of interest lies inside it, but interior indices need not be of
/// interest. [`CellRange::tightened`] re-derives exact bounds when a
/// boundary index stops qualifying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellRange(Option<(u32, u32)>);

impl CellRange {
    /// The empty range.
    pub const EMPTY: CellRange = CellRange(None);

    /// A range covering the single index `i`.
    pub fn point(i: u32) -> Self {
        Self(Some((i, i)))
    }

    /// A range covering `[start, end]` inclusive. Requires `start <= end`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "invalid range {start}..{end}");
        Self(Some((start, end)))
    }

    /// Whether the range covers nothing.
    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// Inclusive `(start, end)` bounds, or `None` when empty.
    pub fn bounds(self) -> Option<(u32, u32)> {
        self.0
    }

    /// Whether `i` lies inside the range.
    pub fn contains(self, i: u32) -> bool {
        match self.0 {
            Some((start, end)) => start <= i && i <= end,
            None => false,
        }
    }

    /// Grow the range just enough to cover `i`.
    pub fn widen(&mut self, i: u32) {
        self.0 = match self.0 {
            None => Some((i, i)),
            Some((start, end)) => Some((start.min(i), end.max(i))),
        };
    }

    /// Shrink back to tight bounds by scanning inward from both ends to
    /// the first and last index satisfying `pred`.
    ///
    /// Only walks indices inside the current bounds, never the full
    /// axis; returns [`CellRange::EMPTY`] when no index qualifies.
    pub fn tightened(self, pred: impl Fn(u32) -> bool) -> Self {
        let Some((start, end)) = self.0 else {
            return Self::EMPTY;
        };
        let mut s = start;
        while s <= end && !pred(s) {
            s += 1;
        }
        if s > end {
            return Self::EMPTY;
        }
        let mut e = end;
        while e > s && !pred(e) {
            e -= 1;
        }
        Self(Some((s, e)))
    }

    /// Iterate the covered indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        self.0.map(|(start, end)| start..=end).into_iter().flatten()
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some((start, end)) => write!(f, "{start}..{end}"),
            None => write!(f, "empty"),
        }
    }
}
