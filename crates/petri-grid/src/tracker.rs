//! Activity tracking: which cells must be re-evaluated next cycle.
//!
//! [`ActivityTracker`] maintains two kinds of bookkeeping over the grid's
//! coordinate space (it never reads cell contents):
//!
//! - A **dirty mask** plus per-row column ranges plus an overall row
//!   range, double-buffered like the grid itself: the cycle engine reads
//!   the frozen copies while marking fresh dirtiness for the next cycle.
//! - **Live-presence counts** per row with a bounding row range, updated
//!   on every liveness flip. These survive across cycles (a settled
//!   board has an empty dirty mask but a populated presence range) and
//!   bound whole-board operations such as clearing.
//!
//! The soundness guarantee: any cell whose next state could differ from
//! its current state has its dirty bit set by the time the engine
//! freezes the mask. A cell's next state depends only on its Moore
//! neighbourhood in the previous generation, and every liveness flip —
//! cycle-driven or edit-driven — marks that whole neighbourhood.

use crate::range::CellRange;
use crate::torus;

/// Dirty-mask and live-presence bookkeeping for one grid.
///
/// Created alongside a [`Grid`](crate::Grid) of the same dimensions and
/// mutated only by the cycle engine and the direct-edit path.
#[derive(Clone, Debug)]
pub struct ActivityTracker {
    width: u32,
    height: u32,
    /// Mask being accumulated for the next cycle.
    dirty: Vec<bool>,
    /// Per-row column bounds over `dirty`.
    row_ranges: Vec<CellRange>,
    /// Row bounds over rows with any dirty cell.
    active_rows: CellRange,
    /// Frozen mask the current cycle reads.
    prev_dirty: Vec<bool>,
    /// Frozen per-row column bounds.
    prev_row_ranges: Vec<CellRange>,
    /// Frozen row bounds.
    prev_active_rows: CellRange,
    /// Live cells per row.
    row_live_counts: Vec<u32>,
    /// Row bounds over rows with any live cell.
    live_rows: CellRange,
}

impl ActivityTracker {
    /// Create an all-clear tracker for a `width x height` grid.
    ///
    /// Dimensions must already be validated by grid construction.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            dirty: vec![false; len],
            row_ranges: vec![CellRange::EMPTY; height as usize],
            active_rows: CellRange::EMPTY,
            prev_dirty: vec![false; len],
            prev_row_ranges: vec![CellRange::EMPTY; height as usize],
            prev_active_rows: CellRange::EMPTY,
            row_live_counts: vec![0; height as usize],
            live_rows: CellRange::EMPTY,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of range for {}x{} tracker",
            self.width,
            self.height,
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn mark_one(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.dirty[i] = true;
        self.row_ranges[y as usize].widen(x);
        self.active_rows.widen(y);
    }

    /// Record that `(x, y)` flipped liveness: mark it and its 8 toroidal
    /// neighbours dirty for the next cycle.
    ///
    /// A changed cell can only affect the future counts of its own Moore
    /// neighbourhood, so marking exactly that neighbourhood preserves
    /// the zero-false-negative guarantee. Wrap aliasing happens here:
    /// a flip in column 0 marks column `width - 1` in the same rows, so
    /// the frozen ranges always cover the opposite seam edge and the
    /// cycle scan needs no border special case.
    pub fn mark(&mut self, x: u32, y: u32) {
        self.mark_one(x, y);
        for (nx, ny) in torus::moore_neighbours(x, y, self.width, self.height) {
            self.mark_one(nx, ny);
        }
    }

    /// Record a liveness flip in row `y` for the presence bookkeeping.
    ///
    /// Births widen the live row range; the death that empties a row
    /// re-derives tight bounds with the inward shrink scan — the range
    /// must not keep covering a boundary row that no longer holds any
    /// live cell.
    pub fn record_liveness(&mut self, y: u32, alive: bool) {
        let row = y as usize;
        if alive {
            self.row_live_counts[row] += 1;
            self.live_rows.widen(y);
        } else {
            debug_assert!(self.row_live_counts[row] > 0);
            self.row_live_counts[row] -= 1;
            if self.row_live_counts[row] == 0 {
                let counts = &self.row_live_counts;
                self.live_rows = self.live_rows.tightened(|r| counts[r as usize] > 0);
            }
        }
    }

    /// Whether `(x, y)` is marked in the mask being accumulated.
    pub fn is_dirty(&self, x: u32, y: u32) -> bool {
        self.dirty[self.index(x, y)]
    }

    /// Whether `(x, y)` is marked in the frozen mask.
    pub fn was_dirty(&self, x: u32, y: u32) -> bool {
        self.prev_dirty[self.index(x, y)]
    }

    /// Column bounds of the accumulating mask for row `y`.
    pub fn row_range(&self, y: u32) -> CellRange {
        self.row_ranges[y as usize]
    }

    /// Frozen column bounds for row `y`.
    pub fn frozen_row_range(&self, y: u32) -> CellRange {
        self.prev_row_ranges[y as usize]
    }

    /// Frozen row bounds: the rows the current cycle must visit.
    pub fn frozen_rows(&self) -> CellRange {
        self.prev_active_rows
    }

    /// Row bounds over rows containing live cells.
    pub fn live_rows(&self) -> CellRange {
        self.live_rows
    }

    /// Whether no cell is pending re-evaluation.
    ///
    /// Drives the cycle engine's O(1) fast path on settled boards.
    pub fn is_idle(&self) -> bool {
        self.active_rows.is_empty()
    }

    /// Freeze the accumulated dirty state for the cycle about to run and
    /// start a fresh, all-clear accumulation for the one after it.
    ///
    /// Mirrors the grid's generation snapshot: the cycle reads the
    /// frozen copies while `mark` writes the fresh ones. Live-presence
    /// state is not part of the snapshot; it tracks the current grid
    /// contents, not a generation.
    pub fn snapshot(&mut self) {
        std::mem::swap(&mut self.dirty, &mut self.prev_dirty);
        std::mem::swap(&mut self.row_ranges, &mut self.prev_row_ranges);
        self.prev_active_rows = self.active_rows;
        self.dirty.fill(false);
        self.row_ranges.fill(CellRange::EMPTY);
        self.active_rows = CellRange::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let t = ActivityTracker::new(8, 8);
        assert!(t.is_idle());
        assert!(t.frozen_rows().is_empty());
        assert!(t.live_rows().is_empty());
    }

    #[test]
    fn mark_covers_moore_neighbourhood() {
        let mut t = ActivityTracker::new(8, 8);
        t.mark(3, 3);
        for x in 2..=4 {
            for y in 2..=4 {
                assert!(t.is_dirty(x, y), "({x}, {y}) should be dirty");
            }
        }
        assert!(!t.is_dirty(5, 3));
        assert_eq!(t.row_range(2).bounds(), Some((2, 4)));
        assert_eq!(t.row_range(3).bounds(), Some((2, 4)));
        assert_eq!(t.row_range(4).bounds(), Some((2, 4)));
        assert!(t.row_range(5).is_empty());
        assert!(!t.is_idle());
    }

    #[test]
    fn mark_wraps_across_seams() {
        let mut t = ActivityTracker::new(8, 8);
        t.mark(0, 0);
        // Opposite edges alias in: column 7 and row 7 pick up marks.
        assert!(t.is_dirty(7, 0));
        assert!(t.is_dirty(7, 7));
        assert!(t.is_dirty(0, 7));
        assert!(t.is_dirty(1, 1));
        // The wrapped mark lands in its own row's range.
        assert!(t.row_range(7).contains(7));
        assert!(t.row_range(7).contains(0));
    }

    #[test]
    fn snapshot_freezes_and_resets() {
        let mut t = ActivityTracker::new(8, 8);
        t.mark(3, 3);
        t.snapshot();
        assert!(t.was_dirty(3, 3));
        assert!(t.was_dirty(2, 2));
        assert!(!t.is_dirty(3, 3));
        assert!(t.is_idle());
        assert_eq!(t.frozen_rows().bounds(), Some((2, 4)));
        assert_eq!(t.frozen_row_range(3).bounds(), Some((2, 4)));
        // A second snapshot freezes the (empty) fresh state.
        t.snapshot();
        assert!(!t.was_dirty(3, 3));
        assert!(t.frozen_rows().is_empty());
    }

    #[test]
    fn marks_after_snapshot_target_next_cycle() {
        let mut t = ActivityTracker::new(8, 8);
        t.mark(1, 1);
        t.snapshot();
        t.mark(6, 6);
        assert!(t.was_dirty(1, 1));
        assert!(!t.was_dirty(6, 6));
        assert!(t.is_dirty(6, 6));
    }

    #[test]
    fn liveness_births_widen_live_rows() {
        let mut t = ActivityTracker::new(8, 8);
        t.record_liveness(2, true);
        t.record_liveness(5, true);
        assert_eq!(t.live_rows().bounds(), Some((2, 5)));
    }

    #[test]
    fn liveness_death_at_boundary_shrinks() {
        let mut t = ActivityTracker::new(8, 8);
        t.record_liveness(2, true);
        t.record_liveness(3, true);
        t.record_liveness(5, true);
        t.record_liveness(5, false);
        assert_eq!(t.live_rows().bounds(), Some((2, 3)));
        t.record_liveness(2, false);
        assert_eq!(t.live_rows().bounds(), Some((3, 3)));
        t.record_liveness(3, false);
        assert!(t.live_rows().is_empty());
    }

    #[test]
    fn interior_death_keeps_coverage() {
        let mut t = ActivityTracker::new(8, 8);
        t.record_liveness(1, true);
        t.record_liveness(3, true);
        t.record_liveness(6, true);
        t.record_liveness(3, false);
        // Interior holes are allowed; coverage of the remaining live
        // rows is what matters.
        assert!(t.live_rows().contains(1));
        assert!(t.live_rows().contains(6));
    }

    #[test]
    fn single_row_grid_marks_without_overflow() {
        let mut t = ActivityTracker::new(5, 1);
        t.mark(2, 0);
        assert!(t.is_dirty(1, 0));
        assert!(t.is_dirty(3, 0));
        assert_eq!(t.frozen_rows(), CellRange::EMPTY);
        t.snapshot();
        assert_eq!(t.frozen_rows(), CellRange::point(0));
    }
}
