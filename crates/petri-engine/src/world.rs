//! The world: grid + tracker + observers, stepped one cycle at a time.

use petri_grid::{ActivityTracker, CellChange, CellRange, Grid, GridError};

use crate::observer::{CellObserver, ObserverId};

/// A Game of Life world stepped by the incremental cycle engine.
///
/// Owns the [`Grid`] and [`ActivityTracker`] pair exclusively; nothing
/// else writes them. All mutating methods take `&mut self`, so a world
/// is `Send` but never shared — callers serialize ticks.
///
/// Construction gives an all-dead board; seed it through
/// [`set_cell`](World::set_cell) / [`set_cells`](World::set_cells) and
/// drive it with [`cycle`](World::cycle). Resizing is not an in-place
/// operation: build a new `World` and reseed.
pub struct World {
    grid: Grid,
    tracker: ActivityTracker,
    observers: Vec<(ObserverId, Box<dyn CellObserver>)>,
    next_observer_id: u64,
    in_cycle: bool,
}

impl World {
    /// Create an all-dead `width x height` world.
    ///
    /// Both dimensions must be at least 1; see [`GridError`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?;
        let tracker = ActivityTracker::new(width, height);
        Ok(Self {
            grid,
            tracker,
            observers: Vec::new(),
            next_observer_id: 0,
            in_cycle: false,
        })
    }

    /// World width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// World height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Generations elapsed since construction.
    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Number of live cells.
    pub fn population(&self) -> u32 {
        self.grid.population()
    }

    /// Whether `(x, y)` is alive in the current generation.
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.grid.get(x, y)
    }

    /// Register an observer; it receives every subsequent cell flip.
    pub fn subscribe(&mut self, observer: Box<dyn CellObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the id was already removed or never issued.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(observers: &mut [(ObserverId, Box<dyn CellObserver>)], change: CellChange) {
        for (_, observer) in observers.iter_mut() {
            observer.cell_changed(change);
        }
    }

    /// Write one cell, outside of a cycle.
    ///
    /// Updates the population, marks the cell's neighbourhood for the
    /// next cycle, and notifies observers — all only if the write
    /// actually flips the cell. Returns whether it did.
    pub fn set_cell(&mut self, x: u32, y: u32, alive: bool) -> bool {
        match self.grid.set(x, y, alive) {
            Some(change) => {
                self.tracker.mark(x, y);
                self.tracker.record_liveness(y, alive);
                Self::notify(&mut self.observers, change);
                true
            }
            None => false,
        }
    }

    /// Invert one cell, outside of a cycle. Returns the new state.
    pub fn toggle_cell(&mut self, x: u32, y: u32) -> bool {
        let change = self.grid.toggle(x, y);
        self.tracker.mark(x, y);
        self.tracker.record_liveness(y, change.alive);
        Self::notify(&mut self.observers, change);
        change.alive
    }

    /// Apply a batch of writes through the normal edit path.
    pub fn set_cells(&mut self, cells: impl IntoIterator<Item = (u32, u32, bool)>) {
        for (x, y, alive) in cells {
            self.set_cell(x, y, alive);
        }
    }

    /// Kill every live cell, leaving the generation count untouched.
    ///
    /// Scans only the rows the presence bookkeeping knows can hold live
    /// cells. Each kill notifies observers and marks dirtiness exactly
    /// like a direct edit. Returns the number of cells killed.
    pub fn clear(&mut self) -> u32 {
        let rows = self.tracker.live_rows();
        let mut killed = 0;
        for y in rows.iter() {
            for x in 0..self.grid.width() {
                if self.grid.get(x, y) {
                    killed += 1;
                    self.set_cell(x, y, false);
                }
            }
        }
        debug_assert_eq!(self.grid.population(), 0);
        killed
    }

    /// Advance the world one generation.
    ///
    /// Re-evaluates only cells in the frozen dirty mask, applies the
    /// B3/S23 rule against the frozen previous generation, and notifies
    /// observers of every flip. Returns the number of cells that
    /// changed; a settled board returns 0 in O(1) without touching any
    /// cell. Not reentrant: a call while one is in progress panics.
    pub fn cycle(&mut self) -> u32 {
        assert!(!self.in_cycle, "cycle() called reentrantly");
        if self.tracker.is_idle() {
            self.grid.advance_generation();
            return 0;
        }
        self.in_cycle = true;

        self.grid.snapshot_generation();
        self.tracker.snapshot();

        let mut changed = 0u32;
        let rows: CellRange = self.tracker.frozen_rows();
        for y in rows.iter() {
            let span = self.tracker.frozen_row_range(y);
            for x in span.iter() {
                if !self.tracker.was_dirty(x, y) {
                    continue;
                }
                let was = self.grid.previous(x, y);
                let next = match self.grid.count_live_neighbors(x, y) {
                    3 => true,
                    2 => was,
                    _ => false,
                };
                if next == was {
                    continue;
                }
                if let Some(change) = self.grid.set(x, y, next) {
                    self.tracker.mark(x, y);
                    self.tracker.record_liveness(y, next);
                    changed += 1;
                    Self::notify(&mut self.observers, change);
                }
            }
        }

        self.in_cycle = false;
        changed
    }
}
