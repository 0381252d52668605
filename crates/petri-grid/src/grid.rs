//! Double-buffered toroidal cell grid.
//!
//! [`Grid`] owns two generations of cell state: `cells` (the generation
//! being built) and `previous` (the frozen generation neighbour counting
//! reads). The split is what keeps counts correct mid-cycle — writes to
//! the new generation never disturb the counts of the one being read.

use crate::error::GridError;
use crate::torus;

/// A single cell flipping state.
///
/// Returned by [`Grid::set`] when a write actually changes a cell, and
/// delivered verbatim to change subscribers by the engine. One type
/// serves both the cycle path and the direct-edit path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    /// Column of the flipped cell.
    pub x: u32,
    /// Row of the flipped cell.
    pub y: u32,
    /// The cell's new state (`true` = alive).
    pub alive: bool,
}

/// A fixed-size toroidal grid of boolean cells.
///
/// Coordinates are `(x, y)` with `x` in `[0, width)` and `y` in
/// `[0, height)`; storage is row-major. Out-of-range coordinates are a
/// contract violation and panic — callers validate bounds at the
/// boundary, not here.
///
/// The population count is maintained incrementally on every mutation
/// and is never recomputed by rescanning.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    previous: Vec<bool>,
    generation: u64,
    population: u32,
}

impl Grid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid.
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        // Each dimension fits on its own; the product can still overflow
        // a 32-bit usize.
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::TooManyCells { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            previous: vec![false; len],
            generation: 0,
            population: 0,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Generations elapsed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> u32 {
        self.population
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height,
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Current liveness of `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Liveness of `(x, y)` in the frozen previous generation.
    #[inline]
    pub fn previous(&self, x: u32, y: u32) -> bool {
        self.previous[self.index(x, y)]
    }

    /// Write `alive` to `(x, y)`, adjusting the population.
    ///
    /// Returns `Some(CellChange)` if the cell actually flipped, `None`
    /// for a no-op write (no side effects at all in that case).
    pub fn set(&mut self, x: u32, y: u32, alive: bool) -> Option<CellChange> {
        let i = self.index(x, y);
        if self.cells[i] == alive {
            return None;
        }
        self.cells[i] = alive;
        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        Some(CellChange { x, y, alive })
    }

    /// Invert the state of `(x, y)`, adjusting the population.
    ///
    /// Always flips, so always produces a change.
    pub fn toggle(&mut self, x: u32, y: u32) -> CellChange {
        let i = self.index(x, y);
        let alive = !self.cells[i];
        self.cells[i] = alive;
        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        CellChange { x, y, alive }
    }

    /// Freeze the current generation and advance the counter.
    ///
    /// Copies `cells` into the previous-generation buffer in full — the
    /// invariant that neighbour counting reads a frozen generation
    /// requires the copy — and increments the generation count.
    pub fn snapshot_generation(&mut self) {
        self.previous.copy_from_slice(&self.cells);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance the generation counter without snapshotting.
    ///
    /// Used by the idle fast path: when no cell can change there is
    /// nothing to freeze.
    pub fn advance_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Count live cells among the 8 toroidal neighbours of `(x, y)`,
    /// reading the frozen previous generation.
    pub fn count_live_neighbors(&self, x: u32, y: u32) -> u8 {
        let mut alive = 0u8;
        for (nx, ny) in torus::moore_neighbours(x, y, self.width, self.height) {
            if self.previous[self.index(nx, ny)] {
                alive += 1;
            }
        }
        alive
    }
}
