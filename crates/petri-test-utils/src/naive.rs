//! Naive full-rescan reference implementation.
//!
//! Recomputes every cell's neighbour count from scratch each generation
//! on the same toroidal topology and B3/S23 rule as the real engine.
//! Deliberately has no tracker, no double-buffer trickery beyond a full
//! next-state array, and no optimizations — it is the ground truth the
//! incremental engine must match bit for bit.

/// Full-rescan Game of Life board.
pub struct NaiveWorld {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl NaiveWorld {
    /// Create an all-dead board. Dimensions must be at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn set(&mut self, x: u32, y: u32, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|&&c| c).count() as u32
    }

    fn live_neighbours(&self, x: u32, y: u32) -> u8 {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let up = (y + self.height - 1) % self.height;
        let down = (y + 1) % self.height;
        let neighbours = [
            (left, up),
            (x, up),
            (right, up),
            (left, y),
            (right, y),
            (left, down),
            (x, down),
            (right, down),
        ];
        neighbours
            .iter()
            .filter(|&&(nx, ny)| self.cells[self.index(nx, ny)])
            .count() as u8
    }

    fn next_state(&self, x: u32, y: u32) -> bool {
        match self.live_neighbours(x, y) {
            3 => true,
            2 => self.is_alive(x, y),
            _ => false,
        }
    }

    /// Every cell that will flip on the next cycle, with its new state.
    pub fn next_flips(&self) -> Vec<(u32, u32, bool)> {
        let mut flips = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let next = self.next_state(x, y);
                if next != self.is_alive(x, y) {
                    flips.push((x, y, next));
                }
            }
        }
        flips
    }

    /// Advance one generation by full rescan.
    pub fn cycle(&mut self) {
        let mut next = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                next[self.index(x, y)] = self.next_state(x, y);
            }
        }
        self.cells = next;
    }
}
