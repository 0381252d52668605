//! Canned patterns, as `(x, y)` offsets from a placement origin.

use petri_engine::World;
use petri_grid::GridError;

/// 2x2 block: the simplest still life.
pub const BLOCK: [(u32, u32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Vertical blinker: period-2 oscillator.
pub const BLINKER: [(u32, u32); 3] = [(0, 0), (0, 1), (0, 2)];

/// Standard glider, oriented to translate by `(+1, +1)` every 4 cycles.
pub const GLIDER: [(u32, u32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Place a pattern with its offsets shifted by `origin`, wrapping
/// toroidally so patterns can straddle the seams.
pub fn place(world: &mut World, origin: (u32, u32), cells: &[(u32, u32)]) {
    let (ox, oy) = origin;
    for &(dx, dy) in cells {
        let x = (ox + dx) % world.width();
        let y = (oy + dy) % world.height();
        world.set_cell(x, y, true);
    }
}

/// Build a world holding a single placed pattern.
pub fn world_with(
    width: u32,
    height: u32,
    origin: (u32, u32),
    cells: &[(u32, u32)],
) -> Result<World, GridError> {
    let mut world = World::new(width, height)?;
    place(&mut world, origin, cells);
    Ok(world)
}

/// Collect the live cells of a world as sorted `(x, y)` pairs.
pub fn live_cells(world: &World) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            if world.is_alive(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}
