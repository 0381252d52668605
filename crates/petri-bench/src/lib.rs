//! Benchmark profiles for the Petri life engine.
//!
//! Pre-built boards exercising the workloads the incremental engine is
//! optimized for and against:
//!
//! - [`glider_profile`]: one glider on a big, otherwise-empty board — the
//!   sparse case where tracked ranges pay off.
//! - [`soup_profile`]: dense random soup — the chaotic case that
//!   degrades toward a full scan.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_engine::World;
use petri_test_utils::random_soup;

/// A 256x256 board with a single glider at the center.
///
/// Population 5 forever; each cycle touches a handful of cells out of
/// 65K. This is the sparse workload the activity tracker exists for.
pub fn glider_profile() -> World {
    let mut world = World::new(256, 256).unwrap();
    let glider = [(1u32, 0u32), (2, 1), (0, 2), (1, 2), (2, 2)];
    for (dx, dy) in glider {
        world.set_cell(128 + dx, 128 + dy, true);
    }
    world
}

/// A dense random soup covering about a quarter of the board.
///
/// Seeded, so repeated benchmark runs measure the same evolution.
pub fn soup_profile(width: u32, height: u32, seed: u64) -> World {
    let mut world = World::new(width, height).unwrap();
    world.set_cells(
        random_soup(width, height, 0.25, seed)
            .into_iter()
            .map(|(x, y)| (x, y, true)),
    );
    world
}
