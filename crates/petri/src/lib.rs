//! Petri: an incremental Game of Life engine on a toroidal grid.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Petri sub-crates. For most users, adding `petri` as a single
//! dependency is sufficient.
//!
//! The engine never rescans the whole board: an activity tracker bounds
//! each generation step to the cells that can possibly change, and every
//! actual flip is reported to subscribers so a renderer repaints only
//! what moved. Results are bit-identical to a naive full scan.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // An 8x8 torus, seeded with a blinker.
//! let mut world = World::new(8, 8).unwrap();
//! world.set_cells([(3, 2, true), (3, 3, true), (3, 4, true)]);
//! assert_eq!(world.population(), 3);
//!
//! world.cycle();
//! assert_eq!(world.generation(), 1);
//! assert!(world.is_alive(2, 3)); // flipped horizontal
//! assert!(!world.is_alive(3, 2));
//! ```
//!
//! # Watching changes
//!
//! ```rust
//! use petri::prelude::*;
//!
//! struct Console;
//! impl CellObserver for Console {
//!     fn cell_changed(&mut self, change: CellChange) {
//!         println!("({}, {}) -> {}", change.x, change.y, change.alive);
//!     }
//! }
//!
//! let mut world = World::new(16, 16).unwrap();
//! world.subscribe(Box::new(Console));
//! world.toggle_cell(4, 4); // prints "(4, 4) -> true"
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `petri-grid` | `Grid`, `CellRange`, `ActivityTracker`, torus math |
//! | [`engine`] | `petri-engine` | `World`, `CellObserver` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The spatial layer: grid storage, ranges, activity tracking.
pub use petri_grid as grid;

/// The cycle engine and observer interfaces.
pub use petri_engine as engine;

pub use petri_engine::World;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use petri_engine::{CellObserver, ObserverId, World};
    pub use petri_grid::{CellChange, CellRange, GridError};
}
