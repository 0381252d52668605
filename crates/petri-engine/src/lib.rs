//! Incremental cycle engine for Conway's Game of Life.
//!
//! [`World`] orchestrates one generation step at a time over a toroidal
//! grid, re-evaluating only the cells the activity tracker proves could
//! change, and delivering a [`CellChange`](petri_grid::CellChange)
//! notification to registered [`CellObserver`]s for exactly the cells
//! that flip. Output is bit-identical to a naive full-grid rescan.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod observer;
pub mod world;

pub use observer::{CellObserver, ObserverId};
pub use world::World;
