//! Toroidal cell grid and activity tracking for the Petri life engine.
//!
//! This crate is the spatial layer: it owns the two generations of cell
//! state ([`Grid`]), the toroidal neighbourhood arithmetic ([`torus`]),
//! and the bookkeeping that lets the cycle engine touch only the cells
//! that can possibly change ([`ActivityTracker`], [`CellRange`]).
//!
//! Nothing here knows about the B3/S23 rule or about observers — rule
//! application and notification delivery live in `petri-engine`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod range;
pub mod torus;
pub mod tracker;

pub use error::GridError;
pub use grid::{CellChange, Grid};
pub use range::CellRange;
pub use tracker::ActivityTracker;
