//! Test utilities for Petri development.
//!
//! Provides the naive full-rescan reference implementation the
//! incremental engine is checked against ([`NaiveWorld`]), canned
//! patterns ([`patterns`]), deterministic random soups ([`soup`]), and
//! a change-log observer ([`RecordingObserver`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod naive;
pub mod patterns;
pub mod recording;
pub mod soup;

pub use naive::NaiveWorld;
pub use recording::{ChangeLog, RecordingObserver};
pub use soup::random_soup;
