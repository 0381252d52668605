//! Change-notification subscriptions.
//!
//! The engine never reaches into rendering machinery: interested parties
//! register a [`CellObserver`] and receive every cell flip synchronously,
//! through one code path shared by `cycle()` and direct edits.

use petri_grid::CellChange;

/// Handle identifying a registered observer, for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Receiver for per-cell change notifications.
///
/// Called once for every cell whose state actually flips, in-line during
/// [`World::cycle()`](crate::World::cycle) or a direct edit. Handlers
/// must not mutate the world they observe — delivery happens while a
/// step is in progress, and the reentrancy guard will abort a handler
/// that reaches back in through shared-ownership tricks.
pub trait CellObserver {
    /// A cell changed state.
    fn cell_changed(&mut self, change: CellChange);
}
