//! Observer that logs every notification it receives.

use std::cell::RefCell;
use std::rc::Rc;

use petri_engine::CellObserver;
use petri_grid::CellChange;

/// Shared handle to a recorded change log.
pub type ChangeLog = Rc<RefCell<Vec<CellChange>>>;

/// A [`CellObserver`] that appends every change to a shared log.
///
/// The log handle stays with the test after the observer itself is
/// boxed into the world.
pub struct RecordingObserver {
    log: ChangeLog,
}

impl RecordingObserver {
    /// Create an observer and the log handle it writes to.
    pub fn new() -> (Self, ChangeLog) {
        let log: ChangeLog = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl CellObserver for RecordingObserver {
    fn cell_changed(&mut self, change: CellChange) {
        self.log.borrow_mut().push(change);
    }
}
