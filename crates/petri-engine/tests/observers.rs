//! Observer subscription behavior, exercised through the public API.

use petri_engine::World;
use petri_test_utils::RecordingObserver;

#[test]
fn unsubscribe_stops_delivery() {
    let mut w = World::new(8, 8).unwrap();
    let (observer, log) = RecordingObserver::new();
    let id = w.subscribe(Box::new(observer));
    w.set_cell(1, 1, true);
    assert_eq!(log.borrow().len(), 1);
    assert!(w.unsubscribe(id));
    assert!(!w.unsubscribe(id));
    w.set_cell(2, 2, true);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn clear_kills_everything_and_notifies() {
    let mut w = World::new(16, 16).unwrap();
    w.set_cells([(1u32, 1u32, true), (5, 9, true), (14, 2, true)]);
    let (observer, log) = RecordingObserver::new();
    w.subscribe(Box::new(observer));
    let gen_before = w.generation();
    assert_eq!(w.clear(), 3);
    assert_eq!(w.population(), 0);
    assert_eq!(w.generation(), gen_before);
    assert_eq!(log.borrow().len(), 3);
    assert!(log.borrow().iter().all(|c| !c.alive));
}
