use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

#[test]
fn uncancelled_tasks_run_once() {
    let (task, _handle) = Deferred::new(|| 41 + 1);
    assert_eq!(task.run(), Some(42));
}

#[test]
fn cancelled_tasks_never_touch_their_initializer() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = ran.clone();
    let (task, handle) = Deferred::new(move || {
        flag.store(true, Ordering::SeqCst);
    });

    handle.cancel();
    assert!(task.is_cancelled());
    assert_eq!(task.run(), None);
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn any_handle_clone_can_cancel() {
    let (task, handle) = Deferred::new(|| 1);
    let other = handle.clone();
    other.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(task.run(), None);
}

#[test]
fn cancelling_is_idempotent() {
    let handle = CancelHandle::default();
    assert!(!handle.is_cancelled());
    handle.cancel();
    handle.cancel();
    assert!(handle.is_cancelled());
}
