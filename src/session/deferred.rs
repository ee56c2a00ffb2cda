use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation flag for a [`Deferred`] task.
///
/// Cheap to clone; any clone can cancel. Cancelling is idempotent and permanent.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Mark the task cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Return `true` once cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// An initialization task to run at a host-chosen idle point, unless torn down first.
///
/// Engine construction is deferred past first paint: the host schedules [`Deferred::run`] on
/// whatever idle primitive it has and keeps the [`CancelHandle`]. If the host unmounts before
/// the idle point fires, cancelling guarantees the initializer never runs — no state is ever
/// partially initialized. The cancellation check happens before any work, independent of the
/// scheduler that invokes `run`.
pub struct Deferred<T> {
    handle: CancelHandle,
    init: Box<dyn FnOnce() -> T + Send>,
}

impl<T> Deferred<T> {
    /// Wrap an initializer; returns the task and the handle that can cancel it.
    pub fn new(init: impl FnOnce() -> T + Send + 'static) -> (Self, CancelHandle) {
        let handle = CancelHandle::default();
        (
            Self {
                handle: handle.clone(),
                init: Box::new(init),
            },
            handle,
        )
    }

    /// Return `true` once the task was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    /// Run the initializer now, unless cancelled.
    ///
    /// Consumes the task either way: a cancelled task drops its initializer without calling it.
    pub fn run(self) -> Option<T> {
        if self.handle.is_cancelled() {
            return None;
        }
        Some((self.init)())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/deferred.rs"]
mod tests;
