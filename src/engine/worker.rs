//! The serialized event loop that feeds the controller.
//!
//! The OS notification context only enqueues; passes run here, on one
//! thread, strictly in arrival order.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::events::{DimEvent, EventBus, EventPublisher};

use super::controller::DimController;
use super::enumerator::WindowEnumerator;
use super::mutator::LayeredWindowOps;

/// Set once the exit cleanup pass has finished.
///
/// Exit paths that run on other threads (console control handler, session
/// end) wait on this before letting the process go.
#[derive(Default)]
pub struct CleanupLatch {
    done: Mutex<bool>,
    cond: Condvar,
}

impl CleanupLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        let mut done = self.done.lock().unwrap_or_else(|p| p.into_inner());
        *done = true;
        self.cond.notify_all();
    }

    pub fn is_done(&self) -> bool {
        *self.done.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Wait up to `timeout`. Returns whether cleanup finished.
    pub fn wait(&self, timeout: Duration) -> bool {
        let done = self.done.lock().unwrap_or_else(|p| p.into_inner());
        let (done, _) = self
            .cond
            .wait_timeout_while(done, timeout, |done| !*done)
            .unwrap_or_else(|p| p.into_inner());
        *done
    }
}

/// Handle to the running worker thread.
pub struct DimWorker {
    publisher: EventPublisher,
    latch: Arc<CleanupLatch>,
    handle: Option<JoinHandle<()>>,
}

/// Start the worker. It owns `bus` and stops after handling `DimEvent::Shutdown`.
pub fn spawn_worker<E, M>(
    controller: Arc<DimController<E, M>>,
    bus: EventBus,
) -> std::io::Result<DimWorker>
where
    E: WindowEnumerator + Send + Sync + 'static,
    M: LayeredWindowOps + Send + Sync + 'static,
{
    let publisher = bus.publisher();
    let latch = Arc::new(CleanupLatch::new());
    let worker_latch = Arc::clone(&latch);

    let handle = thread::Builder::new()
        .name("focusdim-worker".to_string())
        .spawn(move || run(&controller, &bus, &worker_latch))?;

    Ok(DimWorker {
        publisher,
        latch,
        handle: Some(handle),
    })
}

fn run<E, M>(controller: &DimController<E, M>, bus: &EventBus, latch: &CleanupLatch)
where
    E: WindowEnumerator,
    M: LayeredWindowOps,
{
    tracing::debug!("worker started");
    let mut stopped = false;
    while let Some(event) = bus.recv() {
        // Focus changes arrive in bursts; keep them out of debug output
        if event.is_user_action() {
            tracing::debug!(event = event.description(), "dispatch");
        } else {
            tracing::trace!(event = event.description(), "dispatch");
        }
        if !controller.dispatch(&event) {
            stopped = true;
            break;
        }
    }
    if !stopped {
        controller.shutdown();
    }
    latch.signal();
    tracing::debug!("worker stopped");
}

impl DimWorker {
    pub fn publisher(&self) -> EventPublisher {
        self.publisher.clone()
    }

    pub fn latch(&self) -> Arc<CleanupLatch> {
        Arc::clone(&self.latch)
    }

    /// Request the cleanup pass and wait for the thread to finish. Idempotent.
    pub fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.publisher.publish(DimEvent::Shutdown);
        if handle.join().is_err() {
            tracing::error!("worker thread panicked");
        }
    }
}

impl Drop for DimWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
