use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Termination flag shared between a signal listener and the display loop
///
/// The listener sets it from any thread; the loop only looks at it between
/// frames, so a request never interrupts a frame halfway through.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
