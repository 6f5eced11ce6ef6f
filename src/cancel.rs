//! Per-operation cancellation token.
//! A cloneable one-way stop flag checked at traversal checkpoints.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way "stop" flag.
//! - Cancelling is idempotent; there is no way to un-cancel a token.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (idempotent).
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
