use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Advisory "request in flight" indicator.
///
/// Clones share the same flag, so a UI can hold one to disable its submit
/// control while the form holds another. Counts outstanding guards; busy
/// while any guard is alive.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    holders: Arc<AtomicUsize>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    /// Number of guards currently held.
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped.
    ///
    /// Does not refuse when already busy; callers decide whether to allow
    /// overlapping work.
    pub fn acquire(&self) -> BusyGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        BusyGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

/// RAII guard for [`BusyFlag`]. Releases its hold on drop, including early
/// returns, panics and a cancelled future.
#[derive(Debug)]
pub struct BusyGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}
