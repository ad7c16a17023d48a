//! Page-wide background scroll lock.
//!
//! Overlays take a [`ScrollGuard`] while they are shown; the page may scroll
//! again once every guard has been dropped.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// Shared handle to the page scroll state.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    holders: Arc<Mutex<usize>>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable background scrolling until the returned guard is dropped.
    pub fn lock(&self) -> ScrollGuard {
        let mut holders = self.holders.lock();
        *holders += 1;
        trace!(holders = *holders, "Page scroll locked");
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        *self.holders.lock() > 0
    }
}

/// Keeps the page scroll disabled while alive.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Arc<Mutex<usize>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let mut holders = self.holders.lock();
        *holders = holders.saturating_sub(1);
        trace!(holders = *holders, "Page scroll guard released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_scroll_on_drop() {
        let scroll = PageScroll::new();
        assert!(!scroll.is_locked());
        let guard = scroll.lock();
        assert!(scroll.is_locked());
        drop(guard);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_nested_guards() {
        let scroll = PageScroll::new();
        let a = scroll.lock();
        let b = scroll.clone().lock();
        drop(a);
        assert!(scroll.is_locked());
        drop(b);
        assert!(!scroll.is_locked());
    }
}
