//! Index arithmetic for a cyclic carousel.

use tracing::debug;

/// Wrapping cursor over `len` items.
///
/// All operations are no-ops when `len == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselController {
    index: usize,
    len: usize,
}

impl CarouselController {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next item, wrapping from the last item to 0.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Move to the previous item, wrapping from 0 to the last item.
    pub fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to `index`. Out-of-range targets are ignored and return false.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "Ignoring out-of-range goto");
            return false;
        }
        self.index = index;
        true
    }
}
