//! Full-screen modal viewer (lightbox).

use tracing::debug;

use crate::scroll::{PageScroll, ScrollGuard};

/// Where a click landed while the modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dimmed area around the enlarged item
    Backdrop,
    /// The enlarged item itself; clicks stop here
    Item,
    CloseButton,
    PrevButton,
    NextButton,
}

/// What a click did to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Closed,
    Moved,
    Ignored,
}

#[derive(Debug)]
enum ModalState {
    Closed,
    Open { index: usize, _scroll: ScrollGuard },
}

/// Closed/Open state machine with its own wrapping index.
///
/// While open, the viewer holds a page scroll guard.
#[derive(Debug)]
pub struct ModalViewer {
    len: usize,
    scroll: PageScroll,
    state: ModalState,
    /// Last index shown, kept after close so the snapshot stays stable.
    last_index: usize,
}

impl ModalViewer {
    pub fn new(len: usize, scroll: PageScroll) -> Self {
        Self {
            len,
            scroll,
            state: ModalState::Closed,
            last_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn index(&self) -> usize {
        match self.state {
            ModalState::Open { index, .. } => index,
            ModalState::Closed => self.last_index,
        }
    }

    /// Open at `index`. Returns false if the index is out of range.
    ///
    /// Opening an already open viewer only moves its index.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "Ignoring out-of-range modal open");
            return false;
        }
        self.last_index = index;
        if let ModalState::Open { index: current, .. } = &mut self.state {
            *current = index;
        } else {
            self.state = ModalState::Open {
                index,
                _scroll: self.scroll.lock(),
            };
        }
        true
    }

    /// Close the viewer. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        // Dropping the Open state releases the scroll guard.
        self.state = ModalState::Closed;
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(|i, len| (i + 1) % len)
    }

    pub fn prev(&mut self) -> bool {
        self.step(|i, len| (i + len - 1) % len)
    }

    fn step(&mut self, f: impl Fn(usize, usize) -> usize) -> bool {
        let len = self.len;
        match &mut self.state {
            ModalState::Open { index, .. } if len > 0 => {
                *index = f(*index, len);
                self.last_index = *index;
                true
            }
            _ => false,
        }
    }

    /// Apply a click while open.
    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        if !self.is_open() {
            return ClickOutcome::Ignored;
        }
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => {
                self.close();
                ClickOutcome::Closed
            }
            ClickTarget::Item => ClickOutcome::Ignored,
            ClickTarget::PrevButton => {
                self.prev();
                ClickOutcome::Moved
            }
            ClickTarget::NextButton => {
                self.next();
                ClickOutcome::Moved
            }
        }
    }

    /// Counter text such as "2 / 3".
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index() + 1, self.len)
    }
}
