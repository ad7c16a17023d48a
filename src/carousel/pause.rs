//! Pause gate for auto-advance.

use std::fmt;

/// Why auto-advance is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Pointer is over the carousel region
    Hover,
    /// The modal viewer is open
    Modal,
    /// Explicit `pause()` from the host
    Manual,
}

impl PauseReason {
    fn bit(self) -> u8 {
        match self {
            Self::Hover => 0b001,
            Self::Modal => 0b010,
            Self::Manual => 0b100,
        }
    }
}

impl fmt::Display for PauseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hover => "hover",
            Self::Modal => "modal",
            Self::Manual => "manual",
        };
        f.write_str(s)
    }
}

/// Set of engaged pause reasons. Paused while any reason is engaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseGate {
    reasons: u8,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.reasons != 0
    }

    pub fn is_engaged(&self, reason: PauseReason) -> bool {
        self.reasons & reason.bit() != 0
    }

    /// Engage `reason`. Returns true if the gate went from running to paused.
    pub fn engage(&mut self, reason: PauseReason) -> bool {
        let was_paused = self.is_paused();
        self.reasons |= reason.bit();
        !was_paused
    }

    /// Release `reason`. Returns true if the gate went from paused to running.
    pub fn release(&mut self, reason: PauseReason) -> bool {
        let was_paused = self.is_paused();
        self.reasons &= !reason.bit();
        was_paused && !self.is_paused()
    }
}
