//! Auto-advancing carousel with a pause gate and optional modal viewer.
//!
//! All mutation happens on the caller's event loop: ticks arrive as
//! `on_tick(generation)` calls, pointer/click/key input as method calls.
//! The timer is stopped while paused and re-armed (full period) on resume
//! and after every manual navigation.

use tracing::{debug, trace, warn};

use super::config::CarouselConfig;
use super::controller::CarouselController;
use super::input::Key;
use super::modal::{ClickOutcome, ClickTarget, ModalViewer};
use super::pause::{PauseGate, PauseReason};
use super::timer::TickScheduler;
use crate::error::Result;
use crate::models::Item;
use crate::scroll::PageScroll;

/// Snapshot consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub paused: bool,
    pub modal_open: bool,
    pub modal_index: usize,
}

pub struct Carousel<S: TickScheduler> {
    name: &'static str,
    items: Vec<Item>,
    config: CarouselConfig,
    controller: CarouselController,
    gate: PauseGate,
    modal: Option<ModalViewer>,
    scheduler: S,
    /// Generation of the armed timer. Bumped on every start/stop so ticks
    /// that were already queued by an older timer are dropped.
    generation: u64,
    mounted: bool,
}

impl<S: TickScheduler> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("name", &self.name)
            .field("items", &self.items.len())
            .field("state", &self.state())
            .field("generation", &self.generation)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<S: TickScheduler> Carousel<S> {
    /// Mount a carousel over `items` and arm its auto-advance timer.
    pub fn mount(
        name: &'static str,
        items: Vec<Item>,
        config: CarouselConfig,
        scheduler: S,
        scroll: &PageScroll,
    ) -> Result<Self> {
        let len = items.len();
        let modal = config
            .modal
            .then(|| ModalViewer::new(len, scroll.clone()));
        let mut carousel = Self {
            name,
            items,
            config,
            controller: CarouselController::new(len),
            gate: PauseGate::new(),
            modal,
            scheduler,
            generation: 0,
            mounted: true,
        };

        if len == 0 {
            warn!(carousel = name, "No items, auto-advance disabled");
        }
        carousel.start_timer()?;
        debug!(
            carousel = name,
            items = len,
            period_ms = config.period.as_millis() as u64,
            modal = config.modal,
            "Carousel mounted"
        );
        Ok(carousel)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.controller.index(),
            paused: self.gate.is_paused(),
            modal_open: self.is_modal_open(),
            modal_index: self.modal.as_ref().map_or(0, ModalViewer::index),
        }
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.controller.index())
    }

    /// Item shown in the modal, if it is open.
    pub fn modal_item(&self) -> Option<&Item> {
        self.modal
            .as_ref()
            .filter(|m| m.is_open())
            .and_then(|m| self.items.get(m.index()))
    }

    pub fn modal_counter(&self) -> Option<String> {
        self.modal
            .as_ref()
            .filter(|m| m.is_open())
            .map(ModalViewer::counter_label)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.as_ref().is_some_and(ModalViewer::is_open)
    }

    pub fn is_timer_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // --- Timer ---

    /// Handle one tick. Returns true if the carousel advanced.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if !self.mounted || generation != self.generation {
            trace!(
                carousel = self.name,
                generation,
                current = self.generation,
                "Dropping stale tick"
            );
            return false;
        }
        if self.gate.is_paused() || self.controller.is_empty() || !self.scheduler.is_running() {
            return false;
        }
        self.controller.advance();
        trace!(carousel = self.name, index = self.controller.index(), "Auto-advanced");
        true
    }

    fn start_timer(&mut self) -> Result<()> {
        if !self.mounted || self.gate.is_paused() || self.controller.is_empty() {
            return Ok(());
        }
        let generation = self.generation + 1;
        match self.scheduler.start(self.config.period, generation) {
            Ok(()) => {
                self.generation = generation;
                Ok(())
            }
            Err(err) => {
                // Nothing may stay armed under a generation we no longer accept.
                self.stop_timer();
                Err(err)
            }
        }
    }

    fn stop_timer(&mut self) {
        self.scheduler.stop();
        self.generation += 1;
    }

    fn restart_timer(&mut self) {
        if let Err(err) = self.start_timer() {
            warn!(carousel = self.name, error = %err, "Failed to restart auto-advance timer");
        }
    }

    // --- Manual navigation ---

    pub fn next(&mut self) {
        self.controller.advance();
        self.after_manual_navigation();
    }

    pub fn prev(&mut self) {
        self.controller.retreat();
        self.after_manual_navigation();
    }

    /// Jump to `index`. Out-of-range targets are ignored and return false.
    pub fn goto(&mut self, index: usize) -> bool {
        if !self.controller.goto(index) {
            return false;
        }
        self.after_manual_navigation();
        true
    }

    fn after_manual_navigation(&mut self) {
        debug!(carousel = self.name, index = self.controller.index(), "Manual navigation");
        self.restart_timer();
    }

    // --- Pause gate ---

    pub fn pause(&mut self) {
        self.engage(PauseReason::Manual);
    }

    pub fn resume(&mut self) {
        self.release(PauseReason::Manual);
    }

    pub fn pointer_enter(&mut self) {
        if self.config.pause_on_hover {
            self.engage(PauseReason::Hover);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.config.pause_on_hover {
            self.release(PauseReason::Hover);
        }
    }

    fn engage(&mut self, reason: PauseReason) {
        if self.gate.engage(reason) {
            debug!(carousel = self.name, %reason, "Auto-advance paused");
            self.stop_timer();
        }
    }

    fn release(&mut self, reason: PauseReason) {
        if self.gate.release(reason) {
            debug!(carousel = self.name, %reason, "Auto-advance resumed");
            self.restart_timer();
        }
    }

    // --- Modal viewer ---

    /// Open the modal at `index`. Returns false if the modal is disabled or
    /// the index is out of range.
    pub fn open_modal(&mut self, index: usize) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            debug!(carousel = self.name, "Modal disabled for this carousel");
            return false;
        };
        if !modal.open(index) {
            return false;
        }
        debug!(carousel = self.name, index, "Modal opened");
        self.engage(PauseReason::Modal);
        true
    }

    pub fn close_modal(&mut self) -> bool {
        let closed = self.modal.as_mut().is_some_and(ModalViewer::close);
        if closed {
            self.after_modal_closed();
        }
        closed
    }

    pub fn modal_next(&mut self) -> bool {
        self.modal.as_mut().is_some_and(ModalViewer::next)
    }

    pub fn modal_prev(&mut self) -> bool {
        self.modal.as_mut().is_some_and(ModalViewer::prev)
    }

    /// Route a click on the modal overlay.
    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        let outcome = self
            .modal
            .as_mut()
            .map_or(ClickOutcome::Ignored, |m| m.click(target));
        if outcome == ClickOutcome::Closed {
            self.after_modal_closed();
        }
        outcome
    }

    fn after_modal_closed(&mut self) {
        debug!(carousel = self.name, "Modal closed");
        self.release(PauseReason::Modal);
    }

    /// Handle a key press. Returns true if it was consumed.
    ///
    /// While the modal is open it takes all keys.
    pub fn key(&mut self, key: Key) -> bool {
        if self.is_modal_open() {
            return match key {
                Key::Left => self.modal_prev(),
                Key::Right => self.modal_next(),
                Key::Escape => self.close_modal(),
                Key::Enter => false,
            };
        }
        match key {
            Key::Left if !self.controller.is_empty() => {
                self.prev();
                true
            }
            Key::Right if !self.controller.is_empty() => {
                self.next();
                true
            }
            Key::Enter => self.open_modal(self.controller.index()),
            _ => false,
        }
    }

    // --- Lifecycle ---

    /// Cancel the timer and close the modal. Further ticks are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
        self.stop_timer();
        self.mounted = false;
        debug!(carousel = self.name, "Carousel unmounted");
    }
}

impl<S: TickScheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
