//! Auto-advancing carousel shared by the gallery and sponsor sections.
//!
//! This module provides:
//! - `CarouselController` - Wrapping index arithmetic
//! - `PauseGate` - Hover/modal/manual pause reasons
//! - `ModalViewer` - Lightbox state machine with its own index
//! - `TokioTicker` - Owned repeating timer delivering ticks over a channel
//! - `Carousel` - The component tying them together

pub mod component;
pub mod config;
pub mod controller;
pub mod input;
pub mod modal;
pub mod pause;
pub mod timer;

pub use component::{Carousel, CarouselState};
pub use config::{CarouselConfig, CarouselConfigBuilder};
pub use controller::CarouselController;
pub use input::Key;
pub use modal::{ClickOutcome, ClickTarget, ModalViewer};
pub use pause::{PauseGate, PauseReason};
pub use timer::{Tick, TickScheduler, TokioTicker};
