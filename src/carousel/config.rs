//! Per-carousel configuration: tick period, lightbox and hover pause.
//!
//! Presets read their period from the environment:
//! - `FEST_GALLERY_TICK_MS` (default 3000)
//! - `FEST_SPONSORS_TICK_MS` (default 2000)
//!
//! Missing, unparsable or zero values fall back to the default.

use std::time::Duration;

use crate::error::{CarouselError, Result};

/// Default auto-advance period for the gallery strip.
const GALLERY_TICK_MS: u64 = 3000;
/// Default auto-advance period for the sponsor cards.
const SPONSORS_TICK_MS: u64 = 2000;

fn tick_ms_from_env(var: &str, default_ms: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default_ms)
}

/// Per-carousel behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Time between auto-advance ticks.
    pub period: Duration,
    /// Whether items can be opened in the modal viewer.
    pub modal: bool,
    /// Whether hovering the region pauses auto-advance.
    pub pause_on_hover: bool,
}

impl CarouselConfig {
    pub fn builder() -> CarouselConfigBuilder {
        CarouselConfigBuilder::new()
    }

    /// Gallery strip: slow cadence, lightbox enabled.
    ///
    /// Period can be overridden with `FEST_GALLERY_TICK_MS`.
    pub fn gallery() -> Self {
        Self {
            period: Duration::from_millis(tick_ms_from_env("FEST_GALLERY_TICK_MS", GALLERY_TICK_MS)),
            modal: true,
            pause_on_hover: false,
        }
    }

    /// Sponsor cards: faster cadence, pauses under the pointer.
    ///
    /// Period can be overridden with `FEST_SPONSORS_TICK_MS`.
    pub fn sponsors() -> Self {
        Self {
            period: Duration::from_millis(tick_ms_from_env(
                "FEST_SPONSORS_TICK_MS",
                SPONSORS_TICK_MS,
            )),
            modal: false,
            pause_on_hover: true,
        }
    }
}

/// Builder for CarouselConfig with validation.
#[derive(Debug, Clone)]
pub struct CarouselConfigBuilder {
    period: Duration,
    modal: bool,
    pause_on_hover: bool,
}

impl CarouselConfigBuilder {
    pub fn new() -> Self {
        Self {
            period: Duration::from_millis(SPONSORS_TICK_MS),
            modal: false,
            pause_on_hover: true,
        }
    }

    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn modal(mut self, enabled: bool) -> Self {
        self.modal = enabled;
        self
    }

    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = enabled;
        self
    }

    pub fn build(self) -> Result<CarouselConfig> {
        if self.period.is_zero() {
            return Err(CarouselError::InvalidPeriod(self.period));
        }
        Ok(CarouselConfig {
            period: self.period,
            modal: self.modal,
            pause_on_hover: self.pause_on_hover,
        })
    }
}

impl Default for CarouselConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
