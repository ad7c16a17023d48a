//! Interactive core of the ZION festival page.
//!
//! The gallery and sponsor sections share one auto-advancing [`Carousel`]
//! with a pause gate and an optional lightbox; the hero section shows a
//! countdown. Everything runs on a single tokio event loop fed by owned tick
//! timers.
//!
//! [`Carousel`]: carousel::Carousel

pub mod app;
pub mod carousel;
pub mod countdown;
pub mod error;
pub mod models;
pub mod scroll;
pub mod ui;
pub mod video;

pub use error::{CarouselError, Result};
