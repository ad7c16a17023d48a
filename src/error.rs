use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("tick period must be non-zero, got {0:?}")]
    InvalidPeriod(Duration),

    #[error("auto-advance timer needs a running tokio runtime")]
    NoRuntime,

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
