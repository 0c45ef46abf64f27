//! Error types for the host-facing edges
//!
//! The swap pipeline itself never fails: anything it cannot make sense of ends as a
//! [SkipReason](crate::anyswap::swap::SkipReason). Errors only exist where a host touches
//! the outside world: loading configuration, reading and writing files, dumping tokens as JSON, or handing the
//! core a cursor that is not inside the document.

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnySwapError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("offset {offset} is outside the document ({len} bytes)")]
    OffsetOutOfRange { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AnySwapError>;
