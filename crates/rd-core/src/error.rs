//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`IndexError`, `GraphError`,
//! `DispatchError`); `DispatchError` wraps `RdError` so a session built from
//! a bad config reports it through the same channel as every other failure.

use thiserror::Error;

/// The top-level error type for `rd-core`.
#[derive(Debug, Error)]
pub enum RdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rd-core`.
pub type RdResult<T> = Result<T, RdError>;
