//! Name-index error type.

use thiserror::Error;

/// Errors produced by `rd-index`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// Every slot holds a live entry and the key is not among them.  The
    /// table never grows; size it for the expected number of distinct keys.
    #[error("name index is full ({capacity} slots, no free or reusable slot)")]
    Full { capacity: usize },
}

pub type IndexResult<T> = Result<T, IndexError>;
