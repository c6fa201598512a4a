//! Graph-subsystem error type.

use thiserror::Error;

use rd_core::NodeId;

/// Errors produced by `rd-graph`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} outside the bounds of a {size}-node graph")]
    OutOfRange { node: NodeId, size: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
