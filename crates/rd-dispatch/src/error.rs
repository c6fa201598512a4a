use thiserror::Error;

use rd_core::{DriverId, NodeId, RdError};
use rd_graph::GraphError;
use rd_index::IndexError;

/// Errors produced by `rd-dispatch`.  Every variant is recoverable at the
/// command level: the session state is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No driver exists, or the best candidate is offline or cannot reach
    /// the pickup.
    #[error("no driver available")]
    NoneAvailable,

    /// Neither the drop-off nor any of its neighbours is reachable from the
    /// pickup.
    #[error("destination {dropoff} unreachable from {pickup}")]
    DestinationUnreachable { pickup: NodeId, dropoff: NodeId },

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("unknown driver {0:?}")]
    UnknownDriver(String),

    #[error("driver {0} not in store")]
    DriverOutOfRange(DriverId),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Core(#[from] RdError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
