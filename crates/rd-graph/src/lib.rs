//! `rd-graph` — city map as a mutable directed graph with hop-count queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `RouteGraph` (adjacency lists + per-node payload)          |
//! | [`bfs`]      | breadth-first reachability and hop-distance searches       |
//! | [`edit`]     | `TopologyEdit` — the four road-change commands             |
//! | [`distance`] | `DistanceTable` — all-pairs hop counts, recomputed in bulk |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Distances
//!
//! Every edge has unit length.  Hop counts are `Option<u32>`; `None` means
//! "no directed path", which the output layer renders as `-1`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                           |
//! |---------|--------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `TopologyEdit`. |

pub mod bfs;
pub mod distance;
pub mod edit;
pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use distance::DistanceTable;
pub use edit::TopologyEdit;
pub use error::{GraphError, GraphResult};
pub use graph::RouteGraph;
