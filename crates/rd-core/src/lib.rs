//! `rd-core` — foundational types for the `ride_dispatch` workspace.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `DriverId`                                    |
//! | [`config`] | `SessionConfig`                                         |
//! | [`error`]  | `RdError`, `RdResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SessionConfig`. |

pub mod config;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_CAPACITY, SessionConfig};
pub use error::{RdError, RdResult};
pub use ids::{DriverId, NodeId};
