//! `rd-dispatch` — drivers, dispatch, and the command-level session.
//!
//! # Request flow
//!
//! ```text
//! Session::request_ride(pickup, dropoff, rating)
//!   ① resolve names        — location NameIndex
//!   ② refresh distances    — only if an edit happened since the last sweep
//!   ③ select driver        — DispatchPolicy scans every driver under the
//!                            composite order (availability, proximity,
//!                            rating)
//!   ④ resolve drop-off     — requested node, else its first neighbour
//!                            reachable from pickup
//!   ⑤ complete ride        — update the driver record, re-rank it on all
//!                            three leaderboards, notify the observer
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`driver`]      | `Driver`, `DriverStatus`, `DriverStore` (arena)       |
//! | [`criteria`]    | ordering functions shared by dispatch and leaderboards |
//! | [`policy`]      | `DispatchPolicy`, `RideReceipt`                       |
//! | [`leaderboard`] | `Board`, `Standing`, `Leaderboards`                   |
//! | [`observer`]    | `DispatchObserver`, `NoopObserver`                    |
//! | [`session`]     | `Session`, `DriverInfo`                               |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                  |

pub mod criteria;
pub mod driver;
pub mod error;
pub mod leaderboard;
pub mod observer;
pub mod policy;
pub mod session;


pub use driver::{Driver, DriverStatus, DriverStore};
pub use error::{DispatchError, DispatchResult};
pub use leaderboard::{Board, Leaderboards, Standing};
pub use observer::{DispatchObserver, NoopObserver};
pub use policy::{DispatchPolicy, RideReceipt};
pub use session::{DriverInfo, Session};
