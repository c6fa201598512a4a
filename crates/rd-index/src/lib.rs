//! `rd-index` — fixed-capacity open-addressing map from names to small ids.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`hash`]       | `KeyHasher` trait, `StringHash`, `IntDigitHash`, `HashFn` |
//! | [`name_index`] | `NameIndex` (linear probing with lazy deletion)        |
//! | [`error`]      | `IndexError`, `IndexResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Enables `FxKeyHasher` (FxHash via `rustc-hash`).          |

pub mod error;
pub mod hash;
pub mod name_index;


pub use error::{IndexError, IndexResult};
#[cfg(feature = "fx-hash")]
pub use hash::FxKeyHasher;
pub use hash::{HashFn, IntDigitHash, KeyHasher, StringHash};
pub use name_index::NameIndex;
