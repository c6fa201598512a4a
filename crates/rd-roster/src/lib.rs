//! `rd-roster` — order-maintaining ranked lists.
//!
//! A [`RankedRoster`] keeps its items sorted under an injected
//! [`RankOrder`] at all times, so a leaderboard read is a prefix copy.
//! Items are removed by identity ([`Identified::id`]) rather than by value,
//! because the fields that determine an item's rank are exactly the ones that
//! change between removal and reinsertion.
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`roster`] | `RankedRoster`, `RankOrder`, `Identified`        |

pub mod roster;


pub use roster::{Identified, RankOrder, RankedRoster};
