//! The three driver leaderboards.
//!
//! Each board is a [`RankedRoster`] of [`Standing`] snapshots.  A standing
//! copies the metrics it was ranked by, so after a driver changes the caller
//! must [`Leaderboards::update`] it: the old entry is removed by `DriverId`
//! and a fresh snapshot is inserted at its new rank on every board.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rd_core::DriverId;
use rd_roster::{Identified, RankedRoster};

use crate::criteria::{Metrics, by_distance, by_races, by_rating};
use crate::Driver;

// ── Board ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Board {
    /// Average rating per ride.
    Rating,
    /// Total distance driven.
    Distance,
    /// Completed rides.
    Rides,
}

impl Board {
    pub const ALL: [Board; 3] = [Board::Rating, Board::Distance, Board::Rides];

    /// Command keyword selecting this board.
    pub fn command(self) -> &'static str {
        match self {
            Board::Rating => "top_rating",
            Board::Distance => "top_dist",
            Board::Rides => "top_rides",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::ALL
            .into_iter()
            .find(|b| b.command() == s)
            .ok_or_else(|| format!("unknown leaderboard {s:?}"))
    }
}

// ── Standing ──────────────────────────────────────────────────────────────────

/// A driver's metrics at the moment it was (re)ranked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub driver:         DriverId,
    pub name:           String,
    pub races:          u32,
    pub average_rating: f64,
    pub distance:       u64,
}

impl Standing {
    pub fn of(driver: &Driver) -> Self {
        Self {
            driver:         driver.id,
            name:           driver.name.clone(),
            races:          driver.races,
            average_rating: driver.average_rating(),
            distance:       driver.distance,
        }
    }
}

impl Identified for Standing {
    type Id = DriverId;
    fn id(&self) -> DriverId {
        self.driver
    }
}

impl Metrics for Standing {
    fn name(&self) -> &str {
        &self.name
    }
    fn races(&self) -> u32 {
        self.races
    }
    fn average_rating(&self) -> f64 {
        self.average_rating
    }
    fn distance(&self) -> u64 {
        self.distance
    }
}

// ── Leaderboards ──────────────────────────────────────────────────────────────

pub type StandingOrder = fn(&Standing, &Standing) -> Ordering;
pub type StandingRoster = RankedRoster<Standing, StandingOrder>;

pub struct Leaderboards {
    rating:   StandingRoster,
    distance: StandingRoster,
    rides:    StandingRoster,
}

impl Leaderboards {
    pub fn new() -> Self {
        Self {
            rating:   RankedRoster::new(by_rating::<Standing> as StandingOrder),
            distance: RankedRoster::new(by_distance::<Standing> as StandingOrder),
            rides:    RankedRoster::new(by_races::<Standing> as StandingOrder),
        }
    }

    pub fn board(&self, board: Board) -> &StandingRoster {
        match board {
            Board::Rating => &self.rating,
            Board::Distance => &self.distance,
            Board::Rides => &self.rides,
        }
    }

    fn boards_mut(&mut self) -> [&mut StandingRoster; 3] {
        [&mut self.rating, &mut self.distance, &mut self.rides]
    }

    /// Number of ranked drivers (identical on every board).
    pub fn len(&self) -> usize {
        self.rating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rating.is_empty()
    }

    /// Re-rank `driver` on every board from its current metrics, inserting
    /// it if it was not ranked yet.
    pub fn update(&mut self, driver: &Driver) {
        let standing = Standing::of(driver);
        for roster in self.boards_mut() {
            roster.reposition(standing.clone());
        }
    }

    /// The best `k` standings on `board`.
    pub fn top(&self, board: Board, k: usize) -> Vec<Standing> {
        self.board(board).top(k)
    }
}

impl Default for Leaderboards {
    fn default() -> Self {
        Self::new()
    }
}
