//! Ordering functions.
//!
//! Every function here returns `Less` when the first argument ranks ahead
//! of the second, matching [`rd_roster::RankOrder`].  Leaderboard orders are
//! total: a metric tie falls back to the driver name, smaller name first.
//!
//! Dispatch ranking is a list of [`Criterion`]s applied in turn until one
//! of them is not `Equal`; see [`compose`].

use std::cmp::Ordering;

use crate::Driver;

/// Read access to the metrics a ranking looks at.  Implemented by live
/// [`Driver`] records and by leaderboard [`Standing`](crate::Standing)
/// snapshots so both rank identically.
pub trait Metrics {
    fn name(&self) -> &str;
    fn races(&self) -> u32;
    fn average_rating(&self) -> f64;
    fn distance(&self) -> u64;
}

impl Metrics for Driver {
    fn name(&self) -> &str {
        &self.name
    }
    fn races(&self) -> u32 {
        self.races
    }
    fn average_rating(&self) -> f64 {
        Driver::average_rating(self)
    }
    fn distance(&self) -> u64 {
        self.distance
    }
}

// ── Leaderboard orders ────────────────────────────────────────────────────────

#[inline]
pub fn by_name<T: Metrics>(a: &T, b: &T) -> Ordering {
    a.name().cmp(b.name())
}

/// Higher average rating first.  Drivers without rides rank behind every
/// driver with at least one, and among themselves by name.
pub fn by_rating<T: Metrics>(a: &T, b: &T) -> Ordering {
    match (a.races(), b.races()) {
        (0, 0) => by_name(a, b),
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => b
            .average_rating()
            .total_cmp(&a.average_rating())
            .then_with(|| by_name(a, b)),
    }
}

/// More completed rides first.
pub fn by_races<T: Metrics>(a: &T, b: &T) -> Ordering {
    b.races().cmp(&a.races()).then_with(|| by_name(a, b))
}

/// Longer total distance first.
pub fn by_distance<T: Metrics>(a: &T, b: &T) -> Ordering {
    b.distance().cmp(&a.distance()).then_with(|| by_name(a, b))
}

// ── Dispatch criteria ─────────────────────────────────────────────────────────

/// A driver considered for one pickup, with its precomputed hop count to
/// that pickup (`None` = no path).
#[derive(Copy, Clone, Debug)]
pub struct Candidate<'a> {
    pub driver:    &'a Driver,
    pub to_pickup: Option<u32>,
}

/// One step of the dispatch ranking.
pub type Criterion = fn(&Candidate<'_>, &Candidate<'_>) -> Ordering;

/// Online drivers rank ahead of offline ones.
pub fn availability(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.driver.status.cmp(&a.driver.status)
}

/// Fewer hops to the pickup ranks ahead; no path ranks behind any path.
pub fn proximity(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    match (a.to_pickup, b.to_pickup) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// [`by_rating`] on the underlying drivers.
pub fn rating(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    by_rating(a.driver, b.driver)
}

/// The standard dispatch ranking.
pub const DISPATCH_CRITERIA: [Criterion; 3] = [availability, proximity, rating];

/// Apply `criteria` in order and return the first non-`Equal` verdict.
pub fn compose(criteria: &[Criterion], a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    criteria
        .iter()
        .map(|c| c(a, b))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
