//! Driver records and the canonical driver store.
//!
//! `DriverStore` is the only owner of driver state.  Everything else
//! (leaderboards, the driver-name index, ride receipts) refers to drivers by
//! [`DriverId`], which is the driver's position in the store and never
//! changes: drivers are registered on their first go-online and never
//! removed.

use rd_core::{DriverId, NodeId};
use rd_index::NameIndex;

use crate::{DispatchError, DispatchResult};

/// Hash strategy for both name indices (locations and drivers).
#[cfg(not(feature = "fx-hash"))]
pub type NameHasher = rd_index::StringHash;

/// Hash strategy for both name indices (locations and drivers).
#[cfg(feature = "fx-hash")]
pub type NameHasher = rd_index::FxKeyHasher;

// ── Driver ────────────────────────────────────────────────────────────────────

/// `Offline < Online`, so availability compares directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverStatus {
    Offline,
    Online,
}

impl DriverStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    pub id:         DriverId,
    pub name:       String,
    pub status:     DriverStatus,
    /// Current location.
    pub node:       NodeId,
    /// Sum of every rating received.
    pub rating_sum: f64,
    /// Completed rides.
    pub races:      u32,
    /// Total hops driven: to each pickup plus each trip.
    pub distance:   u64,
}

impl Driver {
    fn new(id: DriverId, name: String, node: NodeId) -> Self {
        Self {
            id,
            name,
            status: DriverStatus::Online,
            node,
            rating_sum: 0.0,
            races: 0,
            distance: 0,
        }
    }

    #[inline]
    pub fn is_online(&self) -> bool {
        self.status == DriverStatus::Online
    }

    /// Mean rating per completed ride; `0.0` before the first ride.
    pub fn average_rating(&self) -> f64 {
        if self.races == 0 {
            0.0
        } else {
            self.rating_sum / self.races as f64
        }
    }
}

// ── DriverStore ───────────────────────────────────────────────────────────────

/// Arena of drivers addressed by `DriverId`, plus a name → id index.
pub struct DriverStore {
    drivers: Vec<Driver>,
    by_name: NameIndex<String, DriverId, NameHasher>,
}

impl DriverStore {
    /// An empty store whose name index has `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            drivers: Vec::new(),
            by_name: NameIndex::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Every driver in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Driver> {
        self.drivers.iter()
    }

    pub fn id_of(&self, name: &str) -> Option<DriverId> {
        self.by_name.lookup(name).copied()
    }

    pub fn get(&self, id: DriverId) -> DispatchResult<&Driver> {
        self.drivers
            .get(id.index())
            .ok_or(DispatchError::DriverOutOfRange(id))
    }

    pub fn get_mut(&mut self, id: DriverId) -> DispatchResult<&mut Driver> {
        self.drivers
            .get_mut(id.index())
            .ok_or(DispatchError::DriverOutOfRange(id))
    }

    /// Look a driver up by name.
    pub fn by_name(&self, name: &str) -> DispatchResult<&Driver> {
        let id = self
            .id_of(name)
            .ok_or_else(|| DispatchError::UnknownDriver(name.to_string()))?;
        self.get(id)
    }

    /// Mark `name` online at `node`, registering it on first sight.
    ///
    /// Returns the driver's id and `true` if it was newly registered.  A
    /// returning driver keeps its ratings, rides, and distance.
    pub fn go_online(&mut self, name: &str, node: NodeId) -> DispatchResult<(DriverId, bool)> {
        if let Some(id) = self.id_of(name) {
            let driver = self.get_mut(id)?;
            driver.status = DriverStatus::Online;
            driver.node = node;
            return Ok((id, false));
        }

        let id = DriverId::try_from(self.drivers.len())
            .map_err(|_| DispatchError::DriverOutOfRange(DriverId(u32::MAX)))?;
        self.by_name.insert_or_update(name.to_string(), id)?;
        self.drivers.push(Driver::new(id, name.to_string(), node));
        Ok((id, true))
    }

    /// Mark `name` offline.  Its location and metrics are untouched.
    pub fn go_offline(&mut self, name: &str) -> DispatchResult<DriverId> {
        let id = self
            .id_of(name)
            .ok_or_else(|| DispatchError::UnknownDriver(name.to_string()))?;
        self.get_mut(id)?.status = DriverStatus::Offline;
        Ok(id)
    }
}
