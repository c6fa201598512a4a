//! The `Session` struct: all state of one dispatch run.
//!
//! A session owns the location index, the route graph, the distance table,
//! the driver store, and the leaderboards.  Its methods take names as they
//! appear in commands, resolve them to ids, and call into the graph and the
//! dispatch policy.  Any error leaves the session exactly as it was, so a
//! command loop can report it and carry on.
//!
//! # Distance table freshness
//!
//! Edits only mark the table stale.  The next query that reads it (a ride
//! request or a fuel-range query) triggers one full recompute, so a batch of
//! edits costs one sweep.  Reachability and distance queries run a live BFS
//! on the graph and never need the table.

use log::{debug, warn};

use rd_core::{DriverId, NodeId, SessionConfig};
use rd_graph::{DistanceTable, RouteGraph, TopologyEdit};
use rd_index::NameIndex;

use crate::driver::NameHasher;
use crate::{
    Board, DispatchError, DispatchObserver, DispatchPolicy, DispatchResult, Driver, DriverStatus,
    DriverStore, Leaderboards, NoopObserver, RideReceipt, Standing,
};

/// One line of driver information.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverInfo {
    pub name:           String,
    pub location:       String,
    pub average_rating: f64,
    pub races:          u32,
    pub distance:       u64,
    pub status:         DriverStatus,
}

pub struct Session<O: DispatchObserver = NoopObserver> {
    pub config:      SessionConfig,
    locations:       NameIndex<String, NodeId, NameHasher>,
    graph:           RouteGraph<String>,
    distances:       DistanceTable,
    distances_stale: bool,
    drivers:         DriverStore,
    boards:          Leaderboards,
    policy:          DispatchPolicy,
    observer:        O,
}

impl Session<NoopObserver> {
    /// An empty session (no locations, no drivers).
    pub fn new(config: SessionConfig) -> DispatchResult<Self> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: DispatchObserver> Session<O> {
    pub fn with_observer(config: SessionConfig, observer: O) -> DispatchResult<Self> {
        config.validate()?;
        Ok(Self {
            locations:       NameIndex::new(config.location_capacity),
            graph:           RouteGraph::default(),
            distances:       DistanceTable::empty(),
            distances_stale: false,
            drivers:         DriverStore::new(config.driver_capacity),
            boards:          Leaderboards::new(),
            policy:          DispatchPolicy::default(),
            observer,
            config,
        })
    }

    /// Replace the default dispatch ranking.
    pub fn set_policy(&mut self, policy: DispatchPolicy) {
        self.policy = policy;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &RouteGraph<String> {
        &self.graph
    }

    pub fn drivers(&self) -> &DriverStore {
        &self.drivers
    }

    pub fn leaderboards(&self) -> &Leaderboards {
        &self.boards
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// `true` if an edit happened since the distance table was last built.
    pub fn distances_stale(&self) -> bool {
        self.distances_stale
    }

    // ── Map ───────────────────────────────────────────────────────────────

    /// Replace the map: location `i` of `names` becomes `NodeId(i)`, then
    /// every `(from, to)` pair becomes a one-way road.
    ///
    /// Drivers already registered keep their node ids.  The new map is built
    /// aside and swapped in only once every road resolves, so a failed load
    /// keeps the previous map and distance table.
    pub fn load_map<S: AsRef<str>>(&mut self, names: &[S], roads: &[(S, S)]) -> DispatchResult<()> {
        let mut locations: NameIndex<String, NodeId, NameHasher> =
            NameIndex::new(self.config.location_capacity);
        let mut graph = RouteGraph::with_size(names.len());

        for (i, name) in names.iter().enumerate() {
            let id = NodeId::try_from(i)
                .map_err(|_| DispatchError::UnknownLocation(name.as_ref().to_string()))?;
            graph.add_info(id, name.as_ref().to_string())?;
            locations.insert_or_update(name.as_ref().to_string(), id)?;
        }

        let resolve = |name: &str| {
            locations.lookup(name).copied().ok_or_else(|| {
                warn!("road names unknown location {name:?}");
                DispatchError::UnknownLocation(name.to_string())
            })
        };
        for (from, to) in roads {
            graph.add_edge(resolve(from.as_ref())?, resolve(to.as_ref())?)?;
        }

        self.locations = locations;
        self.graph = graph;
        self.distances_stale = true;
        debug!(
            "map loaded: {} locations, {} roads",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    /// Node id of the location called `name`.
    pub fn location(&self, name: &str) -> DispatchResult<NodeId> {
        self.locations.lookup(name).copied().ok_or_else(|| {
            warn!("unknown location {name:?}");
            DispatchError::UnknownLocation(name.to_string())
        })
    }

    pub fn location_name(&self, node: NodeId) -> DispatchResult<&str> {
        Ok(self.graph.info(node)?.as_str())
    }

    pub fn path_exists(&self, from: &str, to: &str) -> DispatchResult<bool> {
        Ok(self.graph.path_exists(self.location(from)?, self.location(to)?)?)
    }

    pub fn distance(&self, from: &str, to: &str) -> DispatchResult<Option<u32>> {
        Ok(self.graph.distance(self.location(from)?, self.location(to)?)?)
    }

    /// Hops of `from → via → to`.
    pub fn distance_via(&self, from: &str, to: &str, via: &str) -> DispatchResult<Option<u32>> {
        let (a, b, c) = (self.location(from)?, self.location(to)?, self.location(via)?);
        Ok(self.graph.distance_via(a, c, b)?)
    }

    /// Apply a road change between `a` and `b`.
    pub fn edit(&mut self, a: &str, b: &str, edit: TopologyEdit) -> DispatchResult<()> {
        let (a, b) = (self.location(a)?, self.location(b)?);
        edit.apply(&mut self.graph, a, b)?;
        self.distances_stale = true;
        Ok(())
    }

    /// Recompute the distance table now.
    pub fn refresh_distances(&mut self) {
        self.distances.refresh(&self.graph);
        self.distances_stale = false;
        self.observer.on_distances_refreshed(self.graph.node_count());
    }

    /// The distance table, recomputed first if stale.
    pub fn distances(&mut self) -> &DistanceTable {
        if self.distances_stale || self.distances.size() != self.graph.node_count() {
            self.refresh_distances();
        }
        &self.distances
    }

    // ── Drivers ───────────────────────────────────────────────────────────

    /// Put `driver` online at `location`, registering it if new.
    pub fn go_online(&mut self, driver: &str, location: &str) -> DispatchResult<DriverId> {
        let node = self.location(location)?;
        let (id, registered) = self.drivers.go_online(driver, node)?;
        let record = self.drivers.get(id)?;
        if registered {
            self.boards.update(record);
        }
        self.observer.on_driver_online(record, registered);
        Ok(id)
    }

    pub fn go_offline(&mut self, driver: &str) -> DispatchResult<DriverId> {
        let id = self.drivers.go_offline(driver)?;
        self.observer.on_driver_offline(self.drivers.get(id)?);
        Ok(id)
    }

    /// Dispatch a ride from `pickup` to `dropoff` and credit the chosen
    /// driver with `rating`.
    pub fn request_ride(
        &mut self,
        pickup: &str,
        dropoff: &str,
        rating: f64,
    ) -> DispatchResult<RideReceipt> {
        let result = self.try_request_ride(pickup, dropoff, rating);
        match &result {
            Ok(receipt) => {
                let driver = self.drivers.get(receipt.driver)?;
                debug!(
                    "ride {} → {} by {}: {} + {} hops",
                    receipt.pickup, receipt.dropoff, driver.name, receipt.to_pickup, receipt.trip
                );
                self.observer.on_ride_completed(receipt, driver);
            }
            Err(e) => {
                debug!("ride {pickup:?} → {dropoff:?} rejected: {e}");
                self.observer.on_ride_rejected(e);
            }
        }
        result
    }

    fn try_request_ride(
        &mut self,
        pickup: &str,
        dropoff: &str,
        rating: f64,
    ) -> DispatchResult<RideReceipt> {
        if self.drivers.is_empty() {
            return Err(DispatchError::NoneAvailable);
        }
        let (src, requested) = (self.location(pickup)?, self.location(dropoff)?);
        self.distances();

        let driver = self.policy.select_driver(src, &self.drivers, &self.distances)?;
        let dst = self
            .policy
            .resolve_dropoff(src, requested, &self.graph, &self.distances)?;

        let mut receipt = self.policy.complete_ride(
            &mut self.drivers,
            &mut self.boards,
            driver,
            src,
            dst,
            &self.distances,
            rating,
        )?;
        receipt.requested_dropoff = requested;
        Ok(receipt)
    }

    /// The best `k` drivers on `board`.
    pub fn top(&self, board: Board, k: usize) -> Vec<Standing> {
        self.boards.top(board, k)
    }

    pub fn driver(&self, name: &str) -> DispatchResult<&Driver> {
        self.drivers.by_name(name)
    }

    pub fn driver_info(&self, name: &str) -> DispatchResult<DriverInfo> {
        let d = self.drivers.by_name(name)?;
        Ok(DriverInfo {
            name:           d.name.clone(),
            location:       self.location_name(d.node)?.to_string(),
            average_rating: d.average_rating(),
            races:          d.races,
            distance:       d.distance,
            status:         d.status,
        })
    }

    /// Locations among `candidates` that `driver` can reach from where it
    /// stands within `fuel` hops.
    ///
    /// Each location appears once, ordered by hop count and then by name.
    /// Unknown candidate names are logged and skipped; an unknown driver is
    /// an error.
    pub fn reachable_within<S: AsRef<str>>(
        &mut self,
        driver: &str,
        fuel: u32,
        candidates: &[S],
    ) -> DispatchResult<Vec<(NodeId, u32)>> {
        let src = self.drivers.by_name(driver)?.node;
        let targets: Vec<NodeId> = candidates
            .iter()
            .filter_map(|c| self.location(c.as_ref()).ok())
            .collect();

        let table = self.distances();
        let mut found: Vec<(NodeId, u32)> = Vec::new();
        for dst in targets {
            match table.get(src, dst)? {
                Some(hops) if hops <= fuel && !found.iter().any(|&(n, _)| n == dst) => {
                    found.push((dst, hops));
                }
                _ => {}
            }
        }

        let graph = &self.graph;
        found.sort_by(|&(a, da), &(b, db)| {
            da.cmp(&db).then_with(|| {
                let na = graph.info(a).map(String::as_str).unwrap_or_default();
                let nb = graph.info(b).map(String::as_str).unwrap_or_default();
                na.cmp(nb)
            })
        });
        Ok(found)
    }
}
