//! Driver selection and ride completion.

use std::cmp::Ordering;

use log::debug;

use rd_core::{DriverId, NodeId};
use rd_graph::{DistanceTable, RouteGraph};

use crate::criteria::{Candidate, Criterion, DISPATCH_CRITERIA, compose};
use crate::{DispatchError, DispatchResult, DriverStore, Leaderboards};

/// Outcome of a completed ride.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideReceipt {
    pub driver:            DriverId,
    pub pickup:            NodeId,
    /// Drop-off the rider asked for.
    pub requested_dropoff: NodeId,
    /// Drop-off actually served; differs from `requested_dropoff` when that
    /// was unreachable and a neighbour was substituted.
    pub dropoff:           NodeId,
    /// Hops from the driver's previous location to the pickup.
    pub to_pickup:         u32,
    /// Hops from the pickup to `dropoff`.
    pub trip:              u32,
    pub rating:            f64,
}

/// Composite driver ranking plus the ride bookkeeping that follows a match.
///
/// The default policy ranks candidates by availability, then proximity to
/// the pickup, then rating (see [`crate::criteria`]).
#[derive(Clone, Debug)]
pub struct DispatchPolicy {
    criteria: Vec<Criterion>,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self { criteria: DISPATCH_CRITERIA.to_vec() }
    }
}

impl DispatchPolicy {
    /// A policy with a custom criteria list, applied in order.
    pub fn with_criteria(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Compare two candidates; `Less` means `a` is the better pick.
    pub fn rank(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        compose(&self.criteria, a, b)
    }

    /// Pick the best driver for a pickup at `pickup`.
    ///
    /// Scans every driver once.  On a complete tie the earlier-registered
    /// driver is kept.  Fails with [`DispatchError::NoneAvailable`] when
    /// there are no drivers or the winner is offline or cannot reach the
    /// pickup.
    pub fn select_driver(
        &self,
        pickup: NodeId,
        drivers: &DriverStore,
        table: &DistanceTable,
    ) -> DispatchResult<DriverId> {
        table.get(pickup, pickup)?;

        let mut best: Option<Candidate<'_>> = None;
        for driver in drivers.iter() {
            let cand = Candidate { driver, to_pickup: table.hops(driver.node, pickup) };
            best = match best {
                Some(cur) if self.rank(&cand, &cur) != Ordering::Less => Some(cur),
                _ => Some(cand),
            };
        }

        let best = best.ok_or(DispatchError::NoneAvailable)?;
        if !best.driver.is_online() || best.to_pickup.is_none() {
            debug!(
                "no usable driver for pickup {pickup}: best was {} ({}, {:?} hops)",
                best.driver.name,
                best.driver.status.as_str(),
                best.to_pickup
            );
            return Err(DispatchError::NoneAvailable);
        }

        debug!(
            "pickup {pickup}: selected {} at {:?} hops",
            best.driver.name, best.to_pickup
        );
        Ok(best.driver.id)
    }

    /// The node a ride to `dropoff` will actually end at.
    ///
    /// `dropoff` itself if reachable from `pickup`, otherwise its first
    /// neighbour (in edge insertion order) that is.
    pub fn resolve_dropoff<P>(
        &self,
        pickup: NodeId,
        dropoff: NodeId,
        graph: &RouteGraph<P>,
        table: &DistanceTable,
    ) -> DispatchResult<NodeId> {
        if table.get(pickup, dropoff)?.is_some() {
            return Ok(dropoff);
        }
        graph
            .neighbors(dropoff)?
            .iter()
            .copied()
            .find(|&n| table.hops(pickup, n).is_some())
            .inspect(|n| debug!("drop-off {dropoff} unreachable, substituting {n}"))
            .ok_or(DispatchError::DestinationUnreachable { pickup, dropoff })
    }

    /// Credit `driver` with a ride `pickup → dropoff` and re-rank it.
    ///
    /// `dropoff` must already be resolved.  Distance accrues as hops from the
    /// driver's current location to `pickup` plus hops from `pickup` to
    /// `dropoff`; the driver ends at `dropoff`.
    #[allow(clippy::too_many_arguments)]
    pub fn complete_ride(
        &self,
        drivers: &mut DriverStore,
        boards: &mut Leaderboards,
        driver: DriverId,
        pickup: NodeId,
        dropoff: NodeId,
        table: &DistanceTable,
        rating: f64,
    ) -> DispatchResult<RideReceipt> {
        let d = drivers.get_mut(driver)?;
        let to_pickup = table
            .get(d.node, pickup)?
            .ok_or(DispatchError::NoneAvailable)?;
        let trip = table
            .get(pickup, dropoff)?
            .ok_or(DispatchError::DestinationUnreachable { pickup, dropoff })?;

        d.rating_sum += rating;
        d.races += 1;
        d.distance += (to_pickup + trip) as u64;
        d.node = dropoff;
        boards.update(d);

        Ok(RideReceipt {
            driver,
            pickup,
            requested_dropoff: dropoff,
            dropoff,
            to_pickup,
            trip,
            rating,
        })
    }
}
