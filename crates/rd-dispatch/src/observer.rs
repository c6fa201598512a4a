//! Session observer trait for logging and data collection.

use crate::{DispatchError, Driver, RideReceipt};

/// Callbacks invoked by [`Session`](crate::Session) as commands complete.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — ride counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct RideCounter { done: usize, rejected: usize }
///
/// impl DispatchObserver for RideCounter {
///     fn on_ride_completed(&mut self, _: &RideReceipt, _: &Driver) { self.done += 1; }
///     fn on_ride_rejected(&mut self, _: &DispatchError) { self.rejected += 1; }
/// }
/// ```
pub trait DispatchObserver {
    /// A driver went online.  `registered` is `true` on its first appearance.
    fn on_driver_online(&mut self, _driver: &Driver, _registered: bool) {}

    fn on_driver_offline(&mut self, _driver: &Driver) {}

    /// A ride finished; `driver` reflects the updated record.
    fn on_ride_completed(&mut self, _receipt: &RideReceipt, _driver: &Driver) {}

    /// A ride request was refused (`NoneAvailable`, `DestinationUnreachable`,
    /// or a name that did not resolve).
    fn on_ride_rejected(&mut self, _error: &DispatchError) {}

    /// The distance table was recomputed for a `nodes`-node map.
    fn on_distances_refreshed(&mut self, _nodes: usize) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
