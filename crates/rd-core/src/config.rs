//! Session configuration.
//!
//! Both name indices are fixed-capacity open-addressing tables that never
//! grow, so their capacities must be chosen up front and must be at least the
//! number of distinct names the session will ever see.

/// Prime slot count used when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 666_013;

/// Sizing for one dispatch session.
///
/// Typically built from defaults, optionally overlaid with a JSON file by the
/// application crate, then with command-line overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Slot count of the location-name index.  Prefer a prime.
    pub location_capacity: usize,

    /// Slot count of the driver-name index.  Prefer a prime.
    pub driver_capacity: usize,
}

impl SessionConfig {
    /// Reject configurations that could never hold a single name.
    pub fn validate(&self) -> crate::RdResult<()> {
        if self.location_capacity == 0 {
            return Err(crate::RdError::Config(
                "location_capacity must be greater than zero".into(),
            ));
        }
        if self.driver_capacity == 0 {
            return Err(crate::RdError::Config(
                "driver_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            location_capacity: DEFAULT_CAPACITY,
            driver_capacity:   DEFAULT_CAPACITY,
        }
    }
}
