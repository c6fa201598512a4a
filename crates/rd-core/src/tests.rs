//! Unit tests for rd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DriverId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(DriverId(0) < DriverId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn oversized_index_rejected() {
        assert!(DriverId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(DriverId(7).to_string(), "DriverId(7)");
        assert_eq!(usize::from(NodeId(3)), 3);
    }
}

#[cfg(test)]
mod config {
    use crate::{DEFAULT_CAPACITY, RdError, SessionConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.location_capacity, DEFAULT_CAPACITY);
        assert_eq!(cfg.driver_capacity, DEFAULT_CAPACITY);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = SessionConfig { location_capacity: 0, ..SessionConfig::default() };
        assert!(matches!(cfg.validate(), Err(RdError::Config(_))));

        let cfg = SessionConfig { driver_capacity: 0, ..SessionConfig::default() };
        assert!(matches!(cfg.validate(), Err(RdError::Config(_))));
    }
}
