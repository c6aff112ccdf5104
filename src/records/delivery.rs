//! The delivery record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pending delivery order.
///
/// Immutable after creation; its lifecycle ends when the delivery queue
/// dequeues it for processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub package_id: String,
    pub origin: String,
    pub destination: String,
    /// Registration of the vehicle carrying the package.
    pub vehicle_registration: String,
    pub driver_id: String,
    /// Estimated time of arrival, as a display label.
    pub eta: String,
}

impl Delivery {
    pub fn new(
        package_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        vehicle_registration: impl Into<String>,
        driver_id: impl Into<String>,
        eta: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            origin: origin.into(),
            destination: destination.into(),
            vehicle_registration: vehicle_registration.into(),
            driver_id: driver_id.into(),
            eta: eta.into(),
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} via {} ({}), ETA {}",
            self.package_id,
            self.origin,
            self.destination,
            self.vehicle_registration,
            self.driver_id,
            self.eta
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Delivery::new("PKG-7", "Accra", "Kumasi", "GT-1024-23", "D001", "14:30");
        assert_eq!(
            format!("{}", d),
            "PKG-7: Accra -> Kumasi via GT-1024-23 (D001), ETA 14:30"
        );
    }
}
