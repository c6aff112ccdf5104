//! Sort key selection.

use std::cmp::Ordering;
use std::fmt;

use crate::records::Vehicle;

/// Which vehicle field a sort orders by.
///
/// Being an enum, an unsupported key cannot be expressed - a caller/core
/// contract mismatch fails at compile time instead of at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Mileage,
    /// Registration number, compared case-insensitively.
    Registration,
    /// Assigned driver id, compared case-insensitively.
    DriverId,
    FuelUsage,
}

impl SortKey {
    /// Compare two vehicles by this key.
    ///
    /// String keys compare case-insensitively so sorted order matches
    /// the case-insensitive equality used by binary search. Fuel usage
    /// uses `f64::total_cmp` for a total order over doubles.
    pub(crate) fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortKey::Mileage => a.mileage.cmp(&b.mileage),
            SortKey::Registration => cmp_ignore_case(&a.registration, &b.registration),
            SortKey::DriverId => cmp_ignore_case(&a.driver_id, &b.driver_id),
            SortKey::FuelUsage => a.fuel_usage.total_cmp(&b.fuel_usage),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Mileage => write!(f, "mileage"),
            SortKey::Registration => write!(f, "registration"),
            SortKey::DriverId => write!(f, "driver id"),
            SortKey::FuelUsage => write!(f, "fuel usage"),
        }
    }
}

/// Case-insensitive string ordering.
pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::VehicleCategory;

    fn vehicle(registration: &str, mileage: u32, fuel: f64, driver: &str) -> Vehicle {
        Vehicle::with_driver(registration, VehicleCategory::Van, mileage, fuel, driver)
    }

    #[test]
    fn test_compare_by_mileage() {
        let a = vehicle("A", 10, 1.0, "D1");
        let b = vehicle("B", 20, 1.0, "D1");
        assert_eq!(SortKey::Mileage.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_registration_ignores_case() {
        let a = vehicle("gt-100", 10, 1.0, "D1");
        let b = vehicle("GT-100", 10, 1.0, "D1");
        assert_eq!(SortKey::Registration.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_fuel_usage_total_order() {
        let a = vehicle("A", 10, 7.5, "D1");
        let b = vehicle("B", 10, 12.0, "D1");
        assert_eq!(SortKey::FuelUsage.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::FuelUsage.compare(&b, &a), Ordering::Greater);
    }
}
