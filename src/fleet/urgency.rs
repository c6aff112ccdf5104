//! Maintenance urgency bands.

use std::fmt;

/// How urgently a scheduled task needs attention, derived from its
/// remaining mileage.
///
/// Bands match the console's priority legend: 0-500 km is critical,
/// 501-1000 high, 1001-2000 medium, beyond that low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Classify a remaining-mileage figure.
    pub fn of(mileage_until_service: u32) -> Self {
        match mileage_until_service {
            0..=500 => Urgency::Critical,
            501..=1_000 => Urgency::High,
            1_001..=2_000 => Urgency::Medium,
            _ => Urgency::Low,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Critical => write!(f, "CRITICAL"),
            Urgency::High => write!(f, "HIGH"),
            Urgency::Medium => write!(f, "MEDIUM"),
            Urgency::Low => write!(f, "LOW"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(Urgency::of(0), Urgency::Critical);
        assert_eq!(Urgency::of(500), Urgency::Critical);
        assert_eq!(Urgency::of(501), Urgency::High);
        assert_eq!(Urgency::of(1_000), Urgency::High);
        assert_eq!(Urgency::of(1_001), Urgency::Medium);
        assert_eq!(Urgency::of(2_000), Urgency::Medium);
        assert_eq!(Urgency::of(2_001), Urgency::Low);
    }

    #[test]
    fn test_ordering_tracks_urgency() {
        assert!(Urgency::Critical < Urgency::High);
        assert!(Urgency::High < Urgency::Low);
    }
}
