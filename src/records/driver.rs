//! The driver record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A driver waiting in the assignment queue. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver id, e.g. "D003".
    pub id: String,
    pub name: String,
    pub experience_years: u32,
    /// Base location the driver operates from.
    pub location: String,
}

impl Driver {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        experience_years: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            experience_years,
            location: location.into(),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} yrs, {})",
            self.id, self.name, self.experience_years, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Driver::new("D001", "Ama Mensah", 6, "Accra");
        assert_eq!(format!("{}", d), "D001 - Ama Mensah (6 yrs, Accra)");
    }
}
