//! Instrumentation attached to sort and search results.

use std::fmt;
use std::time::Duration;

/// Measurements from one sort run.
///
/// Timing and comparison counts feed the console's performance read-outs.
/// They say nothing about correctness - two runs over the same data may
/// report different timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub elapsed: Duration,
    pub comparisons: u64,
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sorted in {:.3} ms ({} comparisons)",
            self.elapsed.as_secs_f64() * 1_000.0,
            self.comparisons
        )
    }
}

/// Measurements and result position from one binary search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Index of the match in the searched array, or `None`.
    pub index: Option<usize>,
    pub elapsed: Duration,
    pub comparisons: u64,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {:.3} ms ({} comparisons)",
            if self.found() { "found" } else { "not found" },
            self.elapsed.as_secs_f64() * 1_000.0,
            self.comparisons
        )
    }
}
