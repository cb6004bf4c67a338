//! # modfib-core
//!
//! Enumerates the orbits of the Fibonacci recurrence modulo a base.
//! A bit-packed set tracks which `(a, b)` state pairs have been seen, and the
//! enumerator walks the recurrence from each unseen pair until it closes.

pub mod constants;
pub mod error;
pub mod grouping;
pub mod memory_budget;
pub mod orbit;
pub mod visited;

// Re-exports
pub use constants::{exit_codes, DEFAULT_BASE};
pub use error::OrbitError;
pub use grouping::{group_by_length, GroupedOrbits, HistogramBucket, LengthHistogram};
pub use memory_budget::MemoryEstimate;
pub use orbit::{modulo_fibonacci, Orbit, OrbitEnumerator};
pub use visited::{FreePairs, VisitedSet};

/// Enumerate and group every orbit of `base` in one call.
///
/// # Example
/// ```
/// let grouped = modfib_core::grouped_orbits(10).unwrap();
/// assert_eq!(grouped.total_elements(), 100);
/// assert_eq!(grouped.iter().next().map(|(len, _)| len), Some(60));
/// ```
pub fn grouped_orbits(base: i64) -> Result<GroupedOrbits, OrbitError> {
    Ok(group_by_length(modulo_fibonacci(base)?))
}
