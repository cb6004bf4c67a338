//! Lazy enumeration of Fibonacci orbits modulo a base.
//!
//! Each orbit starts at the lowest pair not yet visited and follows
//! `(a, b) -> (b, (a + b) mod base)` until it reaches a visited pair. The
//! residues recorded are the successive second components, so across a full
//! run every one of the `base²` pairs contributes exactly one element.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::OrbitError;
use crate::visited::{FreePairs, VisitedSet};

/// One closed walk through previously unvisited states.
pub type Orbit = Vec<u32>;

/// Iterator over every orbit of the Fibonacci recurrence modulo `base`.
///
/// # Example
/// ```
/// use modfib_core::orbit::OrbitEnumerator;
/// let orbits: Vec<_> = OrbitEnumerator::new(2).unwrap().collect();
/// assert_eq!(orbits, [vec![0], vec![1, 0, 1]]);
/// ```
#[derive(Debug)]
pub struct OrbitEnumerator {
    visited: VisitedSet,
    free: FreePairs,
    emitted: usize,
    done: bool,
}

impl OrbitEnumerator {
    /// Prepare the enumeration for `base`.
    ///
    /// # Errors
    ///
    /// Fails with [`OrbitError::InvalidBase`] for `base <= 0` before any work
    /// is done, or [`OrbitError::BaseTooLarge`] if the state space cannot be
    /// indexed.
    pub fn new(base: i64) -> Result<Self, OrbitError> {
        let visited = VisitedSet::new(base)?;
        debug!(
            base,
            pairs = visited.len(),
            bitmap_bytes = visited.storage_bytes(),
            "starting orbit enumeration"
        );
        let free = visited.unvisited_pairs();
        Ok(Self {
            visited,
            free,
            emitted: 0,
            done: false,
        })
    }

    /// The modulus being enumerated.
    #[must_use]
    pub fn base(&self) -> u32 {
        self.visited.base()
    }

    /// The visited-pair set as it stands after the orbits pulled so far.
    #[must_use]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of orbits yielded so far.
    #[must_use]
    pub fn orbits_emitted(&self) -> usize {
        self.emitted
    }

    /// Walk from `(a, b)` until a visited pair closes the orbit.
    fn walk(&mut self, mut a: u32, mut b: u32) -> Orbit {
        let base = u64::from(self.base());
        let mut orbit = Vec::new();
        while !self.visited.mark_and_test(a, b) {
            #[allow(clippy::cast_possible_truncation)]
            let next = ((u64::from(a) + u64::from(b)) % base) as u32;
            (a, b) = (b, next);
            orbit.push(b);
        }
        orbit
    }
}

impl Iterator for OrbitEnumerator {
    type Item = Orbit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some((a, b)) = self.free.next_in(&self.visited) else {
            self.done = true;
            debug!(
                base = self.base(),
                orbits = self.emitted,
                "orbit enumeration complete"
            );
            return None;
        };
        let orbit = self.walk(a, b);
        self.emitted += 1;
        trace!(start_a = a, start_b = b, len = orbit.len(), "orbit closed");
        Some(orbit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.visited.len() - self.visited.visited_count()))
        }
    }
}

impl FusedIterator for OrbitEnumerator {}

/// Enumerate all orbits of the Fibonacci recurrence modulo `base`.
///
/// # Errors
///
/// See [`OrbitEnumerator::new`].
pub fn modulo_fibonacci(base: i64) -> Result<OrbitEnumerator, OrbitError> {
    OrbitEnumerator::new(base)
}
