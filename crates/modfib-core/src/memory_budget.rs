//! Memory budget estimation and validation.

use crate::constants::{RESIDUE_BYTES, WORD_BITS};
use crate::error::OrbitError;
use crate::visited::state_space;

/// Memory estimate for enumerating and grouping every orbit of a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Bytes held by the visited-pair bitmap.
    pub bitmap_bytes: usize,
    /// Bytes held by the grouped orbits (one residue per state pair).
    pub orbit_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for `base`.
    ///
    /// # Errors
    ///
    /// Same validation as [`crate::visited::VisitedSet::new`], plus
    /// [`OrbitError::BaseTooLarge`] when the byte count itself overflows.
    pub fn estimate(base: i64) -> Result<Self, OrbitError> {
        let pairs = state_space(base)?;
        let bitmap_bytes = pairs.div_ceil(WORD_BITS) * std::mem::size_of::<u64>();
        let orbit_bytes = pairs
            .checked_mul(RESIDUE_BYTES)
            .ok_or(OrbitError::BaseTooLarge(base))?;
        Ok(Self {
            bitmap_bytes,
            orbit_bytes,
            total_bytes: bitmap_bytes.saturating_add(orbit_bytes),
        })
    }

    /// Check if the run fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }

    /// Return an error if the run does not fit within `limit`.
    pub fn check(&self, limit: Option<usize>) -> Result<(), OrbitError> {
        match limit {
            Some(limit) if !self.fits_in(Some(limit)) => Err(OrbitError::MemoryLimit {
                required: self.total_bytes,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means unlimited and yields `None`.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot be parsed.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit: {e}"))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| format!("memory limit {s} is out of range"))
}
