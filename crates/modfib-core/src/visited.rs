//! Bit-packed membership set over ordered residue pairs.
//!
//! One bit per state pair `(a, b)` with `0 <= a, b < base`, stored row-major
//! at flat index `a * base + b` in `u64` words.

use crate::constants::WORD_BITS;
use crate::error::OrbitError;

/// Set of state pairs that have been observed at least once.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    base: usize,
    len: usize,
    visited: usize,
    words: Vec<u64>,
}

impl VisitedSet {
    /// Create an empty set sized for `base²` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidBase`] for `base <= 0`,
    /// [`OrbitError::BaseTooLarge`] when `base²` cannot be indexed, and
    /// [`OrbitError::Allocation`] when the bitmap cannot be allocated.
    pub fn new(base: i64) -> Result<Self, OrbitError> {
        let len = state_space(base)?;
        let base = usize::try_from(base).map_err(|_| OrbitError::BaseTooLarge(base))?;
        let word_count = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| OrbitError::Allocation {
                bytes: word_count.saturating_mul(std::mem::size_of::<u64>()),
            })?;
        words.resize(word_count, 0);
        Ok(Self {
            base,
            len,
            visited: 0,
            words,
        })
    }

    /// The modulus this set was built for.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn base(&self) -> u32 {
        // Bounded by `state_space`.
        self.base as u32
    }

    /// Number of state pairs (`base²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a valid base has at least the pair `(0, 0)`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct pairs marked so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// `true` once every pair has been marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.visited == self.len
    }

    /// Bytes held by the bitmap.
    #[must_use]
    pub fn storage_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Mark `(a, b)` as visited and return whether it was **already** visited.
    ///
    /// The first call for a pair returns `false`; every later call returns `true`.
    pub fn mark_and_test(&mut self, a: u32, b: u32) -> bool {
        let (word, mask) = self.locate(a, b);
        let was_set = self.words[word] & mask != 0;
        self.words[word] |= mask;
        if !was_set {
            self.visited += 1;
        }
        was_set
    }

    /// Whether `(a, b)` is marked, without marking it.
    #[must_use]
    pub fn is_visited(&self, a: u32, b: u32) -> bool {
        let (word, mask) = self.locate(a, b);
        self.words[word] & mask != 0
    }

    /// Start a fresh scan over the pairs not yet visited, from index 0.
    #[must_use]
    pub fn unvisited_pairs(&self) -> FreePairs {
        FreePairs { cursor: 0 }
    }

    fn locate(&self, a: u32, b: u32) -> (usize, u64) {
        let (a, b) = (a as usize, b as usize);
        debug_assert!(a < self.base && b < self.base, "pair out of range");
        let pos = a * self.base + b;
        (pos / WORD_BITS, 1 << (pos % WORD_BITS))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pair_at(&self, pos: usize) -> (u32, u32) {
        ((pos / self.base) as u32, (pos % self.base) as u32)
    }
}

/// Monotonic cursor over the unvisited pairs of a [`VisitedSet`].
///
/// The cursor does not borrow the set between pulls, so the caller may mark
/// pairs in between. Every pull reloads the storage word under the cursor,
/// which means pairs marked since the previous pull are skipped. Indices
/// behind the cursor are never revisited.
#[derive(Debug, Clone)]
pub struct FreePairs {
    cursor: usize,
}

impl FreePairs {
    /// Advance to the next pair of `set` whose bit is currently unset.
    ///
    /// Returns `None` once the scan has passed index `base² - 1`; it keeps
    /// returning `None` afterwards.
    pub fn next_in(&mut self, set: &VisitedSet) -> Option<(u32, u32)> {
        while self.cursor < set.len {
            let word = self.cursor / WORD_BITS;
            let bit = self.cursor % WORD_BITS;
            let free = (!set.words[word]) >> bit;
            if free == 0 {
                self.cursor = (word + 1) * WORD_BITS;
                continue;
            }
            let pos = self.cursor + free.trailing_zeros() as usize;
            if pos >= set.len {
                // Padding bits past the last pair.
                break;
            }
            self.cursor = pos + 1;
            return Some(set.pair_at(pos));
        }
        self.cursor = set.len;
        None
    }

    /// Flat index the next pull will start from.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

/// Validate `base` and return the size of its state space.
pub(crate) fn state_space(base: i64) -> Result<usize, OrbitError> {
    if base <= 0 {
        return Err(OrbitError::InvalidBase(base));
    }
    let side = u32::try_from(base).map_err(|_| OrbitError::BaseTooLarge(base))? as usize;
    side.checked_mul(side).ok_or(OrbitError::BaseTooLarge(base))
}
