//! Partition of orbits by length, longest first.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::orbit::Orbit;

/// Orbits bucketed by length. Buckets iterate in descending length; orbits
/// inside a bucket keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedOrbits {
    buckets: BTreeMap<Reverse<usize>, Vec<Orbit>>,
}

/// Drain `orbits` and bucket them by length.
pub fn group_by_length<I>(orbits: I) -> GroupedOrbits
where
    I: IntoIterator<Item = Orbit>,
{
    let mut buckets: BTreeMap<Reverse<usize>, Vec<Orbit>> = BTreeMap::new();
    for orbit in orbits {
        buckets.entry(Reverse(orbit.len())).or_default().push(orbit);
    }
    GroupedOrbits { buckets }
}

impl GroupedOrbits {
    /// `(length, orbits)` buckets, longest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Orbit])> {
        self.buckets
            .iter()
            .map(|(Reverse(len), orbits)| (*len, orbits.as_slice()))
    }

    /// Every orbit in display order.
    pub fn orbits(&self) -> impl Iterator<Item = &Orbit> {
        self.buckets.values().flatten()
    }

    /// Number of orbits across all buckets.
    #[must_use]
    pub fn total_orbits(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of residues across all orbits.
    #[must_use]
    pub fn total_elements(&self) -> usize {
        self.buckets
            .iter()
            .map(|(Reverse(len), orbits)| len * orbits.len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Orbit counts per length.
    #[must_use]
    pub fn histogram(&self) -> LengthHistogram {
        LengthHistogram {
            total_orbits: self.total_orbits(),
            total_elements: self.total_elements(),
            buckets: self
                .iter()
                .map(|(length, orbits)| HistogramBucket {
                    length,
                    count: orbits.len(),
                })
                .collect(),
        }
    }
}

/// Count of orbits sharing one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub length: usize,
    pub count: usize,
}

/// Summary of a grouped enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthHistogram {
    pub total_orbits: usize,
    pub total_elements: usize,
    /// Longest first.
    pub buckets: Vec<HistogramBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::modulo_fibonacci;

    #[test]
    fn buckets_descend_by_length() {
        let grouped = group_by_length(vec![vec![1], vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]);
        let lengths: Vec<usize> = grouped.iter().map(|(len, _)| len).collect();
        assert_eq!(lengths, [3, 2, 1]);
    }

    #[test]
    fn bucket_keeps_discovery_order() {
        let grouped = group_by_length(vec![vec![9, 9], vec![1], vec![3, 3]]);
        let (_, pairs) = grouped.iter().next().unwrap();
        assert_eq!(pairs, [vec![9, 9], vec![3, 3]]);
    }

    #[test]
    fn empty_orbits_form_their_own_bucket() {
        let grouped = group_by_length(vec![vec![], vec![0]]);
        let lengths: Vec<usize> = grouped.iter().map(|(len, _)| len).collect();
        assert_eq!(lengths, [1, 0]);
        assert_eq!(grouped.total_orbits(), 2);
        assert_eq!(grouped.total_elements(), 1);
    }

    #[test]
    fn empty_input() {
        let grouped = group_by_length(Vec::new());
        assert!(grouped.is_empty());
        assert!(grouped.histogram().buckets.is_empty());
    }

    #[test]
    fn display_order_flattens_buckets() {
        let grouped = group_by_length(modulo_fibonacci(2).unwrap());
        let flat: Vec<Orbit> = grouped.orbits().cloned().collect();
        assert_eq!(flat, [vec![1, 0, 1], vec![0]]);
    }

    #[test]
    fn histogram_base_ten() {
        let hist = group_by_length(modulo_fibonacci(10).unwrap()).histogram();
        assert_eq!(hist.total_orbits, 6);
        assert_eq!(hist.total_elements, 100);
        let pairs: Vec<(usize, usize)> = hist
            .buckets
            .iter()
            .map(|b| (b.length, b.count))
            .collect();
        assert_eq!(pairs, [(60, 1), (20, 1), (12, 1), (4, 1), (3, 1), (1, 1)]);
    }

    #[test]
    fn histogram_serializes() {
        let hist = group_by_length(modulo_fibonacci(2).unwrap()).histogram();
        let json = serde_json::to_value(&hist).unwrap();
        assert_eq!(json["total_orbits"], 2);
        assert_eq!(json["buckets"][0]["length"], 3);
    }
}
