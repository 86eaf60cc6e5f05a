//! Boolean marking table for the sieve
//!
//! One bit per index in `0..=n`: set while the index is still a prime
//! candidate, cleared once it is known to be composite.

use bitvec::prelude::*;
use tracing::trace;

/// Marking table over `0..=bound`
///
/// Space: n + 1 bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkingTable {
    candidates: BitVec,
    bound: usize,
}

impl MarkingTable {
    /// Create a table for `0..=bound` with every index marked except 0 and 1.
    pub fn new(bound: usize) -> Self {
        let mut candidates = bitvec![1; bound + 1];
        candidates.set(0, false);
        if bound >= 1 {
            candidates.set(1, false);
        }

        Self { candidates, bound }
    }

    /// Largest index covered by the table.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Number of entries (`bound + 1`).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Tables always hold at least index 0.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether `index` is still marked as a prime candidate.
    ///
    /// Indices beyond the bound are never candidates.
    pub fn is_candidate(&self, index: usize) -> bool {
        self.candidates.get(index).map(|bit| *bit).unwrap_or(false)
    }

    /// Run the marking pass.
    ///
    /// For every `i` with `i * i <= bound` that is still marked, clears
    /// `i*i, i*i + i, ...` up to the bound. When `i` is reached every
    /// multiple of each smaller prime has already been cleared, so its
    /// mark is exact.
    pub fn sieve(&mut self) {
        let bound = self.bound;
        let mut i = 2usize;

        // `i <= bound / i` is `i * i <= bound` without the overflow
        while i <= bound / i {
            if self.candidates[i] {
                trace!(prime = i, "clearing multiples");
                for multiple in (i * i..=bound).step_by(i) {
                    self.candidates.set(multiple, false);
                }
            }
            i += 1;
        }
    }

    /// Indices still marked, ascending.
    pub fn primes(&self) -> Vec<u64> {
        self.candidates.iter_ones().map(|index| index as u64).collect()
    }

    /// Number of indices still marked.
    pub fn count(&self) -> usize {
        self.candidates.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_table_excludes_zero_and_one() {
        let table = MarkingTable::new(5);
        assert_eq!(table.bound(), 5);
        assert_eq!(table.bound() + 1, table.len());
        assert!(!table.is_candidate(0));
        assert!(!table.is_candidate(1));
        assert!((2..=5).all(|i| table.is_candidate(i)));
    }

    #[test]
    fn test_tiny_bounds() {
        assert!(MarkingTable::new(0).primes().is_empty());
        assert!(MarkingTable::new(1).primes().is_empty());
    }

    #[test]
    fn test_marking_pass_clears_composites() {
        let mut table = MarkingTable::new(30);
        table.sieve();

        for composite in [4, 6, 8, 9, 15, 21, 25, 27, 30] {
            assert!(!table.is_candidate(composite), "{composite} left marked");
        }
        assert_eq!(table.count(), 10);
    }

    #[test]
    fn test_out_of_range_is_not_candidate() {
        let table = MarkingTable::new(3);
        assert!(!table.is_candidate(4));
        assert!(!table.is_candidate(usize::MAX));
    }
}
