//! Prime enumeration via the Sieve of Eratosthenes
//!
//! Time: O(n log log n)
//! Space: O(n) bits for the marking table, discarded after each call

mod table;
pub mod trial;

pub use table::MarkingTable;

use thiserror::Error;
use tracing::debug;

/// Largest bound whose marking table is addressable as a bit vector.
///
/// This limits addressability only, not memory: a bound near the limit
/// still needs `bound / 8` bytes and aborts if the allocation fails.
pub const MAX_BOUND: i64 = (usize::MAX >> 4) as i64;

/// Errors raised by the prime enumerator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Upper bound was negative.
    #[error("upper bound must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// Upper bound does not fit in an addressable marking table.
    #[error("upper bound {0} exceeds the largest supported bound {}", MAX_BOUND)]
    TooLarge(i64),
}

/// All primes `p` with `2 <= p <= n`, strictly increasing.
///
/// Returns an empty sequence for `n < 2` and
/// [`SieveError::InvalidArgument`] for `n < 0`.
pub fn enumerate_primes(n: i64) -> Result<Vec<u64>, SieveError> {
    let table = marked_table(n)?;
    let primes = table.primes();

    debug!(bound = n, count = primes.len(), "enumerated primes");
    Ok(primes)
}

/// Number of primes `<= n` (π(n)).
pub fn count_primes(n: i64) -> Result<usize, SieveError> {
    Ok(marked_table(n)?.count())
}

fn marked_table(n: i64) -> Result<MarkingTable, SieveError> {
    let bound = validate_bound(n)?;
    let mut table = MarkingTable::new(bound);
    table.sieve();
    Ok(table)
}

fn validate_bound(n: i64) -> Result<usize, SieveError> {
    if n < 0 {
        return Err(SieveError::InvalidArgument(n));
    }
    if n > MAX_BOUND {
        return Err(SieveError::TooLarge(n));
    }
    usize::try_from(n).map_err(|_| SieveError::TooLarge(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_values() {
        assert_eq!(enumerate_primes(0).unwrap(), Vec::<u64>::new());
        assert_eq!(enumerate_primes(1).unwrap(), Vec::<u64>::new());
        assert_eq!(enumerate_primes(2).unwrap(), vec![2]);
        assert_eq!(enumerate_primes(10).unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_negative_bound_rejected() {
        assert_eq!(enumerate_primes(-1), Err(SieveError::InvalidArgument(-1)));
        assert_eq!(
            count_primes(i64::MIN),
            Err(SieveError::InvalidArgument(i64::MIN))
        );
    }

    #[test]
    fn test_bound_is_inclusive() {
        assert_eq!(enumerate_primes(13).unwrap().last(), Some(&13));
        assert_eq!(enumerate_primes(12).unwrap().last(), Some(&11));
    }

    #[test]
    fn test_prime_counting() {
        assert_eq!(count_primes(100).unwrap(), 25);
        assert_eq!(count_primes(1_000).unwrap(), 168);
        assert_eq!(count_primes(10_000).unwrap(), 1_229);
    }

    #[test]
    fn test_oversized_bound_rejected() {
        assert_eq!(
            enumerate_primes(MAX_BOUND + 1),
            Err(SieveError::TooLarge(MAX_BOUND + 1))
        );
        assert_eq!(enumerate_primes(i64::MAX), Err(SieveError::TooLarge(i64::MAX)));
    }

    #[test]
    fn test_limit_is_addressability_only() {
        assert_eq!(validate_bound(MAX_BOUND), Ok(MAX_BOUND as usize));
        assert_eq!(validate_bound(0), Ok(0));
        assert_eq!(
            validate_bound(MAX_BOUND + 1),
            Err(SieveError::TooLarge(MAX_BOUND + 1))
        );
    }

    #[test]
    fn test_matches_trial_division() {
        let sieved = enumerate_primes(2_000).unwrap();
        assert_eq!(sieved, trial::primes_by_trial_division(2_000));
    }
}
