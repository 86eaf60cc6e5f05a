//! Factorials
//!
//! n! = n · (n-1)!, with n ≤ 1 → 1, computed with an iterative accumulator.
//! The arbitrary-precision path never overflows; the `u64` path is guarded
//! at [`MAX_U64_FACTORIAL`].

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

/// Largest n whose factorial fits in a `u64` (20! = 2432902008176640000).
pub const MAX_U64_FACTORIAL: u32 = 20;

/// Errors raised by the checked factorial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactorialError {
    /// n! does not fit in the fixed-width result type.
    #[error("{n}! overflows u64 (largest supported n is {max})")]
    Overflow {
        /// Requested argument
        n: u32,
        /// Largest argument that fits
        max: u32,
    },
}

/// One line of a factorial table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialRow {
    /// Argument
    pub n: u32,
    /// n!
    pub value: BigUint,
}

/// Exact n!.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// n! as a `u64`, or [`FactorialError::Overflow`] past 20.
pub fn checked_factorial(n: u32) -> Result<u64, FactorialError> {
    let overflow = FactorialError::Overflow {
        n,
        max: MAX_U64_FACTORIAL,
    };
    if n > MAX_U64_FACTORIAL {
        return Err(overflow);
    }

    (2..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(overflow)
}

/// Rows `0! ..= upto!`.
pub fn factorial_table(upto: u32) -> Vec<FactorialRow> {
    let mut rows = Vec::new();
    let mut value = BigUint::one();

    for n in 0..=upto {
        if n > 1 {
            value *= n;
        }
        rows.push(FactorialRow {
            n,
            value: value.clone(),
        });
    }
    rows
}

/// Rows `0! ..= upto!` through the `u64` path.
pub fn checked_factorial_table(upto: u32) -> Result<Vec<FactorialRow>, FactorialError> {
    (0..=upto)
        .map(|n| {
            checked_factorial(n).map(|value| FactorialRow {
                n,
                value: BigUint::from(value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(checked_factorial(0), Ok(1));
    }

    #[test]
    fn test_u64_boundary() {
        assert_eq!(checked_factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(
            checked_factorial(21),
            Err(FactorialError::Overflow { n: 21, max: 20 })
        );
    }

    #[test]
    fn test_past_u64() {
        assert_eq!(factorial(21).to_string(), "51090942171709440000");
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn test_table_matches_direct() {
        let rows = factorial_table(12);
        assert_eq!(rows.len(), 13);
        for row in rows {
            assert_eq!(row.value, factorial(row.n));
        }
    }

    #[test]
    fn test_checked_table() {
        assert_eq!(checked_factorial_table(20).unwrap(), factorial_table(20));
        assert_eq!(
            checked_factorial_table(22),
            Err(FactorialError::Overflow { n: 21, max: 20 })
        );
    }
}
