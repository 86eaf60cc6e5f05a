//! # Primes and factorials
//!
//! Two textbook number routines with a small console front end.
//!
//! ## Core Algorithms
//!
//! 1. **Sieve of Eratosthenes**: mark multiples of each discovered prime as
//!    composite in an (n+1)-bit table, then collect what is left
//! 2. **Factorial**: iterative n!, exact via `BigUint` or guarded `u64`
//!
//! Sieve cost: O(n log log n) time, O(n) bits of space
//!
//! ## Usage Example
//!
//! ```
//! use numerals::{enumerate_primes, factorial};
//!
//! assert_eq!(enumerate_primes(10)?, vec![2, 3, 5, 7]);
//! assert_eq!(factorial(5).to_string(), "120");
//! # Ok::<(), numerals::SieveError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;     // Run settings
pub mod console;    // Console input and output layout
pub mod factorial;  // n!
pub mod sieve;      // Prime enumeration

// Re-exports for convenience
pub use config::{ConfigError, FactorialConfig, Precision, PrimesConfig};
pub use console::{ConsoleError, InputError};
pub use factorial::{
    checked_factorial, checked_factorial_table, factorial, factorial_table, FactorialError,
    FactorialRow, MAX_U64_FACTORIAL,
};
pub use sieve::{count_primes, enumerate_primes, MarkingTable, SieveError, MAX_BOUND};
