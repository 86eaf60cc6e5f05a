//! Run settings for the two programs

use thiserror::Error;

use crate::factorial::MAX_U64_FACTORIAL;

/// Default upper end of the factorial table.
pub const DEFAULT_FACTORIAL_UPTO: u32 = 10;

/// Largest factorial table end accepted by [`FactorialConfig::validate`].
pub const MAX_FACTORIAL_UPTO: u32 = 1_000;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors raised while validating run settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Table end is past the supported maximum.
    #[error("factorial tables are limited to n <= {max}, requested up to {upto}")]
    RangeExceeded {
        /// Requested table end
        upto: u32,
        /// Largest supported table end
        max: u32,
    },

    /// Checked arithmetic was requested for a range that cannot fit in `u64`.
    #[error("checked factorials are limited to n <= {max}, requested up to {upto}")]
    CheckedRangeExceeded {
        /// Requested table end
        upto: u32,
        /// Largest supported table end
        max: u32,
    },
}

/// Settings for the prime enumerator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimesConfig {
    /// Upper bound; `None` reads it from the console.
    pub bound: Option<i64>,
}

impl PrimesConfig {
    /// Use a fixed bound instead of prompting.
    pub fn with_bound(bound: i64) -> Self {
        Self { bound: Some(bound) }
    }
}

/// Integer width used for factorials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precision {
    /// `BigUint`, never overflows
    #[default]
    Arbitrary,
    /// `u64` with an overflow guard
    Checked,
}

/// Settings for the factorial printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialConfig {
    /// Last argument printed (inclusive)
    pub upto: u32,
    /// Arithmetic used for the values
    pub precision: Precision,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self {
            upto: DEFAULT_FACTORIAL_UPTO,
            precision: Precision::Arbitrary,
        }
    }
}

impl FactorialConfig {
    /// Reject oversized tables and checked ranges that would overflow mid-table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upto > MAX_FACTORIAL_UPTO {
            return Err(ConfigError::RangeExceeded {
                upto: self.upto,
                max: MAX_FACTORIAL_UPTO,
            });
        }
        if self.precision == Precision::Checked && self.upto > MAX_U64_FACTORIAL {
            return Err(ConfigError::CheckedRangeExceeded {
                upto: self.upto,
                max: MAX_U64_FACTORIAL,
            });
        }
        Ok(())
    }
}
