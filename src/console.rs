//! Console boundary for the two programs
//!
//! The enumerator and factorial routines only see in-memory values; reading
//! N and laying out the output happens here, over any `BufRead` / `Write`
//! pair so the programs can be driven without a terminal.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, FactorialConfig, Precision, PrimesConfig};
use crate::factorial::{checked_factorial_table, factorial_table, FactorialError, FactorialRow};
use crate::sieve::{enumerate_primes, SieveError};

/// Prompt shown before reading N.
pub const PROMPT: &str = "Enter a number N: ";

/// Errors raised while reading console input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended before a number was read.
    #[error("expected a number but input was empty")]
    Missing,

    /// Token was not an integer.
    #[error("expected an integer, got '{0}'")]
    Format(String),

    /// Underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while running one of the programs end to end.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Bad console input.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Enumerator rejected the bound.
    #[error(transparent)]
    Sieve(#[from] SieveError),

    /// Checked factorial overflowed.
    #[error(transparent)]
    Factorial(#[from] FactorialError),

    /// Settings were rejected before running.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Read the first whitespace-delimited integer from `reader`.
///
/// Blank lines are skipped; anything after the first token is ignored.
pub fn read_bound<R: BufRead>(reader: &mut R) -> Result<i64, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::Missing);
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<i64>()
                .map_err(|_| InputError::Format(token.to_string()));
        }
    }
}

/// Write [`PROMPT`] and flush so it shows before the read blocks.
pub fn prompt<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "{PROMPT}")?;
    writer.flush()
}

/// Header line, then every prime followed by a space, then a newline.
pub fn write_primes<W: Write>(writer: &mut W, bound: i64, primes: &[u64]) -> io::Result<()> {
    writeln!(writer, "Primes up to {bound}:")?;
    for prime in primes {
        write!(writer, "{prime} ")?;
    }
    writeln!(writer)
}

/// Header line, then `n! = value` per row.
pub fn write_factorials<W: Write>(writer: &mut W, rows: &[FactorialRow]) -> io::Result<()> {
    let upto = rows.last().map(|row| row.n).unwrap_or(0);
    writeln!(writer, "Factorials of numbers from 0 to {upto}:")?;
    for row in rows {
        writeln!(writer, "{}! = {}", row.n, row.value)?;
    }
    Ok(())
}

/// Prime program: obtain N (prompting on `output` if unset), sieve, print.
pub fn run_primes<R: BufRead, W: Write>(
    config: &PrimesConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), ConsoleError> {
    let bound = match config.bound {
        Some(bound) => bound,
        None => {
            prompt(output).map_err(ConsoleError::Output)?;
            read_bound(input)?
        }
    };
    debug!(bound, "sieving");

    let primes = enumerate_primes(bound)?;
    write_primes(output, bound, &primes).map_err(ConsoleError::Output)?;

    info!(bound, count = primes.len(), "primes written");
    Ok(())
}

/// Factorial program: print `0! ..= upto!`.
pub fn run_factorials<W: Write>(
    config: &FactorialConfig,
    output: &mut W,
) -> Result<(), ConsoleError> {
    config.validate()?;

    let rows = match config.precision {
        Precision::Arbitrary => factorial_table(config.upto),
        Precision::Checked => checked_factorial_table(config.upto)?,
    };
    write_factorials(output, &rows).map_err(ConsoleError::Output)?;

    info!(upto = config.upto, precision = ?config.precision, "factorials written");
    Ok(())
}
