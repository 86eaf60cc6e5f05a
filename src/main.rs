use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numerals::config::DEFAULT_LOG_FILTER;
use numerals::console::{run_factorials, run_primes};
use numerals::{FactorialConfig, Precision, PrimesConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "numerals", about = "Prime sieve and factorial examples")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every prime up to N using the Sieve of Eratosthenes.
    Primes {
        /// Upper bound N (prompted on stdin when omitted).
        #[arg(long, allow_negative_numbers = true)]
        bound: Option<i64>,
    },
    /// Print factorials of 0 through K.
    Factorials {
        /// Last argument K.
        #[arg(long, default_value_t = numerals::config::DEFAULT_FACTORIAL_UPTO)]
        upto: u32,
        /// Use checked 64-bit arithmetic instead of arbitrary precision.
        #[arg(long)]
        checked: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Primes { bound } => {
            let config = PrimesConfig { bound };
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            run_primes(&config, &mut input, &mut output).context("prime enumeration failed")?;
        }
        Commands::Factorials { upto, checked } => {
            let config = factorial_config(upto, checked);
            let mut output = io::stdout().lock();
            run_factorials(&config, &mut output).context("factorial table failed")?;
        }
    }

    Ok(())
}

fn factorial_config(upto: u32, checked: bool) -> FactorialConfig {
    FactorialConfig {
        upto,
        precision: if checked {
            Precision::Checked
        } else {
            Precision::Arbitrary
        },
    }
}
