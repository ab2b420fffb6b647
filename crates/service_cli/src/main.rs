//! quadmc CLI - Parallel Monte Carlo Integration over (0, 1)
//!
//! This is the operational entry point for the quadmc sampling kernel.
//!
//! # Invocation
//!
//! ```text
//! quadmc <FUNCTION> <SAMPLES> [SEED] [--format table|json]
//! ```
//!
//! `FUNCTION` is one of `x`, `x3`, `cos100x`, `inv_sqrt`; `SAMPLES` is the
//! number of random points (at least 1); `SEED` defaults to a time-derived
//! value when omitted.
//!
//! # Ambient configuration
//!
//! Worker count and schedule policy are read from the environment, never
//! from the command line, so runs can be reconfigured without recompiling:
//! `QUADMC_NUM_THREADS` and `QUADMC_SCHEDULE` (`static|dynamic|guided[,chunk]`).

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use quad_core::Integrand;
use quad_mc::{estimate, ExecConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod report;

pub use error::{CliError, Result};
use report::Report;

/// Report rendering selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable key/value report.
    #[default]
    Table,
    /// Machine-readable JSON record.
    Json,
}

/// quadmc: Monte Carlo estimation of definite integrals over (0, 1)
#[derive(Parser)]
#[command(name = "quadmc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Functions: x | x3 | cos100x | inv_sqrt
Environment: set QUADMC_NUM_THREADS and QUADMC_SCHEDULE \
(static|dynamic|guided[,chunk])")]
struct Cli {
    /// Integrand to estimate
    #[arg(value_name = "FUNCTION", value_parser = Integrand::from_str)]
    function: Integrand,

    /// Number of random points (e.g. 10000000)
    #[arg(value_name = "SAMPLES", value_parser = clap::value_parser!(u64).range(1..))]
    samples: u64,

    /// Base seed for reproducibility (time-derived when omitted)
    #[arg(value_name = "SEED")]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

/// Fallback seed when none is given, matching the original tool's
/// time-derived default.
fn time_derived_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(time_derived_seed);
    let config = ExecConfig::from_env()?;

    info!(
        function = %cli.function,
        samples = cli.samples,
        seed,
        threads = config.threads(),
        schedule = %config.schedule(),
        "starting estimation"
    );

    let result = estimate(cli.function, cli.samples, seed, &config)?;
    let report = Report::new(cli.function, &result);

    if report.anomalous {
        warn!("estimate is non-finite: a sample hit a singular point of the integrand");
    }

    match cli.format {
        OutputFormat::Table => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
