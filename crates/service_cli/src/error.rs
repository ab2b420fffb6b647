//! Error types for the quadmc CLI.

use thiserror::Error;

/// Errors surfaced by the CLI.
///
/// Argument-shape errors (missing positionals, zero sample count, unknown
/// selector) are rejected by clap with a usage message before any of these
/// can occur; the variants here cover the environment and kernel
/// boundaries.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid ambient configuration (environment variables).
    #[error(transparent)]
    Config(#[from] quad_mc::ConfigError),

    /// The kernel refused to run.
    #[error(transparent)]
    Kernel(#[from] quad_mc::KernelError),

    /// Report serialisation failed.
    #[error("failed to serialise report: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
