//! Error types for the sampling kernel.
//!
//! Two kinds of failure exist, both rejected before any sampling starts:
//! invalid execution configuration and an invalid sample count. A
//! non-finite *estimate* is not an error; it propagates arithmetically into
//! the result and the caller decides how to surface it.

use thiserror::Error;

/// Invalid execution configuration.
///
/// Produced when building an [`ExecConfig`](crate::ExecConfig), parsing a
/// schedule descriptor, or reading the process environment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker thread count must be at least 1.
    #[error("invalid thread count {0}: must be at least 1")]
    InvalidThreadCount(usize),

    /// Chunk size must be at least 1 when given.
    #[error("invalid chunk size {0}: must be at least 1")]
    InvalidChunk(u64),

    /// Schedule descriptor did not match `static|dynamic|guided[,chunk]`.
    #[error("invalid schedule '{0}': expected static|dynamic|guided[,chunk]")]
    InvalidSchedule(String),

    /// An environment variable was set but unparseable.
    #[error("invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Kernel precondition violation.
///
/// The kernel refuses to run rather than attempting a partial computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Sample count must be strictly positive.
    #[error("invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(u64),

    /// Invalid execution configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
