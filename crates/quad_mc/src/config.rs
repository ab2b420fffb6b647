//! Execution configuration for the sampling kernel.
//!
//! The original OpenMP formulation reads its concurrency settings from
//! ambient global state (`OMP_NUM_THREADS`, `OMP_SCHEDULE`). Here that
//! state is re-modelled as an explicit [`ExecConfig`] passed to the kernel
//! call, while [`ExecConfig::from_env`] preserves the
//! configure-without-recompiling behaviour through the `QUADMC_NUM_THREADS`
//! and `QUADMC_SCHEDULE` variables.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable holding the worker thread count.
pub const ENV_NUM_THREADS: &str = "QUADMC_NUM_THREADS";

/// Environment variable holding the schedule descriptor.
pub const ENV_SCHEDULE: &str = "QUADMC_SCHEDULE";

/// Default chunk size for the dynamic policy, in samples.
pub const DEFAULT_DYNAMIC_CHUNK: u64 = 1024;

/// Work-scheduling policy for partitioning the sample range.
///
/// `chunk` is the scheduling grain in samples; `None` selects the policy
/// default (static: range / worker count, dynamic:
/// [`DEFAULT_DYNAMIC_CHUNK`], guided: a minimum grain of 1).
///
/// # Descriptor grammar
///
/// Parsed from and displayed as `kind[,chunk]`, the `OMP_SCHEDULE` grammar:
///
/// ```rust
/// use quad_mc::Schedule;
///
/// let s: Schedule = "dynamic,4096".parse().unwrap();
/// assert_eq!(s, Schedule::Dynamic { chunk: Some(4096) });
/// assert_eq!(s.to_string(), "dynamic,4096");
///
/// let s: Schedule = "guided".parse().unwrap();
/// assert_eq!(s, Schedule::Guided { chunk: None });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Contiguous blocks assigned round-robin up front; zero runtime
    /// coordination, sensitive to workload imbalance.
    Static {
        /// Block size; `None` splits the range evenly across workers.
        chunk: Option<u64>,
    },

    /// Workers claim fixed-size blocks from a shared cursor as they finish
    /// prior ones; self-balancing under uneven per-sample cost.
    Dynamic {
        /// Block size; `None` uses [`DEFAULT_DYNAMIC_CHUNK`].
        chunk: Option<u64>,
    },

    /// Like dynamic, but the claimed block shrinks geometrically with the
    /// remaining range.
    Guided {
        /// Minimum block size; `None` uses 1.
        chunk: Option<u64>,
    },
}

impl Schedule {
    /// Returns the policy name without the chunk suffix.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Schedule::Static { .. } => "static",
            Schedule::Dynamic { .. } => "dynamic",
            Schedule::Guided { .. } => "guided",
        }
    }

    /// Returns the configured chunk size, if any.
    #[inline]
    pub fn chunk(&self) -> Option<u64> {
        match *self {
            Schedule::Static { chunk }
            | Schedule::Dynamic { chunk }
            | Schedule::Guided { chunk } => chunk,
        }
    }

    /// Validates the chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidChunk`] if a chunk of 0 was given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.chunk() {
            Some(0) => Err(ConfigError::InvalidChunk(0)),
            _ => Ok(()),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Static { chunk: None }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk() {
            Some(chunk) => write!(f, "{},{}", self.kind(), chunk),
            None => f.write_str(self.kind()),
        }
    }
}

impl FromStr for Schedule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, chunk) = match s.split_once(',') {
            Some((kind, chunk_str)) => {
                let chunk: u64 = chunk_str
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSchedule(s.to_string()))?;
                (kind.trim(), Some(chunk))
            }
            None => (s.trim(), None),
        };

        let schedule = match kind {
            "static" => Schedule::Static { chunk },
            "dynamic" => Schedule::Dynamic { chunk },
            "guided" => Schedule::Guided { chunk },
            _ => return Err(ConfigError::InvalidSchedule(s.to_string())),
        };

        schedule.validate()?;
        Ok(schedule)
    }
}

/// Execution configuration for one kernel call.
///
/// Immutable once built. Use [`ExecConfig::builder`] for explicit
/// construction or [`ExecConfig::from_env`] to honour the ambient
/// environment.
///
/// # Examples
///
/// ```rust
/// use quad_mc::{ExecConfig, Schedule};
///
/// let config = ExecConfig::builder()
///     .threads(8)
///     .schedule(Schedule::Guided { chunk: Some(256) })
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.threads(), 8);
/// assert_eq!(config.schedule().kind(), "guided");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecConfig {
    /// Number of worker threads in the team.
    threads: usize,
    /// Work-scheduling policy.
    schedule: Schedule,
}

impl ExecConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ExecConfigBuilder {
        ExecConfigBuilder::default()
    }

    /// Returns the worker thread count.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the schedule policy.
    #[inline]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `QUADMC_NUM_THREADS` (positive integer) and `QUADMC_SCHEDULE`
    /// (`kind[,chunk]`). Unset variables fall back to the builder defaults:
    /// all available CPUs and `static`.
    ///
    /// # Errors
    ///
    /// A variable that is set but malformed is a [`ConfigError`], never
    /// silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(value) = std::env::var(ENV_NUM_THREADS) {
            let threads: usize =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: ENV_NUM_THREADS,
                        value: value.clone(),
                    })?;
            builder = builder.threads(threads);
        }

        if let Ok(value) = std::env::var(ENV_SCHEDULE) {
            builder = builder.schedule(value.parse()?);
        }

        builder.build()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the thread count is 0 or the schedule
    /// carries a zero chunk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidThreadCount(0));
        }
        self.schedule.validate()
    }
}

impl Default for ExecConfig {
    /// Platform default: one worker per available CPU, static schedule.
    fn default() -> Self {
        ExecConfig {
            threads: num_cpus::get(),
            schedule: Schedule::default(),
        }
    }
}

/// Builder for [`ExecConfig`].
///
/// Validates at build time, following the same discipline as the selector
/// parsing: a bad configuration is rejected before any sampling starts.
#[derive(Clone, Debug, Default)]
pub struct ExecConfigBuilder {
    threads: Option<usize>,
    schedule: Option<Schedule>,
}

impl ExecConfigBuilder {
    /// Sets the worker thread count (must be at least 1).
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Sets the schedule policy.
    #[inline]
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Builds the configuration.
    ///
    /// Unset fields take the platform defaults: all available CPUs and
    /// `static` with an even split.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a zero thread count or zero chunk size.
    pub fn build(self) -> Result<ExecConfig, ConfigError> {
        let config = ExecConfig {
            threads: self.threads.unwrap_or_else(num_cpus::get),
            schedule: self.schedule.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
