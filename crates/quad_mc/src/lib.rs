//! # quad_mc: Parallel Monte Carlo Sampling Kernel
//!
//! This crate is the kernel layer of the quadmc workspace. It estimates the
//! mean of an integrand over uniform samples in [0, 1) — and hence its
//! integral over (0, 1) — by partitioning N independent trials across a
//! fixed team of worker threads.
//!
//! # Architecture
//!
//! ```text
//! estimate()
//! ├── ExecConfig    (worker count + schedule policy, env-populated)
//! ├── WorkQueue     (static / dynamic / guided partition of [0, N))
//! ├── SampleRng     (one independent stream per worker)
//! └── SharedSum     (atomic f64 reduction cell)
//! ```
//!
//! The worker team is forked for the duration of one call and joined at its
//! end; no pool or other state survives between calls. Each worker owns its
//! RNG stream (derived from the base seed and its ordinal index), sums
//! integrand values into a local accumulator, and folds that accumulator
//! into the shared sum every [`estimator::FLUSH_INTERVAL`] samples plus
//! once at exit.
//!
//! # Reproducibility
//!
//! For a fixed (integrand, N, base seed, thread count, schedule) the
//! estimate is bit-for-bit reproducible. Across thread counts or schedule
//! policies the estimate is invariant only up to floating-point summation
//! order.
//!
//! # Examples
//!
//! ```rust
//! use quad_core::Integrand;
//! use quad_mc::{estimate, ExecConfig, Schedule};
//!
//! let config = ExecConfig::builder()
//!     .threads(4)
//!     .schedule(Schedule::Dynamic { chunk: Some(4096) })
//!     .build()
//!     .unwrap();
//!
//! let result = estimate(Integrand::Identity, 100_000, 42, &config).unwrap();
//! assert!((result.value - 0.5).abs() < 0.01);
//! assert_eq!(result.samples, 100_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod accumulator;
pub mod config;
pub mod error;
pub mod estimator;
pub mod rng;
pub mod schedule;

// Re-exports for convenient access
pub use accumulator::SharedSum;
pub use config::{ExecConfig, ExecConfigBuilder, Schedule};
pub use error::{ConfigError, KernelError};
pub use estimator::{estimate, estimate_with, Estimate};
pub use rng::SampleRng;
pub use schedule::{WorkQueue, WorkerQueue};
