//! The parallel sampling kernel.
//!
//! [`estimate`] forks a fixed team of workers for the duration of one call,
//! partitions the sample range among them through a [`WorkQueue`], and
//! reduces their partial sums into one unbiased estimate of the integrand's
//! mean over (0, 1). The team is joined and discarded before the call
//! returns; no state survives between calls.

use std::time::{Duration, Instant};

use quad_core::Integrand;

use crate::accumulator::SharedSum;
use crate::config::{ExecConfig, Schedule};
use crate::error::KernelError;
use crate::rng::SampleRng;
use crate::schedule::WorkQueue;

/// Samples accumulated locally between folds into the shared sum.
///
/// Bounds contention on the shared cell: with N = 10^7 and this interval a
/// worker touches the shared accumulator about 10^4 times instead of 10^7.
pub const FLUSH_INTERVAL: u64 = 1024;

/// Result of one kernel call.
///
/// Immutable once produced. `value` is the Monte Carlo estimate of the
/// integral over (0, 1); the remaining fields describe the run that
/// produced it, for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// The estimate: shared sum / N.
    pub value: f64,
    /// Wall-clock time spanning the parallel region.
    pub elapsed: Duration,
    /// Number of samples drawn (exactly N integrand evaluations).
    pub samples: u64,
    /// Worker team size used.
    pub threads: usize,
    /// Schedule policy used.
    pub schedule: Schedule,
}

impl Estimate {
    /// Whether a sample evaluation produced a non-finite value that
    /// propagated into the estimate.
    ///
    /// Not an error: the caller surfaces it as a reportable anomaly.
    #[inline]
    pub fn is_anomalous(&self) -> bool {
        !self.value.is_finite()
    }

    /// Absolute error against a known closed-form value.
    #[inline]
    pub fn absolute_error(&self, exact: f64) -> f64 {
        (self.value - exact).abs()
    }
}

/// Estimates the integral of `integrand` over (0, 1).
///
/// Resolves the integrand variant once at entry; the per-sample evaluation
/// inside each worker is the monomorphised function body, not a selector
/// check.
///
/// # Errors
///
/// [`KernelError::InvalidSampleCount`] for `samples == 0`;
/// [`KernelError::Config`] for an invalid configuration.
///
/// # Examples
///
/// ```rust
/// use quad_core::Integrand;
/// use quad_mc::{estimate, ExecConfig};
///
/// let config = ExecConfig::builder().threads(2).build().unwrap();
/// let result = estimate(Integrand::Cube, 200_000, 7, &config).unwrap();
/// assert!(result.absolute_error(0.25) < 0.01);
/// ```
pub fn estimate(
    integrand: Integrand,
    samples: u64,
    base_seed: u64,
    config: &ExecConfig,
) -> Result<Estimate, KernelError> {
    match integrand {
        Integrand::Identity => {
            estimate_with(&|x| Integrand::Identity.eval(x), samples, base_seed, config)
        }
        Integrand::Cube => {
            estimate_with(&|x| Integrand::Cube.eval(x), samples, base_seed, config)
        }
        Integrand::Cos100x => {
            estimate_with(&|x| Integrand::Cos100x.eval(x), samples, base_seed, config)
        }
        Integrand::InvSqrt => {
            estimate_with(&|x| Integrand::InvSqrt.eval(x), samples, base_seed, config)
        }
    }
}

/// The kernel proper, generic over the integrand function.
///
/// Forks `config.threads()` scoped workers. Each worker derives its own
/// [`SampleRng`] from `base_seed` and its ordinal, pulls blocks from the
/// work queue, draws one uniform sample in [0, 1) per assigned index, and
/// accumulates integrand values locally, folding into the shared sum every
/// [`FLUSH_INTERVAL`] samples and once more at exit.
///
/// With a single worker the blocks arrive in ascending order under every
/// policy, so a one-thread run is bit-identical across schedules.
///
/// # Errors
///
/// Same conditions as [`estimate`].
pub fn estimate_with<F>(
    f: &F,
    samples: u64,
    base_seed: u64,
    config: &ExecConfig,
) -> Result<Estimate, KernelError>
where
    F: Fn(f64) -> f64 + Sync,
{
    config.validate()?;
    if samples == 0 {
        return Err(KernelError::InvalidSampleCount(0));
    }

    let threads = config.threads();
    let schedule = config.schedule();
    let queue = WorkQueue::new(samples, threads, schedule);
    let shared = SharedSum::new();

    let start = Instant::now();
    std::thread::scope(|scope| {
        for worker in 0..threads {
            let queue = &queue;
            let shared = &shared;
            scope.spawn(move || {
                let mut rng = SampleRng::for_worker(base_seed, worker);
                let mut handle = queue.worker(worker);
                let mut local = 0.0_f64;
                let mut since_flush = 0_u64;

                while let Some(block) = handle.next_block() {
                    for _ in block {
                        local += f(rng.sample());
                        since_flush += 1;
                        if since_flush == FLUSH_INTERVAL {
                            shared.add(local);
                            local = 0.0;
                            since_flush = 0;
                        }
                    }
                }
                // Flush remainder
                shared.add(local);
            });
        }
    });
    let elapsed = start.elapsed();

    Ok(Estimate {
        value: shared.value() / samples as f64,
        elapsed,
        samples,
        threads,
        schedule,
    })
}
