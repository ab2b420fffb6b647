//! Work-queue partitioning of the sample range.
//!
//! A [`WorkQueue`] hands out blocks of the index range [0, N) to a fixed
//! team of workers under one of the three schedule policies. Whatever the
//! policy and worker count, the blocks handed out tile the range exactly:
//! no gap, no overlap, every index exactly once.
//!
//! The queue is the only piece of scheduling state shared across the team;
//! static partitioning never touches it, the on-demand policies go through
//! a single atomic claim cursor.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{Schedule, DEFAULT_DYNAMIC_CHUNK};

/// Resolved schedule policy with concrete chunk sizes.
#[derive(Clone, Copy, Debug)]
enum Policy {
    Static { chunk: u64 },
    Dynamic { chunk: u64 },
    Guided { min_chunk: u64 },
}

/// Partition of [0, N) among a fixed worker team.
///
/// Constructed once per kernel call and shared by reference across the
/// team. Policy-default chunk sizes are resolved up front so the claim
/// paths do no option handling.
///
/// # Examples
///
/// ```rust
/// use quad_mc::{Schedule, WorkQueue};
///
/// let queue = WorkQueue::new(10, 2, Schedule::Static { chunk: Some(3) });
/// let mut worker0 = queue.worker(0);
///
/// // Round-robin: worker 0 takes blocks 0..3 and 6..9.
/// assert_eq!(worker0.next_block(), Some(0..3));
/// assert_eq!(worker0.next_block(), Some(6..9));
/// assert_eq!(worker0.next_block(), None);
/// ```
pub struct WorkQueue {
    n: u64,
    workers: usize,
    policy: Policy,
    /// Claim cursor for the on-demand policies; unused by static.
    cursor: AtomicU64,
}

impl WorkQueue {
    /// Creates a queue partitioning [0, `n`) among `workers` workers.
    ///
    /// `workers` must be at least 1 (enforced upstream by
    /// [`ExecConfig`](crate::ExecConfig) validation).
    pub fn new(n: u64, workers: usize, schedule: Schedule) -> Self {
        debug_assert!(workers >= 1);
        let team = workers as u64;
        let policy = match schedule {
            Schedule::Static { chunk } => Policy::Static {
                // Even split by default; max(1) keeps the stride positive
                // for tiny ranges.
                chunk: chunk.unwrap_or_else(|| n.div_ceil(team)).max(1),
            },
            Schedule::Dynamic { chunk } => Policy::Dynamic {
                chunk: chunk.unwrap_or(DEFAULT_DYNAMIC_CHUNK),
            },
            Schedule::Guided { chunk } => Policy::Guided {
                min_chunk: chunk.unwrap_or(1),
            },
        };
        Self {
            n,
            workers,
            policy,
            cursor: AtomicU64::new(0),
        }
    }

    /// Returns the claim handle for one worker ordinal.
    pub fn worker(&self, index: usize) -> WorkerQueue<'_> {
        debug_assert!(index < self.workers);
        let stride = match self.policy {
            Policy::Static { chunk } => chunk * self.workers as u64,
            _ => 0,
        };
        let next_static = match self.policy {
            Policy::Static { chunk } => index as u64 * chunk,
            _ => 0,
        };
        WorkerQueue {
            queue: self,
            next_static,
            stride,
        }
    }

    /// Total number of indices to partition.
    #[inline]
    pub fn len(&self) -> u64 {
        self.n
    }

    /// Whether the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Claims the next dynamic block of `chunk` indices.
    fn claim_dynamic(&self, chunk: u64) -> Option<Range<u64>> {
        let start = self.cursor.fetch_add(chunk, Ordering::Relaxed);
        if start >= self.n {
            return None;
        }
        Some(start..(start + chunk).min(self.n))
    }

    /// Claims the next guided block: remaining / team, floored at
    /// `min_chunk`, shrinking geometrically as the range depletes.
    fn claim_guided(&self, min_chunk: u64) -> Option<Range<u64>> {
        loop {
            let start = self.cursor.load(Ordering::Acquire);
            if start >= self.n {
                return None;
            }
            let remaining = self.n - start;
            let size = (remaining / self.workers as u64)
                .max(min_chunk)
                .min(remaining);
            match self.cursor.compare_exchange_weak(
                start,
                start + size,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(start..start + size),
                Err(_) => continue,
            }
        }
    }
}

/// Per-worker claim handle into a [`WorkQueue`].
///
/// Yields successive blocks until the worker's share of the range is
/// exhausted. Owned by exactly one worker; the static bookkeeping lives
/// here so the static policy needs no coordination at all.
pub struct WorkerQueue<'a> {
    queue: &'a WorkQueue,
    /// Start of this worker's next round-robin block (static only).
    next_static: u64,
    /// Distance between this worker's consecutive blocks (static only).
    stride: u64,
}

impl WorkerQueue<'_> {
    /// Returns the next block of indices for this worker, or `None` once
    /// its share of [0, N) is exhausted.
    pub fn next_block(&mut self) -> Option<Range<u64>> {
        match self.queue.policy {
            Policy::Static { chunk } => {
                let start = self.next_static;
                if start >= self.queue.n {
                    return None;
                }
                self.next_static = start + self.stride;
                Some(start..(start + chunk).min(self.queue.n))
            }
            Policy::Dynamic { chunk } => self.queue.claim_dynamic(chunk),
            Policy::Guided { min_chunk } => self.queue.claim_guided(min_chunk),
        }
    }
}
