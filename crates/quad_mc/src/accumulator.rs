//! Shared reduction cell for partial sums.
//!
//! The shared accumulator is the only resource mutated by more than one
//! worker. All mutation goes through [`SharedSum::add`], an associative and
//! commutative fold over an atomic cell; there are no raw shared writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// An f64 sum that multiple workers fold into atomically.
///
/// Stores the f64 bit pattern in an `AtomicU64`; [`SharedSum::add`] is a
/// compare-exchange loop, so concurrent folds never lose a contribution.
/// Contention stays low because workers flush into the cell only once per
/// [`FLUSH_INTERVAL`](crate::estimator::FLUSH_INTERVAL) samples.
///
/// # Examples
///
/// ```rust
/// use quad_mc::SharedSum;
///
/// let sum = SharedSum::new();
/// sum.add(1.5);
/// sum.add(2.5);
/// assert_eq!(sum.value(), 4.0);
/// ```
pub struct SharedSum {
    bits: AtomicU64,
}

impl SharedSum {
    /// Creates a zeroed accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            bits: AtomicU64::new(0.0_f64.to_bits()),
        }
    }

    /// Folds `value` into the sum.
    pub fn add(&self, value: f64) {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self.bits.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Reads the accumulated sum.
    ///
    /// Meaningful once all writers have finished (after the join barrier);
    /// never called concurrently with [`SharedSum::add`] by the kernel.
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl Default for SharedSum {
    fn default() -> Self {
        Self::new()
    }
}
