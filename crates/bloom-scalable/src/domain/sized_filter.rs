//! Bloom filter sized from a capacity and a target false positive rate

use std::hash::Hash;

use tracing::debug;

use super::fixed_filter::FixedFilter;
use super::parameters::{calculate_fpr, optimal_bit_count, optimal_hash_count};
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// A [`FixedFilter`] whose `m` and `k` are derived from the number of items
/// it is meant to hold and the false positive rate wanted at that load.
#[derive(Clone, Debug)]
pub struct SizedFilter {
    capacity: f64,
    false_positive_rate: f64,
    inner: FixedFilter,
}

impl SizedFilter {
    /// Create a filter for `capacity` items at `false_positive_rate`.
    ///
    /// - m = ceil(-capacity * ln(fpr) / (ln 2)^2)
    /// - k = floor(-log2(fpr)), at least 1
    ///
    /// A capacity whose `m` cannot be addressed is rejected as
    /// `InvalidParameter`, before anything is allocated.
    pub fn new(capacity: f64, false_positive_rate: f64) -> Result<Self, FilterError> {
        if !(capacity > 0.0 && capacity.is_finite()) {
            return Err(FilterError::invalid("capacity", capacity, "> 0"));
        }
        if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(FilterError::invalid(
                "false_positive_rate",
                false_positive_rate,
                "in (0, 1)",
            ));
        }

        let size_bits = optimal_bit_count(capacity, false_positive_rate).ok_or_else(|| {
            FilterError::invalid("capacity", capacity, "small enough to address in bits")
        })?;
        let hash_count = optimal_hash_count(false_positive_rate);
        let inner = FixedFilter::new(size_bits, hash_count)?;

        debug!(
            capacity,
            fpr = false_positive_rate,
            size_bits,
            hash_count,
            "Created sized bloom filter"
        );

        Ok(Self {
            capacity,
            false_positive_rate,
            inner,
        })
    }

    /// Whether the estimated item count exceeds the design capacity.
    ///
    /// This relies on [`FixedFilter::approximate_cardinality`], so it is an
    /// estimate: it can trip slightly early or late, and a filter with every
    /// bit set is always reported as saturated.
    pub fn is_saturated(&self) -> bool {
        match self.inner.approximate_cardinality() {
            Some(estimate) => estimate > self.capacity,
            None => true,
        }
    }

    /// Rate the derived `m` and `k` give once `capacity` items are in.
    ///
    /// Usually close to, but not exactly, the requested rate since `k` is
    /// rounded down.
    pub fn expected_false_positive_rate(&self) -> f64 {
        calculate_fpr(
            self.inner.size_bits(),
            self.capacity.ceil() as usize,
            self.inner.hash_count(),
        )
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    pub fn inner(&self) -> &FixedFilter {
        &self.inner
    }
}

impl MembershipFilter for SizedFilter {
    fn add<T: Hash + ?Sized>(&mut self, item: &T) -> Result<(), FilterError> {
        self.inner.add(item)
    }

    fn query<T: Hash + ?Sized>(&self, item: &T) -> Result<bool, FilterError> {
        self.inner.query(item)
    }
}
