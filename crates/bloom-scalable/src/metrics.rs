//! Point-in-time metrics for scalable Bloom filters
//!
//! Filters are plain single-owner values, so metrics are read on demand from
//! their state rather than accumulated in counters. Export a
//! [`MetricsSnapshot`] to whatever monitoring system the caller uses.
//!
//! ## Usage
//!
//! ```
//! use bloom_scalable::{MembershipFilter, ScalableFilter};
//!
//! let mut filter = ScalableFilter::new(0.01).unwrap();
//! filter.add("0xABCD").unwrap();
//!
//! let snapshot = filter.snapshot();
//! assert_eq!(snapshot.filter_count, 1);
//! assert!(snapshot.bits_set > 0);
//! ```

use serde::Serialize;

use crate::domain::SizedFilter;

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Filters in the chain
    pub filter_count: usize,
    /// Bits allocated across all filters
    pub total_bits: usize,
    /// Bits currently set across all filters
    pub bits_set: usize,
    /// Sum of design capacities
    pub total_capacity: f64,
    /// Sum of per-filter cardinality estimates; `None` if a filter is full
    pub estimated_items: Option<f64>,
    /// Design-rate bound of the chain, `1 - Π(1 - pᵢ)`
    pub compound_fpr: f64,
}

impl MetricsSnapshot {
    /// Collect metrics from a chain of filters.
    pub fn from_filters(filters: &[SizedFilter]) -> Self {
        let mut snapshot = Self {
            filter_count: filters.len(),
            estimated_items: Some(0.0),
            ..Self::default()
        };
        let mut pass_probability = 1.0;

        for filter in filters {
            let inner = filter.inner();
            snapshot.total_bits += inner.size_bits();
            snapshot.bits_set += inner.bits_set();
            snapshot.total_capacity += filter.capacity();
            snapshot.estimated_items = snapshot
                .estimated_items
                .zip(inner.approximate_cardinality())
                .map(|(sum, estimate)| sum + estimate);
            pass_probability *= 1.0 - filter.false_positive_rate();
        }

        snapshot.compound_fpr = 1.0 - pass_probability;
        snapshot
    }

    /// Bytes allocated for bit storage.
    pub fn bytes_allocated(&self) -> usize {
        self.total_bits.div_ceil(8)
    }

    /// Fraction of allocated bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        if self.total_bits == 0 {
            return 0.0;
        }
        self.bits_set as f64 / self.total_bits as f64
    }
}
