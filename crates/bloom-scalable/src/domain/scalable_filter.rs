//! Scalable Bloom filter
//!
//! A chain of [`SizedFilter`]s that grows as items arrive. Items go into the
//! newest filter until its estimated cardinality passes its capacity; the
//! next new item then opens a filter with capacity multiplied by the growth
//! factor and false positive rate multiplied by the rate decay. Queries OR
//! across the whole chain.
//!
//! The first filter is built at `fpr * rate_decay`, so the per-filter rates
//! form the series `fpr·r, fpr·r², …` whose sum is `fpr·r / (1 - r)`. With
//! the default `r = 0.5` that is exactly the requested `fpr`.
//!
//! INVARIANTS:
//! - The chain is never empty and only ever grows at the end
//! - Filter `i` has capacity `c₀·sⁱ` and rate `p₀·rⁱ`
//! - No false negatives across growth: earlier filters are never modified
//!   again but are always consulted by `query`

use std::hash::Hash;

use tracing::{info, trace};

use super::config::ScalableConfig;
use super::sized_filter::SizedFilter;
use crate::error::FilterError;
use crate::metrics::MetricsSnapshot;
use crate::ports::MembershipFilter;

/// Bloom filter that adapts to an unknown number of insertions.
///
/// Not synchronized: share it across threads only behind an exclusive lock
/// around `add`.
#[derive(Clone, Debug)]
pub struct ScalableFilter {
    current_capacity: f64,
    current_false_positive_rate: f64,
    growth_factor: f64,
    rate_decay: f64,
    filters: Vec<SizedFilter>,
}

impl ScalableFilter {
    /// Create a filter targeting `false_positive_rate`, with default initial
    /// capacity (128), growth factor (2) and rate decay (0.5).
    pub fn new(false_positive_rate: f64) -> Result<Self, FilterError> {
        Self::with_config(ScalableConfig {
            false_positive_rate,
            ..ScalableConfig::default()
        })
    }

    /// Create a filter with every parameter given explicitly.
    pub fn with_params(
        false_positive_rate: f64,
        initial_capacity: f64,
        growth_factor: f64,
        rate_decay: f64,
    ) -> Result<Self, FilterError> {
        Self::with_config(ScalableConfig::new(
            false_positive_rate,
            initial_capacity,
            growth_factor,
            rate_decay,
        )?)
    }

    /// Create a filter from a configuration, validating it first.
    pub fn with_config(config: ScalableConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let current_capacity = config.initial_capacity;
        let current_false_positive_rate = config.false_positive_rate * config.rate_decay;
        let first = SizedFilter::new(current_capacity, current_false_positive_rate)?;

        Ok(Self {
            current_capacity,
            current_false_positive_rate,
            growth_factor: config.growth_factor,
            rate_decay: config.rate_decay,
            filters: vec![first],
        })
    }

    /// Append a filter with the next capacity and rate, returning it.
    ///
    /// State is only updated once the new filter has been built.
    fn grow(&mut self) -> Result<&mut SizedFilter, FilterError> {
        let capacity = self.current_capacity * self.growth_factor;
        let fpr = self.current_false_positive_rate * self.rate_decay;
        let filter = SizedFilter::new(capacity, fpr)?;

        info!(
            filter_index = self.filters.len(),
            capacity,
            fpr,
            size_bits = filter.inner().size_bits(),
            "Scalable bloom filter grew"
        );

        self.current_capacity = capacity;
        self.current_false_positive_rate = fpr;
        self.filters.push(filter);
        let last = self.filters.len() - 1;
        Ok(&mut self.filters[last])
    }

    /// The filters in creation order. Never empty.
    pub fn filters(&self) -> &[SizedFilter] {
        &self.filters
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Capacity of the newest filter.
    pub fn current_capacity(&self) -> f64 {
        self.current_capacity
    }

    /// False positive rate of the newest filter.
    pub fn current_false_positive_rate(&self) -> f64 {
        self.current_false_positive_rate
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn rate_decay(&self) -> f64 {
        self.rate_decay
    }

    /// Sum of the design capacities of every filter.
    pub fn total_capacity(&self) -> f64 {
        self.filters.iter().map(SizedFilter::capacity).sum()
    }

    /// Sum of the per-filter cardinality estimates, or `None` if any filter
    /// has every bit set.
    pub fn approximate_cardinality(&self) -> Option<f64> {
        self.filters
            .iter()
            .map(|f| f.inner().approximate_cardinality())
            .sum()
    }

    /// Design-rate bound for the whole chain: `1 - Π(1 - pᵢ)`.
    pub fn compound_false_positive_rate(&self) -> f64 {
        1.0 - self
            .filters
            .iter()
            .map(|f| 1.0 - f.false_positive_rate())
            .product::<f64>()
    }

    /// Point-in-time metrics for export.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::from_filters(&self.filters)
    }
}

impl MembershipFilter for ScalableFilter {
    /// Insert `item` into the newest filter, growing the chain first if that
    /// filter is saturated. Items that already test positive are skipped.
    fn add<T: Hash + ?Sized>(&mut self, item: &T) -> Result<(), FilterError> {
        if self.query(item)? {
            trace!(filters = self.filters.len(), "Skipped add of present item");
            return Ok(());
        }

        let last = self.filters.len() - 1;
        let active = if self.filters[last].is_saturated() {
            self.grow()?
        } else {
            &mut self.filters[last]
        };
        active.add(item)
    }

    /// True if any filter in the chain reports the item, oldest first.
    fn query<T: Hash + ?Sized>(&self, item: &T) -> Result<bool, FilterError> {
        for filter in &self.filters {
            if filter.query(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
