//! Scalable filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_scalable::ScalableConfigBuilder;
//!
//! let config = ScalableConfigBuilder::new()
//!     .false_positive_rate(0.05)
//!     .initial_capacity(1_000.0)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.growth_factor, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Default capacity of the first filter in the chain
pub const DEFAULT_INITIAL_CAPACITY: f64 = 128.0;

/// Default capacity multiplier applied on growth
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Default false positive rate multiplier applied on growth
pub const DEFAULT_RATE_DECAY: f64 = 0.5;

/// Default target false positive rate
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// Scalable Bloom filter configuration
///
/// Missing fields fall back to their defaults when deserialized, so a
/// configuration file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalableConfig {
    /// Target false positive rate, in (0, 1)
    pub false_positive_rate: f64,
    /// Capacity of the first filter, > 0
    pub initial_capacity: f64,
    /// Capacity multiplier for each new filter, > 1
    pub growth_factor: f64,
    /// False positive rate multiplier for each new filter, in (0, 1)
    pub rate_decay: f64,
}

impl Default for ScalableConfig {
    fn default() -> Self {
        Self {
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            rate_decay: DEFAULT_RATE_DECAY,
        }
    }
}

impl ScalableConfig {
    /// Create a new configuration with validation
    pub fn new(
        false_positive_rate: f64,
        initial_capacity: f64,
        growth_factor: f64,
        rate_decay: f64,
    ) -> Result<Self, FilterError> {
        let config = Self {
            false_positive_rate,
            initial_capacity,
            growth_factor,
            rate_decay,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its valid range.
    ///
    /// Comparisons are written so that NaN fails them.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FilterError::invalid(
                "false_positive_rate",
                self.false_positive_rate,
                "in (0, 1)",
            ));
        }

        if !(self.initial_capacity > 0.0 && self.initial_capacity.is_finite()) {
            return Err(FilterError::invalid(
                "initial_capacity",
                self.initial_capacity,
                "> 0",
            ));
        }

        if !(self.growth_factor > 1.0 && self.growth_factor.is_finite()) {
            return Err(FilterError::invalid(
                "growth_factor",
                self.growth_factor,
                "> 1",
            ));
        }

        if !(self.rate_decay > 0.0 && self.rate_decay < 1.0) {
            return Err(FilterError::invalid(
                "rate_decay",
                self.rate_decay,
                "in (0, 1)",
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the target false positive rate
    pub fn with_false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = fpr;
        self
    }

    /// Builder-style method to set the initial capacity
    pub fn with_initial_capacity(mut self, capacity: f64) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder-style method to set the capacity growth factor
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Builder-style method to set the false positive rate decay
    pub fn with_rate_decay(mut self, decay: f64) -> Self {
        self.rate_decay = decay;
        self
    }
}

/// Builder for ScalableConfig with validation
///
/// ```
/// use bloom_scalable::ScalableConfigBuilder;
///
/// let config = ScalableConfigBuilder::new()
///     .false_positive_rate(0.01)
///     .initial_capacity(500.0)
///     .growth_factor(4.0)
///     .rate_decay(0.8)
///     .build()
///     .unwrap();
/// assert_eq!(config.rate_decay, 0.8);
/// ```
#[derive(Default)]
pub struct ScalableConfigBuilder {
    false_positive_rate: Option<f64>,
    initial_capacity: Option<f64>,
    growth_factor: Option<f64>,
    rate_decay: Option<f64>,
}

impl ScalableConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target false positive rate (must be in (0, 1))
    pub fn false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = Some(fpr);
        self
    }

    /// Set capacity of the first filter (must be > 0)
    pub fn initial_capacity(mut self, capacity: f64) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Set capacity growth factor (must be > 1)
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = Some(factor);
        self
    }

    /// Set false positive rate decay (must be in (0, 1))
    pub fn rate_decay(mut self, decay: f64) -> Self {
        self.rate_decay = Some(decay);
        self
    }

    /// Build the ScalableConfig, validating all parameters
    pub fn build(self) -> Result<ScalableConfig, FilterError> {
        let defaults = ScalableConfig::default();

        let config = ScalableConfig {
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            growth_factor: self.growth_factor.unwrap_or(defaults.growth_factor),
            rate_decay: self.rate_decay.unwrap_or(defaults.rate_decay),
        };

        config.validate()?;
        Ok(config)
    }
}
