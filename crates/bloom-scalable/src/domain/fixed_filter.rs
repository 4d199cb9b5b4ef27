//! Fixed-size Bloom filter
//!
//! INVARIANTS:
//! - No false negatives: once added, all `k` bits of an item stay set
//! - `set_count` equals the number of ones in the bit vector and never decreases

use std::hash::Hash;

use super::bit_vector::BitVector;
use super::hash_functions::HashIndexer;
use super::parameters::estimate_cardinality;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Bloom filter with a caller-chosen bit count `m` and hash count `k`.
#[derive(Clone, Debug)]
pub struct FixedFilter {
    /// Bit array storing the filter state
    bits: BitVector,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of ones in `bits`
    set_count: usize,
}

impl FixedFilter {
    /// Create an empty filter.
    ///
    /// # Arguments
    /// * `bit_count` - Size in bits, must be > 0 and below [`BitVector::MAX_LEN`]
    /// * `hash_count` - Number of hash functions, must be > 0
    pub fn new(bit_count: usize, hash_count: usize) -> Result<Self, FilterError> {
        if bit_count == 0 {
            return Err(FilterError::invalid("bit_count", 0.0, "> 0"));
        }
        if bit_count >= BitVector::MAX_LEN {
            return Err(FilterError::invalid(
                "bit_count",
                bit_count as f64,
                "below BitVector::MAX_LEN",
            ));
        }
        if hash_count == 0 {
            return Err(FilterError::invalid("hash_count", 0.0, "> 0"));
        }

        Ok(Self {
            bits: BitVector::new(bit_count),
            k: hash_count,
            m: bit_count,
            set_count: 0,
        })
    }

    /// Estimate the number of distinct items added.
    ///
    /// Formula: n ≈ -(m/k) * ln(1 - set_count/m)
    ///
    /// Returns `None` when every bit is set; the estimate is unbounded there
    /// and the filter should be treated as at or beyond capacity. Accuracy
    /// degrades as the filter approaches that point.
    pub fn approximate_cardinality(&self) -> Option<f64> {
        estimate_cardinality(self.m, self.k, self.set_count)
    }

    /// Probability that a never-added item currently tests positive,
    /// computed from the observed fill ratio as `fill^k`.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.k as i32)
    }

    /// Fraction of bits set, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.set_count as f64 / self.m as f64
    }

    /// Whether every bit is set.
    pub fn is_full(&self) -> bool {
        self.set_count == self.m
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.set_count
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }
}

impl MembershipFilter for FixedFilter {
    /// Set the `k` bits of `item`.
    ///
    /// Positions are computed before any bit is written, so a hashing
    /// failure leaves the filter untouched.
    fn add<T: Hash + ?Sized>(&mut self, item: &T) -> Result<(), FilterError> {
        let positions = HashIndexer::new(item).positions(self.k, self.m)?;
        for pos in positions {
            if self.bits.set(pos) {
                self.set_count += 1;
            }
        }
        Ok(())
    }

    /// Short-circuits on the first zero bit.
    fn query<T: Hash + ?Sized>(&self, item: &T) -> Result<bool, FilterError> {
        let indexer = HashIndexer::new(item);
        for seed in 0..self.k {
            let pos = indexer.position(seed as u32, self.m)?;
            if !self.bits.get(pos) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
