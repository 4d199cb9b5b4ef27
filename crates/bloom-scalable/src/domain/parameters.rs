//! Bloom filter parameter calculation
//!
//! Formulas (classical optimum of ~50% bit occupancy at full capacity):
//! - m = ceil(-n * ln(fpr) / (ln 2)^2)  -- bits
//! - k = floor(-log2(fpr))              -- hash functions
//! - fpr(n) = (1 - e^(-kn/m))^k         -- expected rate after n items
//! - n_est = -(m/k) * ln(1 - x/m)       -- items, from x set bits
//!
//! These are approximations, not bounds.

use std::f64::consts::LN_2;

use super::bit_vector::BitVector;

/// Minimum number of bits for `capacity` items at `target_fpr`.
///
/// Returns `None` when the result is not finite or reaches
/// [`BitVector::MAX_LEN`].
pub fn optimal_bit_count(capacity: f64, target_fpr: f64) -> Option<usize> {
    let ln2_squared = LN_2 * LN_2;
    let m = (-capacity * target_fpr.ln() / ln2_squared).ceil().max(1.0);
    if !m.is_finite() || m >= BitVector::MAX_LEN as f64 {
        return None;
    }
    Some(m as usize)
}

/// Number of hash functions for `target_fpr`.
///
/// Rates above 0.5 would give zero; the result is clamped to at least one.
pub fn optimal_hash_count(target_fpr: f64) -> usize {
    let k = (-target_fpr.log2()).floor() as usize;
    k.max(1)
}

/// Expected false positive rate after `n` insertions.
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Estimate how many distinct items produced `set_count` ones.
///
/// Returns `None` once every bit is set: the estimator diverges there and
/// the filter should be treated as fully saturated.
pub fn estimate_cardinality(m: usize, k: usize, set_count: usize) -> Option<f64> {
    if set_count >= m {
        return None;
    }
    let m = m as f64;
    let fill = set_count as f64 / m;
    Some(-(m / k as f64) * (1.0 - fill).ln())
}
