//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Hash position derivation
//! - Bit vector storage
//! - Parameter calculations
//! - Fixed, sized and scalable filters
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bit_vector;
pub mod config;
pub mod fixed_filter;
pub mod hash_functions;
pub mod parameters;
pub mod scalable_filter;
pub mod sized_filter;

pub use bit_vector::BitVector;
pub use config::{ScalableConfig, ScalableConfigBuilder};
pub use fixed_filter::FixedFilter;
pub use hash_functions::{compute_hash_positions, HashIndexer};
pub use parameters::{
    calculate_fpr, estimate_cardinality, optimal_bit_count, optimal_hash_count,
};
pub use scalable_filter::ScalableFilter;
pub use sized_filter::SizedFilter;
