//! # Bloom Scalable
//!
//! Probabilistic set membership with no false negatives and a bounded,
//! approximate false positive rate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `HashIndexer`: Seeded bit positions for any `T: Hash`
//!   - `FixedFilter`: Bit vector with caller-chosen `m` and `k`
//!   - `SizedFilter`: `m` and `k` derived from capacity and target FPR
//!   - `ScalableFilter`: Growing chain of sized filters
//!   - `ScalableConfig`: Configuration with validation and a builder
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: add/query surface shared by every filter
//!
//! - `metrics`: Point-in-time `MetricsSnapshot` for export
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(x)`, `query(x)` is always `true`
//! - **Monotonic**: bits are never cleared and filters are never removed
//! - **Bounded error**: per-filter rates in a scalable chain decay
//!   geometrically, so the chain's design rate stays below the target
//!
//! Filters are not synchronized. Wrap one in a lock to share it.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_scalable::{MembershipFilter, ScalableFilter, SizedFilter};
//!
//! let mut sized = SizedFilter::new(100.0, 0.1)?;
//! sized.add("hello")?;
//! assert!(sized.query("hello")?);
//!
//! let mut scalable = ScalableFilter::new(0.01)?;
//! for i in 0..1_000u32 {
//!     scalable.add(&i)?;
//! }
//! assert!(scalable.query(&42u32)?);
//! assert!(scalable.filter_count() > 1);
//! # Ok::<(), bloom_scalable::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use domain::{
    BitVector, FixedFilter, HashIndexer, ScalableConfig, ScalableConfigBuilder, ScalableFilter,
    SizedFilter,
};
pub use error::FilterError;
pub use metrics::MetricsSnapshot;
pub use ports::MembershipFilter;
