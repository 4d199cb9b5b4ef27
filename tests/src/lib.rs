//! # Bloom Scalable Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Logging setup and workload generators
//! └── integration/      # Cross-layer flows through the public API
//!     ├── membership.rs
//!     ├── growth.rs
//!     └── accuracy.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bloom-scalable-tests
//!
//! # With filter events visible
//! RUST_LOG=bloom_scalable=debug cargo test -p bloom-scalable-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p bloom-scalable-tests
//! ```

pub mod integration;
pub mod support;
