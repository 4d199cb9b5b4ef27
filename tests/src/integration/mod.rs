//! # Integration Flows
//!
//! Exercise the public API the way a caller would: through the
//! `MembershipFilter` trait, config files and the metrics snapshot.
