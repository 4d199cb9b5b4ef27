//! Ports Layer
//!
//! Defines the interface every filter variant exposes to callers.

pub mod inbound;

pub use inbound::MembershipFilter;
