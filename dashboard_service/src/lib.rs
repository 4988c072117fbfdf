//! Dashboard service library following hexagonal architecture pattern
//!
//! Composes the independently-owned user, property, and tenant domains into
//! enriched read views, forwards lifecycle mutations to the tenancy
//! service, and relays lifecycle events to connected observers.

pub mod domain;
pub mod inbound;
pub mod outbound;
