//! Ambient plumbing shared by Storefront services.
//!
//! Health endpoints, serde helpers, tracing setup, request-id middleware,
//! and the env-backed config trait.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
