//! Identity types shared across Storefront services.
//!
//! Provides the gateway-injected identity header extractors. OAuth and
//! session management live in the gateway; services only see these headers.

pub mod identity;
