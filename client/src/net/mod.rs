//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway every page goes through, `transport` performs the
//! actual HTTP exchange, `error` classifies failures, and `types` defines the
//! JSON wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
