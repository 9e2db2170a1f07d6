//! Networking modules for the webhook round-trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` holds the injected API base URL, `api` performs the webhook call
//! through a pluggable transport, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
