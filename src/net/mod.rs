//! Networking modules for the RlARndG HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST calls (auth, keys, random values) and `types` defines
//! the JSON schema they exchange.

pub mod api;
pub mod types;
