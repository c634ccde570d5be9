//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate auth and randomness concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod ticker;
