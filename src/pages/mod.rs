//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the identity its route guards resolved and delegates
//! rendering details to `components`.

pub(crate) mod credentials;
pub mod docs;
pub mod landing;
pub mod login;
pub mod pricing;
pub mod register;
pub mod user;
