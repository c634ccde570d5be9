//! Reusable UI building blocks shared by pages.

pub mod api_key;
pub mod endpoint;
pub mod random_text;
pub mod top_bar;
