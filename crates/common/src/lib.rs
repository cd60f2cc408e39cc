//! Shared helpers for the marketplace crates: logging setup, startup
//! directory checks and small wire types.

pub mod env;
pub mod types;
pub mod utils;
