//! Hash algorithms exposed by the crate.
//!
//! Currently includes SM3 with a pure-Rust implementation.

pub mod sm3;

/// Re-export of the SM3 convenience functions.
pub use sm3::core::{Sm3Error, sm3, sm3_hex};
