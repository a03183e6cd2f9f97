//! Primitive types
//!
//! This module defines the low-level value types used throughout the
//! crate.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit value carrying SM3 digests and Merkle
//!   node hashes

mod u256;

pub use u256::{ParseDigestError, U256};
