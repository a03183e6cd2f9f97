//! Conversion utilities
//!
//! This module groups explicit conversions between the fixed-size `U256`
//! value and the representations SM3 works with:
//! - `u8`: the 32-byte big-endian digest
//! - `u32`: the eight-word hash state
//!
//! All conversions are total and preserve the big-endian layout.

mod u32;
mod u8;
