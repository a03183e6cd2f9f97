//! Conversions between `U256` and byte representations
//!
//! All conversions preserve the internal big-endian representation of
//! `U256`, which is also the byte order of an SM3 digest.

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `U256`.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Borrows the underlying byte slice of a `U256`.
impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Borrows the underlying 32-byte array of a `U256`.
impl AsRef<[u8; 32]> for U256 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}
