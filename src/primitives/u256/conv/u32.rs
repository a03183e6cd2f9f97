//! Conversions between `U256` and the eight-word hash state
//!
//! Words are ordered from most significant to least significant, and each
//! word is serialized big-endian. This matches how SM3 lays out its final
//! state as a digest.

use crate::primitives::U256;

/// Converts a `U256` into eight 32-bit words.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.to_words()
    }
}

/// Converts eight 32-bit words into a `U256`.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}
