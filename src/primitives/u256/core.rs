//! 256-bit digest primitive
//!
//! This module defines the fixed-size 256-bit value (`U256`) returned by
//! SM3 and used as a node value by the Merkle tree.
//!
//! It is a **simple, explicit value type**, not an arithmetic type. The
//! internal representation is big-endian, which matches the SM3 output
//! layout, so the derived ordering agrees with the ordering of the
//! hexadecimal renderings.

/// Fixed-size 256-bit value.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Returns the underlying big-endian bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Splits the value into eight big-endian 32-bit words.
    ///
    /// For an SM3 digest this is exactly the final hash state.
    pub fn to_words(&self) -> [u32; 8] {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(self.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }

    /// Number of bits that differ between `self` and `other`.
    pub fn hamming_distance(&self, other: &U256) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}
