//! SM3 cryptographic hash function (GB/T 32905-2016).
//!
//! SM3 is a Merkle–Damgård hash producing a 256-bit digest. Each 512-bit
//! block is expanded into 68 + 64 message words which drive a 64-round
//! compression function over an eight-word state.
//!
//! - [`core`]
//!   Whole-message hashing and the single-block compression step.
//!
//! - [`padding`]
//!   Message padding to a multiple of the block size.
//!
//! - [`extension`]
//!   Resumption from a published digest (length extension).
//!
//! - `computations`
//!   Message expansion, the boolean and permutation functions, and the
//!   round loop. Kept private; every use goes through `core`.

pub(crate) mod computations;
pub mod core;
pub mod extension;
pub mod padding;

/// Size of one message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Initial hash state (IV).
pub const SM3_INIT: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D, 0xB0FB0E4E,
];

/// Base constant for rounds 0..16.
pub const T1: u32 = 0x79CC4519;

/// Base constant for rounds 16..64.
pub const T2: u32 = 0x7A879D8A;

/// Per-round additive constants, `T[j] = rotl(T1 or T2, j)`.
///
/// Evaluated at compile time, so the table is immutable and shared by
/// every caller without synchronization.
pub const ROUND_CONSTANTS: [u32; 64] = build_round_constants();

const fn build_round_constants() -> [u32; 64] {
    let mut t = [0u32; 64];
    let mut j = 0;

    while j < 64 {
        let base = if j < 16 { T1 } else { T2 };
        t[j] = base.rotate_left(j as u32);
        j += 1;
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_constants_rotate_base() {
        assert_eq!(ROUND_CONSTANTS[0], T1);
        assert_eq!(ROUND_CONSTANTS[1], 0xF3988A32);
        assert_eq!(ROUND_CONSTANTS[16], 0x9D8A7A87);
        // rotation amount wraps at 32
        assert_eq!(ROUND_CONSTANTS[32], T2);
        assert_eq!(ROUND_CONSTANTS[63], T2.rotate_left(31));
    }
}
