//! SM3 core hashing functions
//!
//! This module implements the block driver of the SM3 cryptographic hash
//! function as defined in GB/T 32905-2016.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SM3 hashing function for arbitrary-length input
//! - hexadecimal rendering of the final digest
//!
//! Each call owns its state, its padded buffer and its per-block message
//! schedule, so independent calls may run concurrently.

use std::fmt::{self, Display, Formatter};

use super::computations::{all_rounds, expand};
use super::padding::pad;
use super::{BLOCK_LEN, SM3_INIT};
use crate::primitives::U256;

/// Errors that may occur while hashing.
///
/// No input is rejected because of its content; the only failures are
/// lengths that cannot be represented and allocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sm3Error {
    /// The padded buffer could not be allocated.
    AllocationFailed {
        /// Number of bytes that were requested.
        requested: usize,
    },

    /// The message length, in bits or once padded, does not fit the
    /// 64-bit length field or the address space.
    LengthOverflow,
}

impl Display for Sm3Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Sm3Error::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} bytes for padded message")
            }
            Sm3Error::LengthOverflow => f.write_str("message length is not representable"),
        }
    }
}

impl std::error::Error for Sm3Error {}

/// Compresses a single 512-bit message block.
///
/// This function performs the SM3 compression step on a single 64-byte
/// block, updating the hash state in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SM3.
/// - The state is combined with the round output by XOR, not addition.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let schedule = expand(block);
    all_rounds(state, &schedule);
}

/// Compresses every block of `data` into `state`, in order.
///
/// `data` must already be padded; trailing bytes that do not form a full
/// block are ignored.
pub(crate) fn compress_blocks(data: &[u8], state: &mut [u32; 8]) {
    debug_assert_eq!(data.len() % BLOCK_LEN, 0);

    for block in data.chunks_exact(BLOCK_LEN) {
        if let Ok(block) = <&[u8; BLOCK_LEN]>::try_from(block) {
            compress(block, state);
        }
    }
}

/// Computes the SM3 digest of the given input.
///
/// The message is padded once into a buffer owned by this call, then
/// processed block by block starting from the standard IV.
///
/// # Errors
/// - [`Sm3Error::AllocationFailed`] if the padded buffer cannot be
///   allocated.
/// - [`Sm3Error::LengthOverflow`] if the message length cannot be encoded.
pub fn sm3(input: &[u8]) -> Result<U256, Sm3Error> {
    let padded = pad(input)?;

    let mut state = SM3_INIT;
    compress_blocks(&padded, &mut state);

    Ok(U256::from(state))
}

/// Computes the SM3 digest of the given input as lowercase hexadecimal.
///
/// The returned string is always exactly 64 characters long.
pub fn sm3_hex(input: &[u8]) -> Result<String, Sm3Error> {
    Ok(sm3(input)?.to_hex())
}
