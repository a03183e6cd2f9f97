//! Length extension on SM3 digests.
//!
//! SM3 is a Merkle–Damgård construction: the digest of a message is the
//! chaining state after its last padded block. Anyone holding
//! `sm3(secret)` and `secret.len()` can therefore continue hashing and
//! obtain `sm3(secret || glue || suffix)` without ever seeing `secret`,
//! where `glue` is the padding SM3 appended to `secret`.
//!
//! This is why `sm3(key || message)` is not a MAC. The functions here make
//! the property explicit and testable.

use super::BLOCK_LEN;
use super::core::{Sm3Error, compress_blocks};
use super::padding::{padded_len, padding_for};
use crate::primitives::U256;

/// Result of extending a published digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    /// Digest of `original || forged_suffix`.
    pub digest: U256,

    /// Bytes to append to the original message: the original padding
    /// followed by the chosen suffix.
    pub forged_suffix: Vec<u8>,
}

/// Recovers the chaining state encoded by a digest.
pub fn state_from_digest(digest: &U256) -> [u32; 8] {
    digest.to_words()
}

/// Returns the padding SM3 appended to a message of `original_len` bytes.
pub fn glue_padding(original_len: usize) -> Result<Vec<u8>, Sm3Error> {
    padding_for(original_len)
}

/// Extends `digest`, the SM3 digest of an unknown message of
/// `original_len` bytes, with `suffix`.
///
/// # Returns
/// The digest of `original || glue_padding(original_len) || suffix` along
/// with the forged suffix `glue_padding(original_len) || suffix`.
///
/// # Errors
/// Propagates [`Sm3Error`] from padding the extended message.
pub fn extend(digest: &U256, original_len: usize, suffix: &[u8]) -> Result<Extension, Sm3Error> {
    let mut state = state_from_digest(digest);

    // The hidden prefix is already absorbed into the state; only the
    // suffix and the padding of the full forged message remain.
    let prefix_len = padded_len(original_len)?;
    let total_len = prefix_len
        .checked_add(suffix.len())
        .ok_or(Sm3Error::LengthOverflow)?;

    let mut tail = Vec::new();
    tail.try_reserve_exact(suffix.len())
        .map_err(|_| Sm3Error::AllocationFailed {
            requested: suffix.len(),
        })?;
    tail.extend_from_slice(suffix);
    tail.extend_from_slice(&padding_for(total_len)?);

    debug_assert_eq!(tail.len() % BLOCK_LEN, 0);
    compress_blocks(&tail, &mut state);

    let mut forged_suffix = glue_padding(original_len)?;
    forged_suffix.extend_from_slice(suffix);

    Ok(Extension {
        digest: U256::from(state),
        forged_suffix,
    })
}
