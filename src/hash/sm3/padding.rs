//! SM3 message padding
//!
//! A message of `L` bytes is padded to `L' = L + 1 + Z + 8` bytes, where `Z`
//! is the smallest number of zero bytes making `L'` a multiple of
//! [`BLOCK_LEN`]. The padded message is laid out as:
//!
//! ```text
//! message (L bytes) | 0x80 | 0x00 * Z | bit length (u64, big-endian)
//! ```
//!
//! An empty message therefore pads to exactly one block.

use super::BLOCK_LEN;
use super::core::Sm3Error;

/// Bytes reserved at the end of the last block for the bit length.
const LENGTH_FIELD_LEN: usize = 8;

/// Returns the padded length for a message of `len` bytes.
///
/// # Errors
/// - [`Sm3Error::LengthOverflow`] if the padded length does not fit in
///   `usize`.
pub fn padded_len(len: usize) -> Result<usize, Sm3Error> {
    let min = len
        .checked_add(1 + LENGTH_FIELD_LEN)
        .ok_or(Sm3Error::LengthOverflow)?;

    min.checked_next_multiple_of(BLOCK_LEN)
        .ok_or(Sm3Error::LengthOverflow)
}

/// Returns the bytes appended after a message of `len` bytes.
///
/// This is the `0x80` marker, the zero fill and the big-endian bit length,
/// i.e. everything [`pad`] adds to the message.
///
/// # Errors
/// - [`Sm3Error::LengthOverflow`] if `len * 8` does not fit in 64 bits.
/// - [`Sm3Error::AllocationFailed`] if the tail cannot be allocated.
pub fn padding_for(len: usize) -> Result<Vec<u8>, Sm3Error> {
    let tail_len = padded_len(len)? - len;

    let mut tail = reserve(tail_len)?;
    write_tail(&mut tail, len, tail_len)?;

    Ok(tail)
}

/// Pads `input` into a new buffer whose length is a multiple of
/// [`BLOCK_LEN`].
///
/// The buffer is sized exactly once from [`padded_len`] and owned by the
/// caller. The input itself is never modified.
///
/// # Errors
/// - [`Sm3Error::LengthOverflow`] if the message length cannot be encoded.
/// - [`Sm3Error::AllocationFailed`] if the padded buffer cannot be
///   allocated.
pub fn pad(input: &[u8]) -> Result<Vec<u8>, Sm3Error> {
    let len = input.len();
    let total = padded_len(len)?;

    let mut padded = reserve(total)?;
    padded.extend_from_slice(input);
    write_tail(&mut padded, len, total - len)?;

    debug_assert_eq!(padded.len(), total);

    Ok(padded)
}

fn reserve(capacity: usize) -> Result<Vec<u8>, Sm3Error> {
    let mut buf = Vec::new();

    buf.try_reserve_exact(capacity)
        .map_err(|_| Sm3Error::AllocationFailed {
            requested: capacity,
        })?;

    Ok(buf)
}

/// Appends the padding tail for a message of `len` bytes to `out`.
fn write_tail(out: &mut Vec<u8>, len: usize, tail_len: usize) -> Result<(), Sm3Error> {
    let bit_len = u64::try_from(len)
        .ok()
        .and_then(|l| l.checked_mul(8))
        .ok_or(Sm3Error::LengthOverflow)?;

    let zeros = tail_len - 1 - LENGTH_FIELD_LEN;

    out.push(0x80);
    out.resize(out.len() + zeros, 0);
    out.extend_from_slice(&bit_len.to_be_bytes());

    Ok(())
}
