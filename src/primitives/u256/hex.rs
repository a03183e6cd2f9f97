//! Hexadecimal rendering and parsing for `U256`.
//!
//! Digests are rendered as 64 lowercase hexadecimal characters, most
//! significant nibble first. Parsing accepts either case.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::U256;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Errors returned when parsing a `U256` from hexadecimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigestError {
    /// The input is not exactly 64 characters long.
    InvalidLength(usize),

    /// A character at the given byte offset is not a hexadecimal digit.
    InvalidCharacter(usize),
}

impl Display for ParseDigestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseDigestError::InvalidLength(len) => {
                write!(f, "expected 64 hexadecimal characters, got {len}")
            }
            ParseDigestError::InvalidCharacter(at) => {
                write!(f, "invalid hexadecimal character at offset {at}")
            }
        }
    }
}

impl std::error::Error for ParseDigestError {}

impl U256 {
    /// Renders the value as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(64);

        for &byte in self.0.iter() {
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }

        out
    }
}

impl Display for U256 {
    /// Formats the value as 64 contiguous lowercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl FromStr for U256 {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();

        if bytes.len() != 64 {
            return Err(ParseDigestError::InvalidLength(bytes.len()));
        }

        let mut out = [0u8; 32];

        for (i, slot) in out.iter_mut().enumerate() {
            let hi = nibble(bytes[2 * i]).ok_or(ParseDigestError::InvalidCharacter(2 * i))?;
            let lo =
                nibble(bytes[2 * i + 1]).ok_or(ParseDigestError::InvalidCharacter(2 * i + 1))?;

            *slot = (hi << 4) | lo;
        }

        Ok(U256(out))
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
