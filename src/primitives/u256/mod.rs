//! 256-bit digest value.
//!
//! - `core`: the `U256` type itself.
//! - `conv`: conversions to and from bytes and 32-bit state words.
//! - `hex`: lowercase hexadecimal rendering and parsing.

mod conv;
mod core;
mod hex;

pub use self::core::U256;
pub use self::hex::ParseDigestError;
