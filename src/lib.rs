//! SM3 hashing and SM3-based constructions
//!
//! This crate provides a pure-Rust implementation of the SM3 cryptographic
//! hash function (GB/T 32905-2016) together with a few constructions built
//! directly on top of it.
//!
//! The focus is on **clarity, predictability, and auditability**. The core
//! algorithm is dependency-free, explicit in its semantics, and safe to call
//! from any number of threads at once.
//!
//! # Module overview
//!
//! - `hash`
//!   The SM3 hash function: message padding, message expansion, the
//!   64-round compression function and the whole-message driver. The
//!   primary entry points are [`hash::sm3()`] (raw digest) and
//!   [`hash::sm3_hex()`] (64-character lowercase hexadecimal digest).
//!
//!   The `hash::sm3::extension` submodule exposes the Merkle–Damgård
//!   chaining state of a published digest, which makes the classic
//!   length-extension forgery reproducible and testable.
//!
//! - `primitives`
//!   The fixed-size `U256` value type used to carry digests, with
//!   conversions to and from bytes, state words and hexadecimal text.
//!
//! - `merkle`
//!   A Merkle tree using SM3 with RFC 6962 domain separation, providing
//!   inclusion proofs and, for hash-ordered trees, exclusion proofs.
//!
//! # Design goals
//!
//! - No global mutable state: round constants are evaluated at compile time
//! - Every buffer is owned by the invocation that created it
//! - Allocation failure and length overflow are reported, never ignored
//! - Minimal and explicit APIs
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries. In particular, no attempt is made at
//! constant-time execution.

pub mod hash;
pub mod merkle;
pub mod primitives;
