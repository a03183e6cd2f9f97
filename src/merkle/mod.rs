//! Merkle trees over SM3.
//!
//! This module builds binary hash trees using SM3 with the domain
//! separation of RFC 6962:
//!
//! - leaf hash: `SM3(0x00 || data)`
//! - node hash: `SM3(0x01 || left || right)`
//!
//! The prefixes ensure a leaf can never be reinterpreted as an interior
//! node. Levels are built bottom-up; when a level has an odd number of
//! nodes, the last node is paired with itself.
//!
//! - [`core`]
//!   Tree construction, lookups and proof generation.
//!
//! - [`proof`]
//!   Proof types and their stateless verification against a root.
//!
//! Exclusion proofs require the leaves to be ordered by leaf hash, which
//! is what [`MerkleTree::sorted`] produces.

pub mod core;
pub mod proof;

pub use self::core::{MerkleError, MerkleTree, hash_leaf, hash_node};
pub use self::proof::{
    ExclusionProof, InclusionProof, Neighbor, ProofStep, Side, verify_exclusion,
    verify_inclusion,
};
