//! Inclusion and exclusion proofs.
//!
//! Verification is stateless: a verifier needs only the proof, the leaf
//! data where relevant, and a trusted root hash.

use super::core::{MerkleError, hash_leaf, hash_node};
use crate::primitives::U256;

/// Position of the node being proven relative to its sibling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The proven node is the left child; the sibling is on the right.
    Left,
    /// The proven node is the right child; the sibling is on the left.
    Right,
}

/// One level of an audit path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProofStep {
    /// Hash of the sibling node at this level.
    pub sibling: U256,
    /// Side the proven node sits on.
    pub side: Side,
}

/// Audit path from a leaf to the root, ordered bottom-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionProof {
    /// Index of the proven leaf.
    pub index: usize,
    /// One step per level, leaf level first.
    pub steps: Vec<ProofStep>,
}

impl InclusionProof {
    /// Recomputes the root implied by this path for the given leaf hash.
    ///
    /// Returns `None` if a step's side disagrees with the leaf index.
    pub fn root_from(&self, leaf_hash: U256) -> Result<Option<U256>, MerkleError> {
        let mut current = leaf_hash;
        let mut idx = self.index;

        for step in &self.steps {
            let expected = if idx % 2 == 0 { Side::Left } else { Side::Right };

            if step.side != expected {
                return Ok(None);
            }

            current = match step.side {
                Side::Left => hash_node(&current, &step.sibling)?,
                Side::Right => hash_node(&step.sibling, &current)?,
            };

            idx /= 2;
        }

        // the path must reach the root level
        if idx != 0 {
            return Ok(None);
        }

        Ok(Some(current))
    }

    /// Whether this path proves the leaf is the last one in its tree.
    ///
    /// A rightmost node is either a right child or an unpaired left child,
    /// which the tree pairs with itself. So every `Side::Left` step must
    /// have the running hash as its sibling.
    pub fn is_rightmost(&self, leaf_hash: U256) -> Result<bool, MerkleError> {
        let mut current = leaf_hash;

        for step in &self.steps {
            current = match step.side {
                Side::Left => {
                    if step.sibling != current {
                        return Ok(false);
                    }
                    hash_node(&current, &step.sibling)?
                }
                Side::Right => hash_node(&step.sibling, &current)?,
            };
        }

        Ok(true)
    }
}

/// A leaf adjacent to an absent value in a hash-ordered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub data: Vec<u8>,
    pub hash: U256,
    pub proof: InclusionProof,
}

/// Evidence that a leaf hash is absent from a hash-ordered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionProof {
    /// Leaf hash of the absent data.
    pub target: U256,

    /// Index at which the target would be inserted.
    pub position: usize,

    /// Greatest leaf hash below the target, if any.
    pub left: Option<Neighbor>,

    /// Smallest leaf hash above the target, if any.
    pub right: Option<Neighbor>,
}

/// Verifies that `data` is included under `root` via `proof`.
pub fn verify_inclusion(
    data: &[u8],
    proof: &InclusionProof,
    root: &U256,
) -> Result<bool, MerkleError> {
    let leaf = hash_leaf(data)?;

    Ok(proof.root_from(leaf)? == Some(*root))
}

/// Verifies an exclusion proof against `root`.
///
/// The proof is accepted when every revealed neighbour is included under
/// `root`, the neighbours strictly bracket the target hash, and they are
/// adjacent. A lone neighbour must sit at the matching edge of the tree:
/// index 0 on the right, or a rightmost path on the left. Both are read
/// from the authenticated paths, never from prover-supplied counts.
///
/// Trees with repeated leaves are never hash-ordered (see
/// [`MerkleTree::sorted`](super::MerkleTree::sorted)), so a duplicated
/// node can only be an unpaired one.
pub fn verify_exclusion(proof: &ExclusionProof, root: &U256) -> Result<bool, MerkleError> {
    for neighbor in proof.left.iter().chain(proof.right.iter()) {
        if neighbor.proof.index != neighbor.index || hash_leaf(&neighbor.data)? != neighbor.hash {
            return Ok(false);
        }

        if !verify_inclusion(&neighbor.data, &neighbor.proof, root)? {
            return Ok(false);
        }
    }

    let ordered = match (&proof.left, &proof.right) {
        (None, None) => false,
        (Some(left), None) => {
            left.hash < proof.target && left.proof.is_rightmost(left.hash)?
        }
        (None, Some(right)) => proof.target < right.hash && right.index == 0,
        (Some(left), Some(right)) => {
            left.hash < proof.target
                && proof.target < right.hash
                && right.index == left.index + 1
        }
    };

    Ok(ordered)
}
