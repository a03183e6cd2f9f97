//! Merkle tree construction and proof generation.

use std::fmt::{self, Display, Formatter};

use super::proof::{ExclusionProof, InclusionProof, Neighbor, ProofStep, Side};
use crate::hash::{Sm3Error, sm3};
use crate::primitives::U256;

/// Domain separation prefix for leaf hashes.
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain separation prefix for interior node hashes.
pub const NODE_PREFIX: u8 = 0x01;

/// Errors that may occur while building or querying a Merkle tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// A tree needs at least one leaf.
    Empty,

    /// The requested leaf index does not exist.
    IndexOutOfRange { index: usize, len: usize },

    /// Exclusion proofs require a tree ordered by leaf hash.
    Unsorted,

    /// The leaf is present, so it cannot be proven absent.
    LeafPresent { index: usize },

    /// Hashing failed.
    Hash(Sm3Error),
}

impl Display for MerkleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::Empty => f.write_str("merkle tree has no leaves"),
            MerkleError::IndexOutOfRange { index, len } => {
                write!(f, "leaf index {index} out of range for {len} leaves")
            }
            MerkleError::Unsorted => f.write_str("tree leaves are not ordered by hash"),
            MerkleError::LeafPresent { index } => write!(f, "leaf is present at index {index}"),
            MerkleError::Hash(err) => write!(f, "hashing failed: {err}"),
        }
    }
}

impl std::error::Error for MerkleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MerkleError::Hash(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Sm3Error> for MerkleError {
    fn from(err: Sm3Error) -> Self {
        MerkleError::Hash(err)
    }
}

/// Hashes leaf data: `SM3(0x00 || data)`.
pub fn hash_leaf(data: &[u8]) -> Result<U256, MerkleError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(data.len() + 1)
        .map_err(|_| Sm3Error::AllocationFailed {
            requested: data.len() + 1,
        })?;

    buf.push(LEAF_PREFIX);
    buf.extend_from_slice(data);

    Ok(sm3(&buf)?)
}

/// Hashes two child nodes: `SM3(0x01 || left || right)`.
pub fn hash_node(left: &U256, right: &U256) -> Result<U256, MerkleError> {
    let mut buf = [0u8; 65];

    buf[0] = NODE_PREFIX;
    buf[1..33].copy_from_slice(&left.to_bytes());
    buf[33..].copy_from_slice(&right.to_bytes());

    Ok(sm3(&buf)?)
}

/// A fully materialized Merkle tree.
///
/// `levels[0]` holds the leaf hashes and the last level holds the root.
/// The original leaf data is kept so exclusion proofs can reveal the
/// neighbouring leaves.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    leaves: Vec<Vec<u8>>,
    levels: Vec<Vec<U256>>,
    sorted: bool,
}

impl MerkleTree {
    /// Builds a tree over `leaves`, keeping their order.
    ///
    /// # Errors
    /// - [`MerkleError::Empty`] if no leaves are given.
    pub fn new<I, L>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let leaves: Vec<Vec<u8>> = leaves.into_iter().map(Into::into).collect();
        let hashes = leaves
            .iter()
            .map(|leaf| hash_leaf(leaf))
            .collect::<Result<Vec<_>, _>>()?;

        let sorted = hashes.windows(2).all(|w| w[0] < w[1]);

        Self::build(leaves, hashes, sorted)
    }

    /// Builds a tree over `leaves` ordered by leaf hash.
    ///
    /// Repeated leaves are kept once. Only trees built this way (or whose
    /// input happened to be strictly ordered) can produce exclusion proofs.
    pub fn sorted<I, L>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut pairs = leaves
            .into_iter()
            .map(|leaf| {
                let leaf: Vec<u8> = leaf.into();
                hash_leaf(&leaf).map(|hash| (hash, leaf))
            })
            .collect::<Result<Vec<_>, _>>()?;

        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        // repeated leaves would make an unpaired node indistinguishable
        // from a paired one in exclusion proofs
        pairs.dedup_by(|a, b| a.0 == b.0);

        let (hashes, leaves): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();

        Self::build(leaves, hashes, true)
    }

    fn build(
        leaves: Vec<Vec<u8>>,
        hashes: Vec<U256>,
        sorted: bool,
    ) -> Result<Self, MerkleError> {
        if hashes.is_empty() {
            return Err(MerkleError::Empty);
        }

        let mut levels = vec![hashes];

        loop {
            let current = match levels.last() {
                Some(level) if level.len() > 1 => level,
                _ => break,
            };

            let next = current
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    hash_node(left, right)
                })
                .collect::<Result<Vec<_>, _>>()?;

            levels.push(next);
        }

        Ok(Self {
            leaves,
            levels,
            sorted,
        })
    }

    /// Root hash of the tree.
    pub fn root(&self) -> U256 {
        // build() guarantees a non-empty top level
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether the tree has no leaves; construction rejects empty input,
    /// so a built tree returns `false`.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Number of levels, including the leaf level and the root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether leaves are ordered by leaf hash.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Leaf data at `index`.
    pub fn leaf(&self, index: usize) -> Option<&[u8]> {
        self.leaves.get(index).map(Vec::as_slice)
    }

    /// Leaf hash at `index`.
    pub fn leaf_hash(&self, index: usize) -> Option<U256> {
        self.levels[0].get(index).copied()
    }

    /// Finds the index of the first leaf whose data is `data`.
    pub fn leaf_index(&self, data: &[u8]) -> Result<Option<usize>, MerkleError> {
        let target = hash_leaf(data)?;
        let hashes = &self.levels[0];

        if self.sorted {
            let pos = hashes.partition_point(|h| *h < target);
            return Ok((pos < hashes.len() && hashes[pos] == target).then_some(pos));
        }

        Ok(hashes.iter().position(|h| *h == target))
    }

    /// Produces the audit path for the leaf at `index`.
    ///
    /// # Errors
    /// - [`MerkleError::IndexOutOfRange`] if the leaf does not exist.
    pub fn inclusion_proof(&self, index: usize) -> Result<InclusionProof, MerkleError> {
        if index >= self.len() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let mut steps = Vec::with_capacity(self.depth() - 1);
        let mut idx = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let (sibling, side) = if idx % 2 == 0 {
                // unpaired trailing node is its own sibling
                let sibling = if idx + 1 < level.len() { idx + 1 } else { idx };
                (sibling, Side::Left)
            } else {
                (idx - 1, Side::Right)
            };

            steps.push(ProofStep {
                sibling: level[sibling],
                side,
            });

            idx /= 2;
        }

        Ok(InclusionProof { index, steps })
    }

    /// Proves that `data` is not a leaf of this tree.
    ///
    /// The proof reveals the two leaves whose hashes surround the hash of
    /// `data`, together with their inclusion proofs. At the edges of the
    /// tree only one neighbour exists.
    ///
    /// # Errors
    /// - [`MerkleError::Unsorted`] if leaves are not ordered by hash.
    /// - [`MerkleError::LeafPresent`] if `data` is a leaf.
    pub fn exclusion_proof(&self, data: &[u8]) -> Result<ExclusionProof, MerkleError> {
        if !self.sorted {
            return Err(MerkleError::Unsorted);
        }

        let target = hash_leaf(data)?;
        let hashes = &self.levels[0];
        let position = hashes.partition_point(|h| *h < target);

        if position < hashes.len() && hashes[position] == target {
            return Err(MerkleError::LeafPresent { index: position });
        }

        let left = match position.checked_sub(1) {
            Some(index) => Some(self.neighbor(index)?),
            None => None,
        };

        let right = if position < hashes.len() {
            Some(self.neighbor(position)?)
        } else {
            None
        };

        Ok(ExclusionProof {
            target,
            position,
            left,
            right,
        })
    }

    fn neighbor(&self, index: usize) -> Result<Neighbor, MerkleError> {
        Ok(Neighbor {
            index,
            data: self.leaves[index].clone(),
            hash: self.levels[0][index],
            proof: self.inclusion_proof(index)?,
        })
    }
}
