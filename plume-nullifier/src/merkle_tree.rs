//! Fixed-height Poseidon Merkle trees.
//!
//! A tree of height `h` has `2^(h-1)` leaves at level 0 and a single root at
//! level `h - 1`. Unset leaves are zero, and every internal node is
//! `hash([left, right])`. Only nodes on touched paths are stored; the rest are
//! the precomputed roots of empty subtrees.

use std::collections::HashMap;

use ff::{Field, PrimeField};
use halo2::pasta::pallas;
use lazy_static::lazy_static;

use crate::{
    error::MerkleError,
    primitives::poseidon,
    serialization::serde_helpers,
};

/// The largest supported tree height.
///
/// A height 256 tree has a leaf for every Pallas base field element.
pub const MAX_HEIGHT: u32 = 256;

lazy_static! {
    /// List of "empty" nodes, one for each level.
    ///
    /// The list is indexed by the level number (0: leaf; MAX_HEIGHT - 1: root
    /// of the largest tree).
    static ref EMPTY_ROOTS: Vec<pallas::Base> = {
        let mut v = vec![pallas::Base::ZERO];

        for _ in 1..MAX_HEIGHT {
            let below = v[v.len() - 1];
            v.push(poseidon::hash(&[below, below]));
        }

        v
    };
}

/// Combine two sibling nodes into their parent.
pub fn hash_node(left: pallas::Base, right: pallas::Base) -> pallas::Base {
    poseidon::hash(&[left, right])
}

/// The position of a node within its level, for levels up to 256 bits wide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Position([u64; 4]);

impl Position {
    /// The position of a base field element used as a leaf index.
    pub(crate) fn from_base(key: &pallas::Base) -> Self {
        let repr = key.to_repr();
        let mut limbs = [0u64; 4];

        for (limb, bytes) in limbs.iter_mut().zip(repr.chunks_exact(8)) {
            let mut le_bytes = [0u8; 8];
            le_bytes.copy_from_slice(bytes);
            *limb = u64::from_le_bytes(le_bytes);
        }

        Self(limbs)
    }

    fn is_left(&self) -> bool {
        self.0[0] & 1 == 0
    }

    fn sibling(&self) -> Self {
        let mut limbs = self.0;
        limbs[0] ^= 1;
        Self(limbs)
    }

    fn parent(&self) -> Self {
        let mut limbs = [0u64; 4];

        for i in 0..4 {
            let carry = self.0.get(i + 1).map_or(0, |next| next << 63);
            limbs[i] = (self.0[i] >> 1) | carry;
        }

        Self(limbs)
    }

    /// Does this position fit in a level that is `bits` bits wide?
    fn fits(&self, bits: u32) -> bool {
        (0..4).all(|i| {
            let limb_start = 64 * i as u32;

            if bits <= limb_start {
                self.0[i] == 0
            } else if bits - limb_start >= 64 {
                true
            } else {
                self.0[i] >> (bits - limb_start) == 0
            }
        })
    }
}

impl From<u64> for Position {
    fn from(index: u64) -> Self {
        Self([index, 0, 0, 0])
    }
}

/// One step of an authentication path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessStep {
    /// Whether the node on the path is the left child at this level.
    pub is_left: bool,
    /// The other child at this level.
    #[serde(with = "serde_helpers::Base")]
    pub sibling: pallas::Base,
}

/// An authentication path from a leaf to the root, ordered leaf first.
///
/// A witness for a tree of height `h` has `h - 1` steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MerkleWitness {
    path: Vec<WitnessStep>,
}

impl MerkleWitness {
    /// Create a witness from its steps, leaf first.
    pub fn new(path: Vec<WitnessStep>) -> Self {
        Self { path }
    }

    /// The steps of this path, leaf first.
    pub fn steps(&self) -> &[WitnessStep] {
        &self.path
    }

    /// The number of steps.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Is this a witness for a single-node tree?
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The height of the tree this witness belongs to.
    pub fn height(&self) -> usize {
        self.path.len() + 1
    }

    /// The root a tree would have if `leaf` was at this path's position.
    pub fn calculate_root(&self, leaf: pallas::Base) -> pallas::Base {
        self.path.iter().fold(leaf, |node, step| {
            if step.is_left {
                hash_node(node, step.sibling)
            } else {
                hash_node(step.sibling, node)
            }
        })
    }

    /// The leaf index this path authenticates, if it fits in a `u64`.
    ///
    /// Returns `None` for indexes of `2^64` or more, which only occur in
    /// trees taller than 65. Use [`MerkleWitness::compute_root_and_key`] for
    /// those, including every Merkle map.
    pub fn calculate_index(&self) -> Option<u64> {
        self.path
            .iter()
            .enumerate()
            .filter(|(_, step)| !step.is_left)
            .try_fold(0u64, |index, (level, _)| {
                let bit = 1u64.checked_shl(u32::try_from(level).ok()?)?;
                Some(index | bit)
            })
    }

    /// The implied root for `leaf`, and the leaf index as a field element.
    ///
    /// The index is accumulated in the base field, so it is exact for every
    /// tree height, including Merkle maps.
    pub fn compute_root_and_key(&self, leaf: pallas::Base) -> (pallas::Base, pallas::Base) {
        let mut key = pallas::Base::ZERO;
        let mut bit_value = pallas::Base::ONE;

        for step in &self.path {
            if !step.is_left {
                key += bit_value;
            }
            bit_value = bit_value.double();
        }

        (self.calculate_root(leaf), key)
    }
}

/// A fixed-height sparse Merkle tree of Pallas base field elements.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    height: u32,
    /// Stored nodes, indexed by level, then by position.
    nodes: Vec<HashMap<Position, pallas::Base>>,
}

impl MerkleTree {
    /// Create an empty tree with `2^(height-1)` leaves.
    pub fn new(height: u32) -> Result<Self, MerkleError> {
        if !(1..=MAX_HEIGHT).contains(&height) {
            return Err(MerkleError::InvalidHeight(height));
        }

        Ok(Self {
            height,
            nodes: vec![HashMap::new(); height as usize],
        })
    }

    /// Create an empty tree of [`MAX_HEIGHT`], with a leaf for every base
    /// field element.
    pub(crate) fn with_max_height() -> Self {
        Self {
            height: MAX_HEIGHT,
            nodes: vec![HashMap::new(); MAX_HEIGHT as usize],
        }
    }

    /// The number of levels, including the leaves and the root.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of leaves, if it fits in a `u64`.
    pub fn leaf_count(&self) -> Option<u64> {
        1u64.checked_shl(self.height - 1)
    }

    /// The root of the tree.
    pub fn get_root(&self) -> pallas::Base {
        self.node(self.height - 1, Position::default())
    }

    /// The node at `index` within `level`, counting levels from the leaves.
    pub fn get_node(&self, level: u32, index: u64) -> Result<pallas::Base, MerkleError> {
        if level >= self.height {
            return Err(MerkleError::LevelOutOfRange {
                level,
                height: self.height,
            });
        }

        let position = Position::from(index);
        if !position.fits(self.height - 1 - level) {
            return Err(MerkleError::IndexOutOfRange {
                index,
                height: self.height,
            });
        }

        Ok(self.node(level, position))
    }

    /// The leaf at `index`.
    pub fn get_leaf(&self, index: u64) -> Result<pallas::Base, MerkleError> {
        self.get_node(0, index)
    }

    /// Set the leaf at `index`, updating every node on its path.
    pub fn set_leaf(&mut self, index: u64, leaf: pallas::Base) -> Result<(), MerkleError> {
        let position = self.leaf_position(index)?;
        self.set_leaf_at(position, leaf);

        Ok(())
    }

    /// The authentication path for the leaf at `index`.
    pub fn get_witness(&self, index: u64) -> Result<MerkleWitness, MerkleError> {
        let position = self.leaf_position(index)?;

        Ok(self.get_witness_at(position))
    }

    /// Check the authentication path of the leaf at `index` against the root.
    pub fn validate(&self, index: u64) -> Result<bool, MerkleError> {
        let witness = self.get_witness(index)?;
        let leaf = self.get_leaf(index)?;

        Ok(witness.calculate_root(leaf) == self.get_root())
    }

    /// Set the first leaves of the tree, in order.
    ///
    /// Stops at the first leaf that does not fit, leaving earlier leaves set.
    pub fn fill<I>(&mut self, leaves: I) -> Result<(), MerkleError>
    where
        I: IntoIterator<Item = pallas::Base>,
    {
        for (index, leaf) in (0u64..).zip(leaves) {
            self.set_leaf(index, leaf)?;
        }

        Ok(())
    }

    fn leaf_position(&self, index: u64) -> Result<Position, MerkleError> {
        let position = Position::from(index);

        if position.fits(self.height - 1) {
            Ok(position)
        } else {
            Err(MerkleError::IndexOutOfRange {
                index,
                height: self.height,
            })
        }
    }

    fn node(&self, level: u32, position: Position) -> pallas::Base {
        self.nodes[level as usize]
            .get(&position)
            .copied()
            .unwrap_or(EMPTY_ROOTS[level as usize])
    }

    /// Set a leaf whose position has already been range checked.
    pub(crate) fn set_leaf_at(&mut self, mut position: Position, leaf: pallas::Base) {
        let mut current = leaf;
        self.nodes[0].insert(position, current);

        for level in 1..self.height {
            let sibling = self.node(level - 1, position.sibling());

            current = if position.is_left() {
                hash_node(current, sibling)
            } else {
                hash_node(sibling, current)
            };
            position = position.parent();

            self.nodes[level as usize].insert(position, current);
        }
    }

    /// The leaf at a position that has already been range checked.
    pub(crate) fn get_leaf_at(&self, position: Position) -> pallas::Base {
        self.node(0, position)
    }

    /// The authentication path for a position that has already been range
    /// checked.
    pub(crate) fn get_witness_at(&self, mut position: Position) -> MerkleWitness {
        let mut path = Vec::with_capacity(self.height as usize - 1);

        for level in 0..self.height - 1 {
            path.push(WitnessStep {
                is_left: position.is_left(),
                sibling: self.node(level, position.sibling()),
            });
            position = position.parent();
        }

        MerkleWitness::new(path)
    }
}

impl Eq for MerkleTree {}

impl PartialEq for MerkleTree {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height && self.get_root() == other.get_root()
    }
}

#[cfg(test)]
mod tests;
