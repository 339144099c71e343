//! Merkle maps from field elements to field elements.
//!
//! A Merkle map is a height [`MERKLE_MAP_HEIGHT`] [`MerkleTree`] with a leaf
//! for every Pallas base field element: the value for `key` is the leaf whose
//! index is `key`'s integer value. Unset keys map to zero.
//!
//! Nullifier sets are Merkle maps from [`Nullifier::key`] to `0` (unused) or
//! `1` (used).
//!
//! [`Nullifier::key`]: crate::Nullifier::key

use halo2::pasta::pallas;

use crate::merkle_tree::{MerkleTree, MerkleWitness, Position, MAX_HEIGHT};

/// The height of every Merkle map tree.
pub const MERKLE_MAP_HEIGHT: u32 = MAX_HEIGHT;

/// The authentication path for one Merkle map key.
///
/// [`MerkleWitness::compute_root_and_key`] returns the root implied by a value
/// at this path, and the key the path belongs to.
pub type MerkleMapWitness = MerkleWitness;

/// A Merkle map of Pallas base field elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleMap {
    tree: MerkleTree,
}

impl Default for MerkleMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MerkleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            tree: MerkleTree::with_max_height(),
        }
    }

    /// Set the value for `key`.
    pub fn set(&mut self, key: pallas::Base, value: pallas::Base) {
        // Every base field element is less than 2^255, so it fits the leaf level.
        self.tree.set_leaf_at(Position::from_base(&key), value);
    }

    /// The value for `key`, or zero if it was never set.
    pub fn get(&self, key: pallas::Base) -> pallas::Base {
        self.tree.get_leaf_at(Position::from_base(&key))
    }

    /// The root committing to every key and value.
    pub fn get_root(&self) -> pallas::Base {
        self.tree.get_root()
    }

    /// The authentication path for `key`.
    pub fn get_witness(&self, key: pallas::Base) -> MerkleMapWitness {
        self.tree.get_witness_at(Position::from_base(&key))
    }
}
