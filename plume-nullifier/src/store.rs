//! Off-chain storage with Merkle accounting.
//!
//! A [`MerkleStore`] keeps application records next to a fixed-height
//! [`MerkleTree`] whose leaf at `key` is `hash(value.to_fields())`. The tree
//! root can be published or settled elsewhere, and any record can then be
//! proven against it with [`MerkleStore::get_witness`], without the full store.
//!
//! The record map and the tree are private, so every mutation goes through
//! [`MerkleStore::set`], which updates both.

use std::collections::BTreeMap;

use halo2::pasta::pallas;

use crate::{
    error::MerkleError,
    merkle_tree::{MerkleTree, MerkleWitness},
    primitives::poseidon,
    serialization::ToFields,
};

mod config;

pub use config::Config;

#[cfg(test)]
mod tests;

/// A map from `u64` keys to records, authenticated by a Merkle tree.
///
/// `Clone` is a deep copy: the clone's records and tree are independent of the
/// original.
///
/// The store has a single owner. Callers that share it between threads must
/// wrap it in a lock, so that [`MerkleStore::set`] runs as one critical
/// section.
#[derive(Clone, Debug)]
pub struct MerkleStore<V> {
    values: BTreeMap<u64, V>,
    tree: MerkleTree,
}

impl<V: ToFields> MerkleStore<V> {
    /// Create an empty store for keys in `[0, 2^(height-1))`.
    pub fn new(height: u32) -> Result<Self, MerkleError> {
        Ok(Self {
            values: BTreeMap::new(),
            tree: MerkleTree::new(height)?,
        })
    }

    /// Create an empty store from `config`.
    pub fn from_config(config: &Config) -> Result<Self, MerkleError> {
        Self::new(config.height)
    }

    /// The tree height this store was created with.
    pub fn height(&self) -> u32 {
        self.tree.height()
    }

    /// Store `value` under `key`, returning the value it replaced.
    ///
    /// Returns an error, and changes nothing, if `key` does not fit the tree.
    pub fn set(&mut self, key: u64, value: V) -> Result<Option<V>, MerkleError> {
        let leaf = leaf_hash(&value);

        self.tree.set_leaf(key, leaf)?;
        let previous = self.values.insert(key, value);

        tracing::debug!(
            key,
            replaced = previous.is_some(),
            root = ?self.tree.get_root(),
            "stored value in Merkle store",
        );

        Ok(previous)
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: u64) -> Option<&V> {
        self.values.get(&key)
    }

    /// Is there a value stored under `key`?
    pub fn contains_key(&self, key: u64) -> bool {
        self.values.contains_key(&key)
    }

    /// The authentication path for `key`, from leaf to root.
    ///
    /// Keys that were never set have a path too, for a zero leaf.
    pub fn get_witness(&self, key: u64) -> Result<MerkleWitness, MerkleError> {
        self.tree.get_witness(key)
    }

    /// The root committing to every stored value.
    pub fn get_root(&self) -> pallas::Base {
        self.tree.get_root()
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

/// The Merkle leaf a store commits to for `value`.
pub fn leaf_hash<V: ToFields>(value: &V) -> pallas::Base {
    poseidon::hash(&value.to_fields())
}
