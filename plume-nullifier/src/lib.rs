//! PLUME nullifiers on the Pallas curve, and Poseidon Merkle accounting.
//!
//! A [`Nullifier`] is a deterministic pseudorandom tag of a `(message, secret key)`
//! pair, together with a non-interactive discrete-log equality proof that binds
//! the tag to the message and the claimant's [`PublicKey`]. Applications record
//! spent nullifiers in a [`MerkleMap`] keyed by [`Nullifier::key`], so that
//! "not used yet" can be checked against a single root.
//!
//! [`MerkleStore`] keeps arbitrary field-encodable records in a fixed-height
//! [`MerkleTree`], for off-chain storage whose root is committed elsewhere.
//!
//! <https://eprint.iacr.org/2022/1255.pdf>

#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde;

pub mod error;
pub mod keys;
pub mod merkle_map;
pub mod merkle_tree;
pub mod nullifier;
pub mod primitives;
pub mod serialization;
pub mod store;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod arbitrary;

pub use error::{KeyError, MerkleError, NullifierError};
pub use keys::{PrivateKey, PublicKey};
pub use merkle_map::{MerkleMap, MerkleMapWitness};
pub use merkle_tree::{MerkleTree, MerkleWitness, WitnessStep};
pub use nullifier::Nullifier;
pub use serialization::{SerializationError, ToFields};
pub use store::MerkleStore;
