//! Errors that can occur inside any `plume-nullifier` submodule.

use thiserror::Error;

use crate::serialization::SerializationError;

/// An error type pertaining to nullifier verification and usage checks.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum NullifierError {
    /// The recomputed Fiat-Shamir challenge differs from the proof's `c`.
    ///
    /// The proof is invalid, or one of its inputs was tampered with.
    #[error("Nullifier does not match private input!")]
    Mismatch,

    /// Hashing the message and public key landed on the identity point.
    #[error("hash to group produced the identity point")]
    HashToGroupIdentity,

    /// Errors of type `KeyError`.
    #[error("invalid nullifier public key")]
    InvalidPublicKey(#[from] KeyError),

    /// Errors of type `SerializationError`, for group elements that are not
    /// on the curve.
    #[error("invalid group element: {0}")]
    InvalidPoint(#[from] SerializationError),

    /// A Merkle map witness authenticates a different slot than this
    /// nullifier's key.
    #[error("witness key does not match the nullifier key")]
    WitnessKeyMismatch,

    /// The root implied by the witness differs from the expected root.
    ///
    /// Either the nullifier was already used, or the witness is stale.
    #[error("nullifier is already used, or the witness is stale")]
    RootMismatch,
}

/// An error type pertaining to key parsing and decompression.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyError {
    /// The bytes are not a canonical Pallas scalar.
    #[error("malformed private key encoding")]
    MalformedPrivateKey,

    /// The compressed encoding is not on the curve, or is the identity.
    #[error("malformed public key encoding")]
    MalformedPublicKey,
}

/// An error type pertaining to fixed-height Merkle trees.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MerkleError {
    /// The requested height is outside `1..=MAX_HEIGHT`.
    #[error("invalid Merkle tree height {0}")]
    InvalidHeight(u32),

    /// The leaf index does not fit a tree of this height.
    #[error("index {index} is out of range for a Merkle tree of height {height}")]
    IndexOutOfRange {
        /// The rejected leaf index.
        index: u64,
        /// The tree height.
        height: u32,
    },

    /// The level is not a level of this tree.
    #[error("level {level} does not exist in a Merkle tree of height {height}")]
    LevelOutOfRange {
        /// The rejected level.
        level: u32,
        /// The tree height.
        height: u32,
    },
}
