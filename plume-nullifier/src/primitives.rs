//! External primitives used in nullifier and Merkle structures.
//!
//! This wires the Pallas curve and the Poseidon permutation into the narrow
//! interfaces the rest of the crate consumes: an algebraic hash, a hash into
//! the group, group field encodings, and the shifted scalar convention shared
//! by nullifier provers and verifiers.

pub mod point;
pub mod poseidon;
pub mod scalar;

pub use halo2::pasta::pallas;
