//! Fixed test vectors shared by the workspace's tests.
//!
//! The vectors are raw encodings, so this crate does not depend on the crates
//! it tests. Field elements and scalars are 32-byte little-endian encodings.

use lazy_static::lazy_static;

/// Messages used by nullifier tests, as small field element values.
///
/// The first entry is the vote-slot identifier used throughout the
/// documentation examples.
pub const MESSAGES: [u64; 4] = [7, 0, 1, 0xdead_beef];

/// Height of the Merkle store used by the concrete store scenario.
pub const STORE_HEIGHT: u32 = 8;

lazy_static! {
    /// Encodings of secret keys. Each one is a canonical Pallas scalar.
    pub static ref PRIVATE_KEYS: Vec<[u8; 32]> = [
        "2a00000000000000000000000000000000000000000000000000000000000000",
        "0100000000000000000000000000000000000000000000000000000000000000",
        "efcdab8967452301efcdab8967452301efcdab8967452301efcdab8967452301",
    ]
    .iter()
    .map(|key| decode_32(key))
    .collect();

    /// The `s` and `c` encodings of a hand-crafted nullifier proof that must
    /// not verify.
    ///
    /// Both are canonical encodings, but they are unrelated to any prover
    /// transcript.
    pub static ref INVALID_PROOF_S_C: ([u8; 32], [u8; 32]) = (
        decode_32("0badc0de0badc0de0badc0de0badc0de0badc0de0badc0de0badc0de0badc01e"),
        decode_32("1337133713371337133713371337133713371337133713371337133713371317"),
    );
}

fn decode_32(encoded: &str) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(encoded, &mut bytes).expect("test vectors are valid hex");
    bytes
}
