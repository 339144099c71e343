use serde::{Deserialize, Serialize};

/// Configuration for a [`MerkleStore`](super::MerkleStore).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The height of the store's Merkle tree.
    ///
    /// The store holds keys in `[0, 2^(height-1))`, and every authentication
    /// path has `height - 1` steps, so provers pay for each extra level.
    ///
    /// Set to `20` by default, about half a million keys.
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { height: 20 }
    }
}
