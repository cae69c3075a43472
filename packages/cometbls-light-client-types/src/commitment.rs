//! This module defines [`MerkleRoot`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::exported::Root;

/// Stand-in root value for the consensus state stored at an upgrade height, where the real
/// root is not known yet.
pub const SENTINEL_ROOT: &str = "sentinel_root";

/// The commitment root over the counterparty application state
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct MerkleRoot {
    /// The root hash
    #[serde(with = "cometbls_utils::serde::hex_bytes")]
    #[schemars(with = "String")]
    hash: Vec<u8>,
}

impl MerkleRoot {
    /// Creates a root from its raw bytes.
    #[must_use]
    pub fn new(hash: impl Into<Vec<u8>>) -> Self {
        Self { hash: hash.into() }
    }

    /// The placeholder root used at an upgrade height.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_ROOT.as_bytes())
    }

    /// Whether this is the upgrade placeholder root.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.hash == SENTINEL_ROOT.as_bytes()
    }

    /// Whether the root is the zero value: no bytes at all, or only zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hash.iter().all(|&b| b == 0)
    }

    /// The raw bytes of the root.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.hash
    }

    /// Consumes the root and returns its bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.hash
    }
}

impl Root for MerkleRoot {
    fn bytes(&self) -> &[u8] {
        self.as_bytes()
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl From<Vec<u8>> for MerkleRoot {
    fn from(hash: Vec<u8>) -> Self {
        Self::new(hash)
    }
}

impl From<[u8; 32]> for MerkleRoot {
    fn from(hash: [u8; 32]) -> Self {
        Self::new(hash)
    }
}
