//! Consensus state types for the `cometbls` IBC light client.
//!
//! A [`ConsensusState`] is the trusted snapshot of a counterparty chain at one height: the
//! block time, the commitment root over the application state and the hash of the validator
//! set expected to sign the next block. Header verification, misbehaviour handling and the
//! height-keyed store live outside of this crate and consume these types.
#![deny(missing_docs, clippy::nursery, clippy::pedantic, warnings)]

pub mod commitment;
pub mod consensus_state;
pub mod error;
#[cfg(feature = "ethabi")]
pub mod ethabi;
pub mod exported;
pub mod hash;
pub mod proto;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use commitment::{MerkleRoot, SENTINEL_ROOT};
pub use consensus_state::ConsensusState;
pub use error::{ConsensusStateError, ErrorKind};
pub use hash::{validate_hash, HashError, HASH_LENGTH};

/// The client type shared by every state of the cometbls light client family.
pub const CLIENT_TYPE: &str = "cometbls";
