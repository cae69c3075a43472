//! Builders for consensus states used in tests.

use crate::{commitment::MerkleRoot, consensus_state::ConsensusState, hash::HASH_LENGTH};

/// A non-empty 32 byte root.
#[must_use]
pub fn valid_root() -> MerkleRoot {
    MerkleRoot::new(vec![0x11; HASH_LENGTH])
}

/// A well formed next validators hash.
#[must_use]
pub fn valid_next_validators_hash() -> Vec<u8> {
    vec![0x22; HASH_LENGTH]
}

/// A consensus state that passes basic validation.
#[must_use]
pub fn valid_consensus_state(timestamp: u64) -> ConsensusState {
    ConsensusState::new(timestamp, valid_root(), valid_next_validators_hash())
}
