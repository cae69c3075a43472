//! Ethereum ABI layout of [`ConsensusState`], as stored by Solidity light clients.

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;

use crate::{
    commitment::MerkleRoot, consensus_state::ConsensusState, error::EthAbiError,
    hash::HASH_LENGTH,
};

#[allow(missing_docs)]
mod sol_types {
    alloy_sol_types::sol! {
        #[sol(all_derives)]
        struct SolConsensusState {
            uint64 timestamp;
            bytes32 appHash;
            bytes32 nextValidatorsHash;
        }
    }
}

pub use sol_types::SolConsensusState;

fn to_bytes32(field: &'static str, bytes: &[u8]) -> Result<B256, EthAbiError> {
    <[u8; HASH_LENGTH]>::try_from(bytes)
        .map(B256::from)
        .map_err(|_| EthAbiError::InvalidLength {
            field,
            expected: HASH_LENGTH,
            found: bytes.len(),
        })
}

impl TryFrom<&ConsensusState> for SolConsensusState {
    type Error = EthAbiError;

    fn try_from(consensus_state: &ConsensusState) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: consensus_state.timestamp(),
            appHash: to_bytes32("app_hash", consensus_state.root().as_bytes())?,
            nextValidatorsHash: to_bytes32(
                "next_validators_hash",
                consensus_state.next_validators_hash(),
            )?,
        })
    }
}

impl From<SolConsensusState> for ConsensusState {
    fn from(value: SolConsensusState) -> Self {
        Self::new(
            value.timestamp,
            MerkleRoot::new(value.appHash.to_vec()),
            value.nextValidatorsHash.to_vec(),
        )
    }
}

impl ConsensusState {
    /// ABI encoding of the state.
    /// # Errors
    /// Returns an error if the root or the next validators hash is not 32 bytes long.
    pub fn abi_encode(&self) -> Result<Vec<u8>, EthAbiError> {
        Ok(SolConsensusState::try_from(self)?.abi_encode())
    }

    /// Decodes a state from its ABI encoding. The result is not validated.
    /// # Errors
    /// Returns an error if the bytes are not a valid encoding.
    pub fn abi_decode(bytes: &[u8]) -> Result<Self, EthAbiError> {
        let value: SolConsensusState = SolValue::abi_decode(bytes)?;
        tracing::trace!(timestamp = value.timestamp, "decoded abi consensus state");
        Ok(value.into())
    }

    /// The keccak256 hash of the ABI encoding, which Solidity clients store per height.
    /// # Errors
    /// Returns an error if the state cannot be ABI encoded.
    pub fn commitment(&self) -> Result<B256, EthAbiError> {
        Ok(keccak256(self.abi_encode()?))
    }
}
