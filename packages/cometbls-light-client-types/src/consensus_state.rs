//! This module defines [`ConsensusState`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    commitment::MerkleRoot,
    error::ConsensusStateError,
    exported::{self, Root},
    hash::validate_hash,
    CLIENT_TYPE,
};

/// The consensus state of the cometbls light client at one height.
///
/// The state is immutable once built. It is not validated on construction, callers holding
/// untrusted input must run [`ConsensusState::validate_basic`] before storing it.
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct ConsensusState {
    /// Block time of the header that created this state, in nanoseconds since the Unix epoch.
    /// Zero for an initial state handed over by a relayer.
    #[serde(with = "cometbls_utils::serde::number_as_string")]
    #[schemars(with = "String")]
    timestamp: u64,
    /// Commitment root over the application state at this height
    root: MerkleRoot,
    /// Hash of the validator set that signs the next block
    #[serde(with = "cometbls_utils::serde::hex_bytes")]
    #[schemars(with = "String")]
    next_validators_hash: Vec<u8>,
}

impl ConsensusState {
    /// Creates a new consensus state. No validation is performed.
    #[must_use]
    pub fn new(
        timestamp: u64,
        root: MerkleRoot,
        next_validators_hash: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            timestamp,
            root,
            next_validators_hash: next_validators_hash.into(),
        }
    }

    /// Returns [`CLIENT_TYPE`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn client_type(&self) -> &'static str {
        CLIENT_TYPE
    }

    /// The commitment root.
    #[must_use]
    pub const fn root(&self) -> &MerkleRoot {
        &self.root
    }

    /// Block time in nanoseconds of the header that created this state.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The hash of the next validator set.
    #[must_use]
    pub fn next_validators_hash(&self) -> &[u8] {
        &self.next_validators_hash
    }

    /// The block time as a calendar date.
    #[must_use]
    pub fn timestamp_as_datetime(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.timestamp)).ok()
    }

    /// Basic structural validation: the root must not be empty and the next validators hash
    /// must be a well formed hash. Neither value is checked against any chain.
    /// # Errors
    /// Returns [`ConsensusStateError::InvalidConsensus`] for an empty root, and
    /// [`ConsensusStateError::InvalidHash`] for a malformed next validators hash.
    pub fn validate_basic(&self) -> Result<(), ConsensusStateError> {
        if self.root.is_empty() {
            tracing::debug!(
                timestamp = self.timestamp,
                "rejecting consensus state with an empty root"
            );
            return Err(ConsensusStateError::invalid_consensus(
                "root cannot be empty",
            ));
        }

        validate_hash(&self.next_validators_hash).map_err(|e| {
            tracing::debug!(
                timestamp = self.timestamp,
                error = %e,
                "rejecting consensus state with a malformed next validators hash"
            );
            ConsensusStateError::invalid_hash(e, "next validators hash is invalid")
        })
    }
}

impl exported::ConsensusState for ConsensusState {
    fn client_type(&self) -> &'static str {
        Self::client_type(self)
    }

    fn root(&self) -> &dyn Root {
        &self.root
    }

    fn timestamp(&self) -> u64 {
        Self::timestamp(self)
    }

    fn validate_basic(&self) -> Result<(), ConsensusStateError> {
        Self::validate_basic(self)
    }
}
