//! This module defines [`ConsensusStateError`] and the errors of the encoding layers.

use crate::hash::HashError;

/// Errors returned by the structural validation of a consensus state
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ConsensusStateError {
    /// The consensus state is malformed
    #[error("{context}: invalid consensus state")]
    InvalidConsensus {
        /// What was wrong with the state
        context: String,
    },

    /// A hash stored in the consensus state is malformed
    #[error("{context}: {source}")]
    InvalidHash {
        /// Which hash was wrong
        context: String,
        /// The underlying format error
        #[source]
        source: HashError,
    },
}

/// The kind of a [`ConsensusStateError`], without its context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorKind {
    /// See [`ConsensusStateError::InvalidConsensus`]
    InvalidConsensus,
    /// See [`ConsensusStateError::InvalidHash`]
    InvalidHash,
}

impl ConsensusStateError {
    /// Constructs a [`ConsensusStateError::InvalidConsensus`] variant.
    #[must_use]
    pub fn invalid_consensus(context: impl Into<String>) -> Self {
        Self::InvalidConsensus {
            context: context.into(),
        }
    }

    /// Constructs a [`ConsensusStateError::InvalidHash`] variant.
    #[must_use]
    pub fn invalid_hash(source: HashError, context: impl Into<String>) -> Self {
        Self::InvalidHash {
            context: context.into(),
            source,
        }
    }

    /// The kind of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConsensus { .. } => ErrorKind::InvalidConsensus,
            Self::InvalidHash { .. } => ErrorKind::InvalidHash,
        }
    }

    /// The context message attached to the error.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::InvalidConsensus { context } | Self::InvalidHash { context, .. } => context,
        }
    }
}

/// Errors returned while decoding a consensus state from protobuf
#[derive(thiserror::Error, Debug)]
pub enum ProtoError {
    /// The bytes are not a valid protobuf message
    #[error("failed to decode consensus state: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A required field is not set
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// The `Any` does not hold a cometbls consensus state
    #[error("unexpected type url, expected ({expected}) but found ({found})")]
    UnexpectedTypeUrl {
        /// Expected type url
        expected: &'static str,
        /// Found type url
        found: String,
    },
}

/// Errors returned while converting a consensus state to or from its ABI layout
#[cfg(feature = "ethabi")]
#[derive(thiserror::Error, Debug)]
pub enum EthAbiError {
    /// A field does not fit its fixed size ABI slot
    #[error("invalid {field} length, expected {expected} but found {found}")]
    InvalidLength {
        /// Name of the field
        field: &'static str,
        /// Expected length
        expected: usize,
        /// Found length
        found: usize,
    },

    /// The bytes are not a valid ABI encoding
    #[error("abi decode error: {0}")]
    Decode(#[from] alloy_sol_types::Error),
}
