//! Protobuf encoding of [`ConsensusState`], as it is carried inside a `google.protobuf.Any`.

use cometbls_utils::ensure;
use ibc_proto::{
    google::protobuf::Any, ibc::core::commitment::v1::MerkleRoot as RawMerkleRoot,
};
use prost::Message;

use crate::{commitment::MerkleRoot, consensus_state::ConsensusState, error::ProtoError};

/// The type url of a cometbls consensus state packed into an `Any`.
pub const TYPE_URL: &str = "/union.ibc.lightclients.cometbls.v1.ConsensusState";

/// The raw protobuf consensus state
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawConsensusState {
    /// Block time in nanoseconds
    #[prost(uint64, tag = "1")]
    pub timestamp: u64,
    /// Commitment root
    #[prost(message, optional, tag = "2")]
    pub root: Option<RawMerkleRoot>,
    /// Hash of the next validator set
    #[prost(bytes = "vec", tag = "3")]
    pub next_validators_hash: Vec<u8>,
}

impl From<MerkleRoot> for RawMerkleRoot {
    fn from(root: MerkleRoot) -> Self {
        Self {
            hash: root.into_vec(),
        }
    }
}

impl From<RawMerkleRoot> for MerkleRoot {
    fn from(raw: RawMerkleRoot) -> Self {
        Self::new(raw.hash)
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(consensus_state: ConsensusState) -> Self {
        Self {
            timestamp: consensus_state.timestamp(),
            next_validators_hash: consensus_state.next_validators_hash().to_vec(),
            root: Some(consensus_state.root().clone().into()),
        }
    }
}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = ProtoError;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        let root = raw.root.ok_or(ProtoError::MissingField("root"))?;
        Ok(Self::new(
            raw.timestamp,
            root.into(),
            raw.next_validators_hash,
        ))
    }
}

impl ConsensusState {
    /// Protobuf encoding of the state.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        RawConsensusState::from(self.clone()).encode_to_vec()
    }

    /// Decodes a state from its protobuf encoding. The result is not validated.
    /// # Errors
    /// Returns an error if the bytes are not a valid encoding or the root is missing.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtoError> {
        let raw = RawConsensusState::decode(bytes)?;
        tracing::trace!(
            timestamp = raw.timestamp,
            has_root = raw.root.is_some(),
            "decoded raw consensus state"
        );
        raw.try_into()
    }

    /// Packs the state into an `Any`.
    #[must_use]
    pub fn to_any(&self) -> Any {
        Any {
            type_url: TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }

    /// Unpacks a state from an `Any`. The result is not validated.
    /// # Errors
    /// Returns an error if the type url does not match [`TYPE_URL`] or the value does not decode.
    pub fn from_any(any: &Any) -> Result<Self, ProtoError> {
        ensure!(
            any.type_url == TYPE_URL,
            ProtoError::UnexpectedTypeUrl {
                expected: TYPE_URL,
                found: any.type_url.clone(),
            }
        );

        Self::decode(&any.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{valid_next_validators_hash, valid_root};

    #[test]
    fn wire_layout_matches_field_tags() {
        let cs = ConsensusState::new(1, MerkleRoot::new(vec![0xaa]), vec![0xbb]);

        assert_eq!(
            cs.encode_to_vec(),
            vec![
                0x08, 0x01, // timestamp
                0x12, 0x03, 0x0a, 0x01, 0xaa, // root { hash }
                0x1a, 0x01, 0xbb, // next_validators_hash
            ]
        );
    }

    #[test]
    fn decode_restores_all_fields() {
        let cs = ConsensusState::new(
            1_700_000_000_000_000_000,
            valid_root(),
            valid_next_validators_hash(),
        );

        let decoded = ConsensusState::decode(&cs.encode_to_vec()).unwrap();
        assert_eq!(decoded, cs);
    }

    #[test]
    fn decode_does_not_validate() {
        let cs = ConsensusState::new(0, MerkleRoot::new(vec![0; 32]), vec![1; 5]);

        let decoded = ConsensusState::decode(&cs.encode_to_vec()).unwrap();
        assert_eq!(decoded, cs);
        assert!(decoded.validate_basic().is_err());
    }

    #[test]
    fn missing_root_is_an_error() {
        let raw = RawConsensusState {
            timestamp: 1,
            root: None,
            next_validators_hash: valid_next_validators_hash(),
        };

        let err = ConsensusState::decode(&raw.encode_to_vec()).unwrap_err();
        assert!(matches!(err, ProtoError::MissingField("root")));
    }

    #[test]
    fn garbage_does_not_decode() {
        let err = ConsensusState::decode(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, ProtoError::Decode(_)));
    }

    #[test]
    fn any_carries_type_url() {
        let cs = ConsensusState::new(3, valid_root(), valid_next_validators_hash());

        let any = cs.to_any();
        assert_eq!(any.type_url, TYPE_URL);
        assert_eq!(ConsensusState::from_any(&any).unwrap(), cs);
    }

    #[test]
    fn any_with_foreign_type_url_is_rejected() {
        let cs = ConsensusState::new(3, valid_root(), valid_next_validators_hash());
        let any = Any {
            type_url: "/ibc.lightclients.tendermint.v1.ConsensusState".to_string(),
            value: cs.encode_to_vec(),
        };

        let err = ConsensusState::from_any(&any).unwrap_err();
        assert!(matches!(
            err,
            ProtoError::UnexpectedTypeUrl { expected: TYPE_URL, ref found }
                if found == "/ibc.lightclients.tendermint.v1.ConsensusState"
        ));
    }
}
