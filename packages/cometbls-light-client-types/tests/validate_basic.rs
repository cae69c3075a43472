//! Integration tests for consensus state validation and encodings

use std::fs;
use std::path::Path;

use cometbls_light_client_types::{
    exported, proto::TYPE_URL, ConsensusState, ErrorKind, MerkleRoot, CLIENT_TYPE,
};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// Validation scenario from JSON
#[derive(Debug, Deserialize)]
struct ValidateBasicFixture {
    scenario: String,
    timestamp: u64,
    root: String,
    next_validators_hash: String,
    expected_error: Option<String>,
    expected_message: Option<String>,
}

impl ValidateBasicFixture {
    fn consensus_state(&self) -> ConsensusState {
        let root = hex::decode(&self.root)
            .unwrap_or_else(|e| panic!("{}: failed to decode root hex: {e}", self.scenario));
        let next_validators_hash = hex::decode(&self.next_validators_hash).unwrap_or_else(|e| {
            panic!(
                "{}: failed to decode next_validators_hash hex: {e}",
                self.scenario
            )
        });

        ConsensusState::new(self.timestamp, MerkleRoot::new(root), next_validators_hash)
    }

    fn expected_kind(&self) -> Option<ErrorKind> {
        self.expected_error.as_deref().map(|kind| match kind {
            "invalid_consensus" => ErrorKind::InvalidConsensus,
            "invalid_hash" => ErrorKind::InvalidHash,
            other => panic!("{}: unknown error kind {other}", self.scenario),
        })
    }
}

/// Load a fixture from the fixtures directory
fn load_fixtures(filename: &str) -> Vec<ValidateBasicFixture> {
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{filename}.json"));
    let fixture_content = fs::read_to_string(&fixture_path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", fixture_path.display()));

    serde_json::from_str(&fixture_content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", fixture_path.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}

#[test]
fn validate_basic_fixtures() {
    init_tracing();

    let fixtures = load_fixtures("validate_basic");
    assert!(!fixtures.is_empty());

    for fixture in &fixtures {
        let consensus_state = fixture.consensus_state();
        let result = consensus_state.validate_basic();

        match (fixture.expected_kind(), result) {
            (None, Ok(())) => {}
            (Some(kind), Err(err)) => {
                assert_eq!(err.kind(), kind, "{}", fixture.scenario);
                let message = fixture.expected_message.as_deref().unwrap_or_default();
                assert!(
                    err.to_string().contains(message),
                    "{}: `{err}` does not contain `{message}`",
                    fixture.scenario
                );
            }
            (expected, actual) => panic!(
                "{}: expected {expected:?}, got {actual:?}",
                fixture.scenario
            ),
        }
    }
}

#[test]
fn fixture_states_survive_protobuf_and_json() {
    for fixture in load_fixtures("validate_basic") {
        let consensus_state = fixture.consensus_state();

        let any = consensus_state.to_any();
        assert_eq!(any.type_url, TYPE_URL);
        assert_eq!(
            ConsensusState::from_any(&any).unwrap(),
            consensus_state,
            "{}",
            fixture.scenario
        );

        let json = serde_json::to_string(&consensus_state).unwrap();
        assert_eq!(
            serde_json::from_str::<ConsensusState>(&json).unwrap(),
            consensus_state,
            "{}",
            fixture.scenario
        );
    }
}

#[cfg(feature = "ethabi")]
#[test]
fn fixture_states_fit_the_abi_layout_when_32_bytes() {
    for fixture in load_fixtures("validate_basic") {
        let consensus_state = fixture.consensus_state();

        // only 32 byte roots and hashes fit the ABI layout
        let abi_compatible = consensus_state.root().as_bytes().len() == 32
            && consensus_state.next_validators_hash().len() == 32;
        match consensus_state.abi_encode() {
            Ok(encoded) => {
                assert!(abi_compatible, "{}", fixture.scenario);
                assert_eq!(
                    ConsensusState::abi_decode(&encoded).unwrap(),
                    consensus_state
                );
            }
            Err(_) => assert!(!abi_compatible, "{}", fixture.scenario),
        }
    }
}

#[test]
fn states_are_dispatched_through_the_capability() {
    let states: Vec<Box<dyn exported::ConsensusState>> = load_fixtures("validate_basic")
        .iter()
        .map(|fixture| Box::new(fixture.consensus_state()) as Box<dyn exported::ConsensusState>)
        .collect();

    assert!(states.iter().all(|cs| cs.client_type() == CLIENT_TYPE));
    assert_eq!(
        states.iter().filter(|cs| cs.validate_basic().is_ok()).count(),
        2
    );
    assert!(states.iter().any(|cs| cs.timestamp() == 0));
}

#[test]
fn decoded_states_are_validated_separately() {
    init_tracing();

    let fixture = load_fixtures("validate_basic")
        .into_iter()
        .find(|f| f.scenario == "zero_root")
        .expect("zero_root fixture");

    let bytes = fixture.consensus_state().encode_to_vec();
    let decoded = ConsensusState::decode(&bytes).expect("zero root still decodes");

    let err = decoded.validate_basic().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConsensus);
    assert_eq!(err.context(), "root cannot be empty");
}
