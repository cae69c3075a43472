//! Prints the JSON schema of the cometbls consensus state.

use cometbls_light_client_types::ConsensusState;

fn main() -> Result<(), serde_json::Error> {
    let schema = schemars::schema_for!(ConsensusState);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
