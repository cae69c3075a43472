//! Capabilities the IBC client framework expects from light client state types.

use crate::error::ConsensusStateError;

/// A commitment root that proofs of (non-)membership are verified against.
pub trait Root {
    /// The raw bytes of the root.
    fn bytes(&self) -> &[u8];

    /// Whether the root carries no commitment.
    fn is_empty(&self) -> bool;
}

/// The consensus state capability used by client-type dispatch.
pub trait ConsensusState {
    /// The client type this state belongs to.
    fn client_type(&self) -> &'static str;

    /// The commitment root of the state.
    fn root(&self) -> &dyn Root;

    /// Block time, in nanoseconds since the Unix epoch, of the header that created the state.
    fn timestamp(&self) -> u64;

    /// Structural validation of the state.
    /// # Errors
    /// Returns an error if the state is not well formed.
    fn validate_basic(&self) -> Result<(), ConsensusStateError>;
}
