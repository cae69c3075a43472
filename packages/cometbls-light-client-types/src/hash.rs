//! Format checks for validator set hashes.

use cometbls_utils::ensure;

/// Size in bytes of a validator set hash.
pub const HASH_LENGTH: usize = 32;

/// Error returned when a byte sequence is not a well formed hash
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum HashError {
    /// Hash has the wrong length
    #[error("expected size to be {expected} bytes, got {found} bytes")]
    InvalidLength {
        /// Expected length
        expected: usize,
        /// Found length
        found: usize,
    },
}

/// Checks that `hash` is either absent (empty) or exactly [`HASH_LENGTH`] bytes long.
///
/// Only the shape is checked, the content is authenticated later by header verification.
/// # Errors
/// Returns [`HashError::InvalidLength`] for any other length.
pub const fn validate_hash(hash: &[u8]) -> Result<(), HashError> {
    ensure!(
        hash.is_empty() || hash.len() == HASH_LENGTH,
        HashError::InvalidLength {
            expected: HASH_LENGTH,
            found: hash.len(),
        }
    );

    Ok(())
}
