use thiserror::Error;

use math::error::MathError;

use crate::params::MAX_SECRET_BYTES;

/// Result type specialized for secret-sharing operations.
pub type Result<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while splitting or reconstructing a secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    #[error(
        "invalid threshold configuration: threshold {threshold} with {share_count} shares"
    )]
    InvalidThreshold {
        threshold: usize,
        share_count: usize,
    },
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("invalid share index: {0}")]
    InvalidShareIndex(u32),
    #[error("duplicate share index: {0}")]
    DuplicateShareIndex(u32),
    #[error(
        "secret of {len} bytes does not fit in one field element \
         (at most {max} bytes)",
        max = MAX_SECRET_BYTES
    )]
    SecretTooLarge { len: usize },
    #[error("secret must not be empty")]
    EmptySecret,
    #[error("secret must not start with a zero byte")]
    LeadingZeroByte,
    #[error("malformed share: expected \"<index> <value>\", got {0:?}")]
    MalformedShare(String),
    #[error(transparent)]
    Math(#[from] MathError),
}
