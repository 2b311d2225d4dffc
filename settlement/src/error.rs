//! Error types for settlement engine

use crate::types::ParticipantId;
use thiserror::Error;

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Running balance left the representable decimal range
    #[error("Amount overflow: balance of {0} exceeds the supported range")]
    AmountOverflow(ParticipantId),
}
