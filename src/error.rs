// third-party imports
use thiserror::Error;

/// Error is an error which may occur when parsing wildcard settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid wildcard syntax {value:?}: {reason}")]
    InvalidSyntax { value: String, reason: SyntaxErrorReason },
}

/// SyntaxErrorReason tells why a wildcard syntax string was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorReason {
    #[error("expected exactly two characters, single-character wildcard first, got none")]
    Empty,
    #[error("expected exactly two characters, single-character wildcard first, got {0}")]
    WrongLength(usize),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
