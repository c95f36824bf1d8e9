//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`MissingField`] thrown when a required field is absent or empty.
//! - [`InvalidKind`] thrown when a transaction type is neither income nor
//!   outcome.
//! - [`CpfTaken`] thrown when a CPF is already registered.
//! - [`UserNotFound`] and [`TransactionNotFound`] thrown when an item is not
//!   found.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidKind`]: EngineError::InvalidKind
//!  [`CpfTaken`]: EngineError::CpfTaken
//!  [`UserNotFound`]: EngineError::UserNotFound
//!  [`TransactionNotFound`]: EngineError::TransactionNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} not filled")]
    MissingField(&'static str),
    #[error("Invalid transaction type \"{0}\", expected income or outcome")]
    InvalidKind(String),
    #[error("CPF already registered")]
    CpfTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Transaction not found")]
    TransactionNotFound,
}

impl EngineError {
    /// Returns `true` for errors caused by a rejected request payload.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidKind(_) | Self::CpfTaken
        )
    }
}
