//! Error types for stringify operations.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Selector failures and spec parsing each get their own error type.

use std::fmt;

use thiserror::Error;

/// The top-level error type for all stringify operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Selector failures surface with the selector's own message.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("Selector spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Format error: {0}")]
    Format(#[from] fmt::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by a selector while rendering an element.
///
/// Wraps whatever the selector returned so callers can get the original
/// error back with [`SelectorError::downcast_ref`] or [`SelectorError::into_inner`].
pub struct SelectorError(Box<dyn std::error::Error + Send + Sync>);

impl SelectorError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }

    /// Borrow the original error as a concrete type, if it is one.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

impl fmt::Debug for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for SelectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Errors from parsing a textual selector spec such as `field:2` or `upper`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Unknown selector: {0}")]
    Unknown(String),

    #[error("Selector '{name}' requires an argument ({usage})")]
    MissingArgument { name: String, usage: &'static str },

    #[error("Selector '{name}' takes no argument")]
    UnexpectedArgument { name: String },

    #[error("Invalid field index '{0}' (fields are numbered from 1)")]
    InvalidFieldIndex(String),
}
