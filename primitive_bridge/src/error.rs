//! Bridge error types

use crate::value::ValueKind;
use thiserror::Error;

/// A host argument could not be converted to its native type
///
/// Raised before any kernel dispatch. Never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{function}(): {kind}")]
pub struct ArgumentError {
    /// Host-facing name of the function that rejected the call
    pub function: &'static str,
    pub kind: ArgumentErrorKind,
}

/// Why an argument was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentErrorKind {
    /// Wrong number of arguments
    #[error("takes {expected} argument(s) but {found} were given")]
    Arity { expected: usize, found: usize },

    /// Value of the wrong kind
    #[error("argument {index}: expected {expected}, got {found}")]
    WrongKind {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Integer outside the native type's range
    #[error("argument {index}: {value} does not fit in {target}")]
    OutOfRange {
        index: usize,
        value: i128,
        target: &'static str,
    },

    /// String that cannot become a NUL-terminated byte sequence
    #[error("argument {index}: embedded NUL byte at offset {position}")]
    InteriorNul { index: usize, position: usize },
}

impl ArgumentError {
    pub fn new(function: &'static str, kind: ArgumentErrorKind) -> Self {
        Self { function, kind }
    }
}

/// Errors returned by name-based dispatch
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// No function with this name is registered
    #[error("module '{module}' has no function '{0}'", module = crate::module::MODULE_NAME)]
    UnknownFunction(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
