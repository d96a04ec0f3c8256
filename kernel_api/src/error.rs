//! Kernel error types

use core_types::ResultCode;
use thiserror::Error;

/// Errors surfaced by the checked supervisor-call helpers
///
/// The raw [`KernelPrimitives`](crate::KernelPrimitives) methods never fail;
/// they return result codes. Only [`crate::svc`] turns a nonzero code into an
/// error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The kernel reported a nonzero result
    #[error("kernel call failed: {0}")]
    Result(ResultCode),
}

impl KernelError {
    /// Returns the result code carried by this error
    pub fn result_code(&self) -> ResultCode {
        match self {
            KernelError::Result(code) => *code,
        }
    }
}

impl From<ResultCode> for KernelError {
    fn from(code: ResultCode) -> Self {
        KernelError::Result(code)
    }
}
