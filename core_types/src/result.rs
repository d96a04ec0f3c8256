//! Kernel result codes
//!
//! A result code is a 32-bit status word. Zero is success; anything else is
//! a kernel-defined failure laid out as `module | description << 9`.

use serde::{Deserialize, Serialize};
use std::fmt;

const MODULE_BITS: u32 = 9;
const DESCRIPTION_BITS: u32 = 13;

/// 32-bit status returned by IPC-affecting operations
///
/// The value is carried through the bridge unchanged. The decoding helpers
/// exist for callers that want to inspect or print a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCode(u32);

impl ResultCode {
    /// The success code
    pub const SUCCESS: ResultCode = ResultCode(0);

    /// Wraps a raw status word
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Builds a code from its module and description fields
    ///
    /// Bits beyond each field's width are discarded.
    pub const fn new(module: u32, description: u32) -> Self {
        let module = module & ((1 << MODULE_BITS) - 1);
        let description = description & ((1 << DESCRIPTION_BITS) - 1);
        Self(module | (description << MODULE_BITS))
    }

    /// Returns the raw status word
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    /// Module that reported the failure (bits 0..9)
    pub const fn module(&self) -> u32 {
        self.0 & ((1 << MODULE_BITS) - 1)
    }

    /// Module-specific failure description (bits 9..22)
    pub const fn description(&self) -> u32 {
        (self.0 >> MODULE_BITS) & ((1 << DESCRIPTION_BITS) - 1)
    }

    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_failure(&self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for ResultCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ResultCode> for u32 {
    fn from(code: ResultCode) -> Self {
        code.0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "2{:03}-{:04} ({:#x})",
            self.module(),
            self.description(),
            self.0
        )
    }
}

/// Well-known results reported by the kernel itself (module 1)
pub mod kernel_result {
    use super::ResultCode;

    /// Kernel module number
    pub const MODULE: u32 = 1;

    pub const INVALID_HANDLE: ResultCode = ResultCode::new(MODULE, 114);
    pub const TIMED_OUT: ResultCode = ResultCode::new(MODULE, 117);
    pub const CANCELLED: ResultCode = ResultCode::new(MODULE, 118);
    /// Returned by connect when no port with the given name is registered yet
    pub const NOT_FOUND: ResultCode = ResultCode::new(MODULE, 121);
    pub const SESSION_CLOSED: ResultCode = ResultCode::new(MODULE, 123);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_code() {
        assert!(ResultCode::SUCCESS.is_success());
        assert!(!ResultCode::SUCCESS.is_failure());
        assert_eq!(ResultCode::from_raw(0), ResultCode::SUCCESS);
    }

    #[test]
    fn test_field_decoding() {
        let code = ResultCode::from_raw(0xf201);
        assert_eq!(code.module(), 1);
        assert_eq!(code.description(), 121);
        assert!(code.is_failure());
    }

    #[test]
    fn test_new_masks_fields() {
        let code = ResultCode::new(0x3ff, 0);
        assert_eq!(code.module(), 0x1ff);
        assert_eq!(code.description(), 0);
    }

    #[test]
    fn test_well_known_kernel_results() {
        assert_eq!(kernel_result::INVALID_HANDLE.as_raw(), 0xe401);
        assert_eq!(kernel_result::NOT_FOUND.as_raw(), 0xf201);
        assert_eq!(kernel_result::SESSION_CLOSED.as_raw(), 0xf601);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(kernel_result::NOT_FOUND.to_string(), "2001-0121 (0xf201)");
        assert_eq!(ResultCode::SUCCESS.to_string(), "2000-0000 (0x0)");
    }

    #[test]
    fn test_upper_bits_survive_raw_round_trip() {
        // Bits above the description field are not part of the layout but
        // must still pass through untouched.
        let raw = 0xdead_beef;
        assert_eq!(u32::from(ResultCode::from(raw)), raw);
    }
}
