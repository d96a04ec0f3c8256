//! # Simulated Kernel
//!
//! This crate provides the fallback implementation of the kernel primitives.
//!
//! ## Purpose
//!
//! The stub backend lets code written against the bridge run on a host
//! without the real kernel:
//! - Runs under `cargo test`
//! - Deterministic (every call reports the same fixed result)
//! - Side-effect free (no IPC, no blocking)
//!
//! ## Philosophy
//!
//! **Everything succeeds.** A caller exercised off the real target sees a
//! stable success contract rather than spurious errors. The stub does not
//! simulate sessions: every connect yields the same placeholder handle and
//! every request reports success whatever handle it is given.
//!
//! For tests that need to observe what was dispatched, or to script failure
//! codes, see [`test_utils::RecordingKernel`].

pub mod test_utils;

use core_types::{ChannelHandle, ResultCode, TlsPointer};
use kernel_api::{KernelPrimitives, SleepDuration};
use std::ffi::CStr;

/// Size of the scratch region standing in for a thread's TLS block
pub const SCRATCH_TLS_SIZE: usize = 0x100;

#[repr(C, align(16))]
struct ScratchTls([u8; SCRATCH_TLS_SIZE]);

// Never written. Only its address leaves this module.
static SCRATCH_TLS: ScratchTls = ScratchTls([0; SCRATCH_TLS_SIZE]);

/// Fallback kernel backend
///
/// Stateless; all instances share the one process-wide scratch TLS region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubBackend;

impl StubBackend {
    /// Creates a stub backend
    pub const fn new() -> Self {
        Self
    }

    /// Address of the process-wide scratch TLS region
    ///
    /// Stable for the life of the process and identical on every thread.
    pub fn scratch_tls() -> TlsPointer {
        TlsPointer::from_addr(SCRATCH_TLS.0.as_ptr() as usize as u64)
    }
}

impl KernelPrimitives for StubBackend {
    fn tls_pointer(&self) -> TlsPointer {
        Self::scratch_tls()
    }

    fn send_sync_request(&self, _session: ChannelHandle) -> ResultCode {
        ResultCode::SUCCESS
    }

    fn connect_to_named_port(&self, _name: &CStr) -> (ResultCode, ChannelHandle) {
        (ResultCode::SUCCESS, ChannelHandle::PLACEHOLDER)
    }

    fn sleep_thread(&self, _duration: SleepDuration) {}
}
