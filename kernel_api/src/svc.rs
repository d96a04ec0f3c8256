//! Checked supervisor-call helpers
//!
//! The raw primitives hand back result codes. Rust callers that want `?`
//! propagation go through these helpers instead, which turn a nonzero code
//! into a [`KernelError`].

use crate::{KernelError, KernelPrimitives, SleepDuration};
use core_types::{ChannelHandle, ResultCode};
use std::ffi::CStr;

fn check(code: ResultCode) -> Result<(), KernelError> {
    if code.is_success() {
        Ok(())
    } else {
        Err(KernelError::Result(code))
    }
}

/// Sends the staged request over `session`, failing on a nonzero result
pub fn send_sync_request<K: KernelPrimitives>(
    kernel: &K,
    session: ChannelHandle,
) -> Result<(), KernelError> {
    check(kernel.send_sync_request(session))
}

/// Connects to `name`, returning the new session handle
///
/// The handle reported alongside a failure is discarded, since the kernel
/// leaves it unspecified.
pub fn connect_to_named_port<K: KernelPrimitives>(
    kernel: &K,
    name: &CStr,
) -> Result<ChannelHandle, KernelError> {
    let (code, handle) = kernel.connect_to_named_port(name);
    check(code)?;
    Ok(handle)
}

/// Suspends the calling thread; this never fails
pub fn sleep_thread<K: KernelPrimitives>(kernel: &K, duration: SleepDuration) {
    kernel.sleep_thread(duration)
}
