//! Kernel primitives trait

use crate::SleepDuration;
use core_types::{ChannelHandle, ResultCode, TlsPointer};
use std::ffi::CStr;

/// The kernel primitives trait
///
/// This is the single interface both build modes implement:
/// - Hardware backend (supervisor calls on the real target)
/// - Stub backend (fixed, side-effect-free results on any other host)
/// - Recording backend (for tests)
///
/// The implementation is picked when the crate is built. Callers hold a
/// concrete `K: KernelPrimitives`, so there is no dynamic dispatch between
/// modes.
///
/// # Example
///
/// ```
/// use core_types::ChannelHandle;
/// use kernel_api::KernelPrimitives;
///
/// fn ping<K: KernelPrimitives>(kernel: &K, session: ChannelHandle) -> bool {
///     kernel.send_sync_request(session).is_success()
/// }
/// ```
pub trait KernelPrimitives {
    /// Returns the base address of the calling thread's TLS region
    ///
    /// Always succeeds. Two calls on the same thread return the same value.
    fn tls_pointer(&self) -> TlsPointer;

    /// Sends the request currently staged in the caller's TLS region
    ///
    /// Blocks until the remote side replies. The returned code is passed
    /// through from the kernel unchanged.
    fn send_sync_request(&self, session: ChannelHandle) -> ResultCode;

    /// Connects to a named port
    ///
    /// On success the handle is a new session. On failure the code is nonzero
    /// and the handle value is unspecified.
    fn connect_to_named_port(&self, name: &CStr) -> (ResultCode, ChannelHandle);

    /// Suspends the calling thread
    ///
    /// Negative values are forwarded as-is; the kernel decides what they mean.
    fn sleep_thread(&self, duration: SleepDuration);
}
