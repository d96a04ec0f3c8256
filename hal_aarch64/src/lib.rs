//! # AArch64 Hardware Backend
//!
//! This crate implements the kernel primitives for the real target: an
//! AArch64 core running the Horizon microkernel.
//!
//! ## Scope
//!
//! Each primitive is a single supervisor call (or, for the TLS pointer, a
//! single system-register read). Nothing is buffered, retried or translated.
//!
//! On any other target the raw call wrappers and [`HardwareBackend`] are not
//! compiled; only the call numbers in [`svc::id`] remain.

pub mod svc;

#[cfg(all(target_arch = "aarch64", target_os = "horizon"))]
pub use backend::HardwareBackend;

#[cfg(all(target_arch = "aarch64", target_os = "horizon"))]
mod backend {
    use crate::svc;
    use core_types::{ChannelHandle, ResultCode, TlsPointer};
    use kernel_api::{KernelPrimitives, SleepDuration};
    use std::ffi::CStr;

    /// Kernel backend for the real target
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct HardwareBackend;

    impl HardwareBackend {
        /// Creates the hardware backend
        pub const fn new() -> Self {
            Self
        }
    }

    impl KernelPrimitives for HardwareBackend {
        #[inline]
        fn tls_pointer(&self) -> TlsPointer {
            TlsPointer::from_addr(svc::get_tls())
        }

        #[inline]
        fn send_sync_request(&self, session: ChannelHandle) -> ResultCode {
            // SAFETY: The kernel validates the handle and reads the request
            // from the calling thread's own TLS region. A bad handle comes
            // back as a result code, not as undefined behavior.
            ResultCode::from_raw(unsafe { svc::send_sync_request(session.as_raw()) })
        }

        #[inline]
        fn connect_to_named_port(&self, name: &CStr) -> (ResultCode, ChannelHandle) {
            // SAFETY: `name` is NUL-terminated and outlives the call.
            let (rc, handle) = unsafe { svc::connect_to_named_port(name.as_ptr()) };
            (ResultCode::from_raw(rc), ChannelHandle::from_raw(handle))
        }

        #[inline]
        fn sleep_thread(&self, duration: SleepDuration) {
            svc::sleep_thread(duration.as_nanos())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::svc::id;

    #[test]
    fn test_call_numbers() {
        assert_eq!(id::SLEEP_THREAD, 0x0b);
        assert_eq!(id::CONNECT_TO_NAMED_PORT, 0x1f);
        assert_eq!(id::SEND_SYNC_REQUEST, 0x21);
    }
}
