//! Raw supervisor-call wrappers
//!
//! This module isolates every `svc` instruction behind a small function so
//! the unsafe surface can be audited in one place.
//!
//! ## Register conventions
//!
//! Arguments go in `x0..x7`, results come back in `x0` (result code, low 32 bits) and,
//! for calls that produce a handle, `x1`. The kernel may clobber any
//! caller-saved register, so every wrapper declares `clobber_abi("C")`.

/// Supervisor call numbers
pub mod id {
    pub const SLEEP_THREAD: u32 = 0x0b;
    pub const CONNECT_TO_NAMED_PORT: u32 = 0x1f;
    pub const SEND_SYNC_REQUEST: u32 = 0x21;
}

#[cfg(target_arch = "aarch64")]
pub use raw::*;

#[cfg(target_arch = "aarch64")]
mod raw {
    use super::id;
    use core::arch::asm;
    use core::ffi::c_char;

    /// Reads the calling thread's TLS base from `tpidrro_el0`
    #[inline]
    pub fn get_tls() -> u64 {
        let tls: u64;
        // SAFETY: Reading the read-only thread ID register has no side
        // effects and is permitted at EL0.
        unsafe {
            asm!(
                "mrs {}, tpidrro_el0",
                out(reg) tls,
                options(nomem, nostack, preserves_flags)
            );
        }
        tls
    }

    /// Sends the request staged in TLS over `session`
    ///
    /// # Safety
    ///
    /// The calling thread's TLS message buffer must hold a request the
    /// kernel can parse. The reply overwrites that buffer.
    #[inline]
    pub unsafe fn send_sync_request(session: u32) -> u32 {
        let rc: u32;
        asm!(
            "svc {id}",
            id = const id::SEND_SYNC_REQUEST,
            inout("x0") session => rc,
            clobber_abi("C"),
        );
        rc
    }

    /// Connects to the port named by `name`, returning `(result, handle)`
    ///
    /// # Safety
    ///
    /// `name` must point to a NUL-terminated string that stays valid for the
    /// duration of the call.
    #[inline]
    pub unsafe fn connect_to_named_port(name: *const c_char) -> (u32, u32) {
        let rc: u32;
        let handle: u64;
        asm!(
            "svc {id}",
            id = const id::CONNECT_TO_NAMED_PORT,
            inout("x1") name as u64 => handle,
            lateout("x0") rc,
            clobber_abi("C"),
        );
        (rc, handle as u32)
    }

    /// Suspends the calling thread for `nanos` nanoseconds
    ///
    /// Zero and negative values are yield requests and are passed unchanged.
    #[inline]
    pub fn sleep_thread(nanos: i64) {
        // SAFETY: The call takes no pointers and only affects scheduling of
        // the calling thread.
        unsafe {
            asm!(
                "svc {id}",
                id = const id::SLEEP_THREAD,
                in("x0") nanos,
                clobber_abi("C"),
            );
        }
    }
}
