//! Test utilities for bridge and client testing
//!
//! [`RecordingKernel`] implements the kernel primitives by writing every
//! call into a log and answering with scripted results. Tests use it to
//! check exactly what reached the kernel, including that a rejected call
//! reached nothing at all.

use core_types::{ChannelHandle, ResultCode, TlsPointer};
use kernel_api::{KernelPrimitives, SleepDuration};
use std::cell::RefCell;
use std::ffi::CStr;

/// A single primitive invocation seen by a [`RecordingKernel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelCall {
    TlsPointer,
    SendSyncRequest(ChannelHandle),
    /// Port name bytes, without the terminating NUL
    ConnectToNamedPort(Vec<u8>),
    SleepThread(SleepDuration),
}

/// Call-recording kernel backend
///
/// Defaults mirror the stub backend's answers. Use the `with_*` builders to
/// script failures.
#[derive(Debug)]
pub struct RecordingKernel {
    calls: RefCell<Vec<KernelCall>>,
    tls: TlsPointer,
    send_result: ResultCode,
    connect_result: (ResultCode, ChannelHandle),
}

impl RecordingKernel {
    /// Creates a recording kernel with an empty call log
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            tls: TlsPointer::from_addr(0x1000),
            send_result: ResultCode::SUCCESS,
            connect_result: (ResultCode::SUCCESS, ChannelHandle::PLACEHOLDER),
        }
    }

    /// Sets the TLS address reported to callers
    pub fn with_tls_pointer(mut self, tls: TlsPointer) -> Self {
        self.tls = tls;
        self
    }

    /// Sets the result code every synchronous request returns
    pub fn with_send_result(mut self, code: ResultCode) -> Self {
        self.send_result = code;
        self
    }

    /// Sets the (code, handle) pair every connect returns
    pub fn with_connect_result(mut self, code: ResultCode, handle: ChannelHandle) -> Self {
        self.connect_result = (code, handle);
        self
    }

    /// Returns a copy of the call log, oldest first
    pub fn calls(&self) -> Vec<KernelCall> {
        self.calls.borrow().clone()
    }

    /// Returns the number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Clears the call log
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: KernelCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for RecordingKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelPrimitives for RecordingKernel {
    fn tls_pointer(&self) -> TlsPointer {
        self.record(KernelCall::TlsPointer);
        self.tls
    }

    fn send_sync_request(&self, session: ChannelHandle) -> ResultCode {
        self.record(KernelCall::SendSyncRequest(session));
        self.send_result
    }

    fn connect_to_named_port(&self, name: &CStr) -> (ResultCode, ChannelHandle) {
        self.record(KernelCall::ConnectToNamedPort(name.to_bytes().to_vec()));
        self.connect_result
    }

    fn sleep_thread(&self, duration: SleepDuration) {
        self.record(KernelCall::SleepThread(duration));
    }
}

/// Asserts that nothing reached the kernel
///
/// # Panics
///
/// Panics with the recorded calls if the log is not empty.
pub fn assert_no_dispatch(kernel: &RecordingKernel) {
    let calls = kernel.calls();
    assert!(calls.is_empty(), "expected no kernel dispatch, got {:?}", calls);
}
