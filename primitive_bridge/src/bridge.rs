//! The primitive bridge

use crate::error::BridgeError;
use crate::module;
use crate::platform::PlatformBackend;
use crate::value::Value;
use core_types::{ChannelHandle, ResultCode, TlsPointer};
use kernel_api::{KernelPrimitives, SleepDuration};
use std::ffi::CStr;

/// Bridge between the scripting host and a kernel backend
///
/// `K` is fixed at build time. [`Bridge::platform`] gives the bridge over
/// whichever backend the target selects; tests construct one over a
/// recording backend with [`Bridge::new`].
///
/// The bridge holds no state of its own. Concurrent callers are safe to the
/// extent the backend is.
#[derive(Debug, Clone, Default)]
pub struct Bridge<K: KernelPrimitives = PlatformBackend> {
    kernel: K,
}

impl<K: KernelPrimitives> Bridge<K> {
    /// Creates a bridge over `kernel`
    pub const fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Returns the backend this bridge dispatches to
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Calls a host function by name
    ///
    /// Arguments are converted before dispatch; a conversion failure leaves
    /// the backend untouched.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, BridgeError> {
        let function = module::lookup::<K>(name)
            .ok_or_else(|| BridgeError::UnknownFunction(name.to_string()))?;

        log::trace!("dispatch {}() with {} argument(s)", function.name, args.len());

        (function.call)(self, args).map_err(|err| {
            log::debug!("rejected call: {}", err);
            BridgeError::Argument(err)
        })
    }

    /// Returns the calling thread's TLS base address
    pub fn tls_pointer(&self) -> TlsPointer {
        self.kernel.tls_pointer()
    }

    /// Sends one synchronous request; the result code is returned as-is
    pub fn send_sync_request(&self, session: ChannelHandle) -> ResultCode {
        self.kernel.send_sync_request(session)
    }

    /// Connects to a named port, returning the code and the handle together
    pub fn connect_to_named_port(&self, name: &CStr) -> (ResultCode, ChannelHandle) {
        self.kernel.connect_to_named_port(name)
    }

    /// Suspends the calling thread (never blocks in fallback mode)
    pub fn sleep_thread(&self, duration: SleepDuration) {
        self.kernel.sleep_thread(duration)
    }
}

impl Bridge<PlatformBackend> {
    /// Creates a bridge over the backend selected for this target
    pub const fn platform() -> Self {
        Self::new(PlatformBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_kernel::test_utils::{assert_no_dispatch, KernelCall, RecordingKernel};

    #[test]
    fn test_typed_calls_reach_backend() {
        let bridge = Bridge::new(RecordingKernel::new());
        bridge.tls_pointer();
        bridge.sleep_thread(SleepDuration::YIELD_WITH_CORE_MIGRATION);

        assert_eq!(
            bridge.kernel().calls(),
            vec![
                KernelCall::TlsPointer,
                KernelCall::SleepThread(SleepDuration::from_nanos(-1)),
            ]
        );
    }

    #[test]
    fn test_unknown_function() {
        let bridge = Bridge::new(RecordingKernel::new());
        let err = bridge.call("close_handle", &[Value::Int(1)]).unwrap_err();
        assert_eq!(err, BridgeError::UnknownFunction("close_handle".to_string()));
        assert_no_dispatch(bridge.kernel());
    }

    #[test]
    fn test_platform_bridge_is_usable() {
        let bridge = Bridge::platform();
        assert_eq!(bridge.tls_pointer(), bridge.tls_pointer());
    }
}
