//! Host-visible function table
//!
//! The bridge is registered with the host as one module whose functions
//! take and return [`Value`]s. Each entry converts its arguments, calls the
//! typed method on [`Bridge`] and wraps the result.

use crate::bridge::Bridge;
use crate::error::ArgumentError;
use crate::marshal::{FromArgs, IntoValue};
use crate::value::Value;
use core_types::ChannelHandle;
use kernel_api::{KernelPrimitives, SleepDuration};
use std::ffi::CString;

/// Name the host imports the functions under
pub const MODULE_NAME: &str = "kernel";

pub const GET_TLS: &str = "get_tls";
pub const SEND_SYNC_REQUEST: &str = "send_sync_request";
pub const CONNECT_TO_NAMED_PORT: &str = "connect_to_named_port";
pub const SLEEP_THREAD: &str = "sleep_thread";

/// Signature shared by every host function
pub type HostFn<K> = fn(&Bridge<K>, &[Value]) -> Result<Value, ArgumentError>;

/// One entry in the module table
pub struct HostFunction<K: KernelPrimitives> {
    pub name: &'static str,
    pub arity: usize,
    pub call: HostFn<K>,
}

/// Returns the module table
pub fn functions<K: KernelPrimitives>() -> [HostFunction<K>; 4] {
    [
        HostFunction {
            name: GET_TLS,
            arity: <()>::ARITY,
            call: get_tls::<K>,
        },
        HostFunction {
            name: SEND_SYNC_REQUEST,
            arity: <(ChannelHandle,)>::ARITY,
            call: send_sync_request::<K>,
        },
        HostFunction {
            name: CONNECT_TO_NAMED_PORT,
            arity: <(CString,)>::ARITY,
            call: connect_to_named_port::<K>,
        },
        HostFunction {
            name: SLEEP_THREAD,
            arity: <(SleepDuration,)>::ARITY,
            call: sleep_thread::<K>,
        },
    ]
}

/// Finds a function by its host-visible name
pub fn lookup<K: KernelPrimitives>(name: &str) -> Option<HostFunction<K>> {
    functions::<K>().into_iter().find(|f| f.name == name)
}

fn get_tls<K: KernelPrimitives>(
    bridge: &Bridge<K>,
    args: &[Value],
) -> Result<Value, ArgumentError> {
    <()>::from_args(GET_TLS, args)?;
    Ok(bridge.tls_pointer().into_value())
}

fn send_sync_request<K: KernelPrimitives>(
    bridge: &Bridge<K>,
    args: &[Value],
) -> Result<Value, ArgumentError> {
    let (session,) = <(ChannelHandle,)>::from_args(SEND_SYNC_REQUEST, args)?;
    Ok(bridge.send_sync_request(session).into_value())
}

fn connect_to_named_port<K: KernelPrimitives>(
    bridge: &Bridge<K>,
    args: &[Value],
) -> Result<Value, ArgumentError> {
    let (name,) = <(CString,)>::from_args(CONNECT_TO_NAMED_PORT, args)?;
    Ok(bridge.connect_to_named_port(&name).into_value())
}

fn sleep_thread<K: KernelPrimitives>(
    bridge: &Bridge<K>,
    args: &[Value],
) -> Result<Value, ArgumentError> {
    let (duration,) = <(SleepDuration,)>::from_args(SLEEP_THREAD, args)?;
    bridge.sleep_thread(duration);
    Ok(().into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_kernel::test_utils::RecordingKernel;

    #[test]
    fn test_table_names_and_arity() {
        let table = functions::<RecordingKernel>();
        let entries: Vec<_> = table.iter().map(|f| (f.name, f.arity)).collect();
        assert_eq!(
            entries,
            vec![
                ("get_tls", 0),
                ("send_sync_request", 1),
                ("connect_to_named_port", 1),
                ("sleep_thread", 1),
            ]
        );
    }

    #[test]
    fn test_lookup() {
        assert!(lookup::<RecordingKernel>("sleep_thread").is_some());
        assert!(lookup::<RecordingKernel>("svcSleepThread").is_none());
    }

    #[test]
    fn test_entries_call_through() {
        let bridge = Bridge::new(RecordingKernel::new());
        let entry = lookup::<RecordingKernel>(SEND_SYNC_REQUEST).unwrap();
        assert_eq!((entry.call)(&bridge, &[Value::Int(9)]), Ok(Value::Int(0)));
    }
}
