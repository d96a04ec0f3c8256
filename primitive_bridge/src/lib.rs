//! # Primitive Bridge
//!
//! This crate exposes four kernel primitives to a scripting host:
//!
//! | Function | Arguments | Returns |
//! |---|---|---|
//! | `get_tls` | none | int (TLS base address) |
//! | `send_sync_request` | int (u32 handle) | int (u32 result code) |
//! | `connect_to_named_port` | str (port name) | (int result code, int handle) |
//! | `sleep_thread` | int (i64 nanoseconds) | none |
//!
//! ## Build modes
//!
//! On the real target (`aarch64` + `horizon`) every call is forwarded to the
//! supervisor-call layer. Everywhere else it runs against the stub backend,
//! which reports fixed success values and never blocks. The choice is made
//! by the target configuration; see [`PlatformBackend`].
//!
//! ## Errors
//!
//! Host values that cannot be converted to the native argument type fail
//! with [`ArgumentError`] before anything is dispatched. Kernel failures are
//! not errors at this layer: they come back as ordinary result-code values.

pub mod bridge;
pub mod error;
pub mod marshal;
pub mod module;
pub mod platform;
pub mod value;

pub use bridge::Bridge;
pub use error::{ArgumentError, ArgumentErrorKind, BridgeError};
pub use marshal::{FromArgs, FromValue, IntoValue};
pub use module::{HostFunction, MODULE_NAME};
pub use platform::{PlatformBackend, HARDWARE};
pub use value::{Value, ValueKind};
