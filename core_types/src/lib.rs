//! # Core Types
//!
//! This crate defines the value types exchanged between the scripting host,
//! the primitive bridge and the kernel backends.
//!
//! ## Philosophy
//!
//! Every value crossing the supervisor-call boundary is a plain integer on the
//! wire. Wrapping each one in its own type keeps a channel handle from being
//! passed where a result code is expected:
//! - **Opaque tokens**: handles and TLS addresses carry no meaning outside the kernel.
//! - **Pass-through codes**: result codes are decoded for display only, never rewritten.
//!
//! ## Key Types
//!
//! - [`ChannelHandle`]: One end of an IPC session
//! - [`TlsPointer`]: Base address of the calling thread's TLS region
//! - [`ResultCode`]: 32-bit kernel status value

pub mod ids;
pub mod result;

pub use ids::{ChannelHandle, TlsPointer};
pub use result::{kernel_result, ResultCode};
