//! Opaque identifiers handed out by the kernel

use serde::{Deserialize, Serialize};
use std::fmt;

/// One end of an IPC connection
///
/// Handles are issued by the kernel when connecting to a named port and are
/// consumed by synchronous requests. The bridge never opens or closes them;
/// their lifetime belongs to whoever holds the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelHandle(u32);

impl ChannelHandle {
    /// The handle value reported by the fallback backend for every connection
    pub const PLACEHOLDER: ChannelHandle = ChannelHandle(1);

    /// Wraps a raw kernel handle value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw kernel handle value
    pub const fn as_raw(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ChannelHandle {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.0)
    }
}

/// Base address of the calling thread's TLS region
///
/// On real hardware this points into the per-thread control structure the
/// kernel maintains. Treat it as a token: the bridge never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TlsPointer(u64);

impl TlsPointer {
    /// Wraps a raw address
    pub const fn from_addr(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the address as an unsigned 64-bit integer
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TlsPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tls({:#018x})", self.0)
    }
}
