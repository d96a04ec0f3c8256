//! Build-time backend selection
//!
//! The target decides the backend. There is no runtime switch and the
//! fallback build does not link the supervisor-call wrappers at all.

/// Whether this build dispatches to the real kernel
pub const HARDWARE: bool = cfg!(all(target_arch = "aarch64", target_os = "horizon"));

/// Backend used by [`Bridge::platform`](crate::Bridge::platform)
#[cfg(all(target_arch = "aarch64", target_os = "horizon"))]
pub type PlatformBackend = hal_aarch64::HardwareBackend;

/// Backend used by [`Bridge::platform`](crate::Bridge::platform)
#[cfg(not(all(target_arch = "aarch64", target_os = "horizon")))]
pub type PlatformBackend = sim_kernel::StubBackend;
