//! # Kernel API
//!
//! This crate defines the interface between the primitive bridge and the
//! kernel supervisor-call layer.
//!
//! ## Philosophy
//!
//! The kernel provides **primitives**, not protocols:
//! - Reading the thread's TLS base address
//! - Connecting to a named port
//! - Sending one synchronous request over a session
//! - Sleeping the calling thread
//!
//! ## Design Goals
//!
//! 1. **One definition, two builds**: [`KernelPrimitives`] is implemented by a
//!    hardware backend and a stub backend; the build picks one.
//! 2. **Pass-through**: result codes come back exactly as the kernel produced them.
//! 3. **Testability**: every caller can be exercised against a recording backend.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An IPC message encoder (request layout belongs to the caller)
//! - A handle lifecycle manager (nothing here closes sessions)

pub mod error;
pub mod kernel;
pub mod svc;
pub mod time;

pub use error::KernelError;
pub use kernel::KernelPrimitives;
pub use time::SleepDuration;
