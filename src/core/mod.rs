//! Runtime core: launch, completion fan-in, and interrupt forwarding.
//!
//! This module contains the embedded implementation of the procvisor
//! runtime. The only orchestration entry point is [`Supervisor`], which
//! launches every command, multiplexes their completion results, and relays
//! interrupts until no child is outstanding.
//!
//! Internal modules:
//! - [`launcher`]: spawns children and runs one announce/pump/wait task each;
//! - [`supervisor`]: the coordinating select loop over results + interrupts;
//! - [`handle`]: per-process identity and the single-delivery result type;
//! - [`signal`]: OS interrupt subscription.

mod handle;
mod launcher;
mod signal;
mod supervisor;

pub use handle::{Outcome, ProcessHandle, ProcessResult};
pub use supervisor::Supervisor;
