//! # procvisor
//!
//! **Procvisor** is a parallel process supervisor for Rust.
//!
//! Given a list of shell command strings, it launches each as an independent
//! child process, tags and interleaves their stdout/stderr streams into a
//! single column-aligned log, waits for every child to terminate, and relays
//! an external interrupt to each still-running child.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ CommandSpec  │   │ CommandSpec  │   │ CommandSpec  │
//!     │ (command #1) │   │ (command #2) │   │ (command #3) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Supervisor (coordinating loop)                                   │
//! │  - column width computed up front (sequential pass)               │
//! │  - results channel (mpsc, one slot per command)                   │
//! │  - active set of ProcessHandles                                   │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ launch task  │   │ launch task  │   │ launch task  │
//!     │ announce,    │   │ announce,    │   │ announce,    │
//!     │ pump, wait   │   │ pump, wait   │   │ pump, wait   │
//!     └┬─────────────┘   └┬─────────────┘   └┬─────────────┘
//!      │ one              │ one              │ one
//!      │ ProcessResult    │ ProcessResult    │ ProcessResult
//!      ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    results channel (mpsc)                         │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                     Supervisor::run select loop
//!                     ├─ result  → log error (if any), shrink set
//!                     └─ SIGINT  → log, signal every outstanding child
//! ```
//!
//! ### Lifecycle
//! ```text
//! CommandSpec[] ──► Supervisor::run()
//!
//!   ├─► compute column width from label + every display name
//!   ├─► spawn all children (input order, ids from 1)
//!   │     ├─ spawn failed  → deliver Err(Spawn) as the one result
//!   │     └─ spawn ok      → task: announce, pump stdout/stderr,
//!   │                              wait, deliver the one result
//!   ├─► loop until no handle is outstanding:
//!   │     ├─ result arrives → log "process throws an error: ..." on Err
//!   │     └─ interrupt      → log, SIGINT each outstanding child
//!   ├─► join all launch tasks
//!   └─► log "All processes were closed"
//! ```
//!
//! ## Log surface
//! Every line is tagged `[<name>#<id>] ` and padded so that output from
//! differently-named processes starts at the same column. The supervisor's
//! own lines use the configured label and id `0`.
//!
//! ## Example
//! ```no_run
//! use procvisor::{CommandSpec, Config, Supervisor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let specs = vec![
//!         CommandSpec::parse("echo hello")?,
//!         CommandSpec::parse("echo world")?,
//!     ];
//!     Supervisor::new(Config::default()).run(specs).await?;
//!     Ok(())
//! }
//! ```
mod command;
mod config;
mod core;
mod error;
mod writer;

// ---- Public re-exports ----

pub use command::CommandSpec;
pub use config::Config;
pub use core::{Outcome, ProcessHandle, ProcessResult, Supervisor};
pub use error::{ProcessError, RuntimeError};
pub use writer::{LineWriter, Output, SharedSink, column_width};
