//! Error types used by the procvisor runtime and launched processes.
//!
//! This module defines two main error enums:
//!
//! - [`RuntimeError`] — errors raised by the supervisor runtime itself.
//! - [`ProcessError`] — errors raised by individual child processes.
//!
//! Both types provide `as_label` helpers for logging/metrics. Per-process
//! errors never abort the supervisor: they are carried through the results
//! channel and surfaced as a single log line by the completion loop.

use std::process::ExitStatus;

use thiserror::Error;

/// # Errors produced by the supervisor runtime.
///
/// These represent failures in the coordination layer itself, as opposed to
/// failures of the supervised children.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A command string produced zero tokens. Rejected before the launcher
    /// runs; an empty command has no executable to spawn.
    #[error("empty command: expected at least one token")]
    EmptyCommand,

    /// Registering the OS interrupt listener failed.
    #[error("failed to subscribe to the interrupt signal: {source}")]
    SignalSubscribe {
        /// The underlying registration error.
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use procvisor::RuntimeError;
    ///
    /// assert_eq!(RuntimeError::EmptyCommand.as_label(), "empty_command");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::EmptyCommand => "empty_command",
            RuntimeError::SignalSubscribe { .. } => "signal_subscribe",
        }
    }
}

/// # Errors produced by one child process.
///
/// Every launched command delivers exactly one outcome; these variants are
/// the error side of it. The taxonomy mirrors the process lifecycle: the
/// child could not be started, the wait call itself failed, or the child ran
/// and exited abnormally.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The executable could not be started (not found, permission denied).
    #[error("failed to start: {source}")]
    Spawn {
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child to exit failed.
    #[error("failed to wait: {source}")]
    Wait {
        /// The underlying wait error.
        #[source]
        source: std::io::Error,
    },

    /// The child exited abnormally (non-zero status or terminated by signal).
    #[error("{status}")]
    Exit {
        /// The terminal exit status.
        status: ExitStatus,
    },
}

impl ProcessError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use procvisor::ProcessError;
    ///
    /// let err = ProcessError::Spawn { source: std::io::Error::other("boom") };
    /// assert_eq!(err.as_label(), "process_spawn");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ProcessError::Spawn { .. } => "process_spawn",
            ProcessError::Wait { .. } => "process_wait",
            ProcessError::Exit { .. } => "process_exit",
        }
    }
}
