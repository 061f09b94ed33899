//! # Process handles and completion results.
//!
//! [`ProcessHandle`] is the supervisor-side record of one spawned child: its
//! assigned id, display name, and OS pid. Handles are owned by the
//! supervisor for their whole lifetime; the completion loop removes them as
//! results arrive and the interrupt forwarder only ever signals them.
//!
//! [`ProcessResult`] is the single terminal report for one handle, produced
//! exactly once by its launch task and consumed exactly once by the
//! completion loop.

use std::sync::Arc;

use crate::error::ProcessError;

/// Terminal outcome of one launched command.
pub type Outcome = Result<(), ProcessError>;

/// The one completion report a launch task delivers for its handle.
#[derive(Debug)]
pub struct ProcessResult {
    /// Id of the handle this result belongs to.
    pub id: u32,
    /// Exit outcome: `Ok` for a clean zero exit, `Err` otherwise.
    pub outcome: Outcome,
}

/// Supervisor-side record of one spawned child.
///
/// Ids are positive, unique, and assigned in input order starting at 1.
/// `pid` is `None` when the spawn itself failed; such a handle is only ever
/// removed by its (immediate) failure result and never signalled.
#[derive(Clone, Debug)]
pub struct ProcessHandle {
    id: u32,
    name: Arc<str>,
    pid: Option<u32>,
}

impl ProcessHandle {
    pub(crate) fn new(id: u32, name: Arc<str>, pid: Option<u32>) -> Self {
        Self { id, name, pid }
    }

    /// Returns the assigned id (1-based, input order).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display name used as this child's log tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the OS pid, or `None` when the spawn failed.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Sends an interrupt to this child individually.
    ///
    /// Delivery is best-effort: a child that already exited is simply no
    /// longer there to signal, and that case is tolerated silently. The
    /// signal goes to the child's pid, never to the supervisor's own process
    /// group.
    #[cfg(unix)]
    pub(crate) fn interrupt(&self) {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        if let Some(pid) = self.pid {
            let _ = kill(Pid::from_raw(pid as i32), Signal::SIGINT);
        }
    }

    /// Sends an interrupt to this child individually.
    ///
    /// No per-process interrupt is available on this platform; forwarding is
    /// a no-op and children run to completion on their own.
    #[cfg(not(unix))]
    pub(crate) fn interrupt(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_spawn_handle_is_never_signalled() {
        let handle = ProcessHandle::new(1, Arc::from("ghost"), None);
        assert_eq!(handle.pid(), None);
        // With no pid there is nothing to signal; must not panic.
        handle.interrupt();
    }

    #[test]
    fn test_handle_exposes_identity() {
        let handle = ProcessHandle::new(3, Arc::from("sleep"), Some(42));
        assert_eq!(handle.id(), 3);
        assert_eq!(handle.name(), "sleep");
        assert_eq!(handle.pid(), Some(42));
    }
}
