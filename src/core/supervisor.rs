//! # Supervisor: completion fan-in and interrupt forwarding.
//!
//! The [`Supervisor`] owns the runtime configuration and the output sinks.
//! It computes the shared column width, launches every command, and then
//! drives a single coordinating loop until each child has reported exactly
//! one result.
//!
//! ## High-level architecture
//! ```text
//! Inputs to run():
//!   Vec<CommandSpec>  ──►  Supervisor::run(specs)
//!
//! Preparation (fully sequential, before any concurrent task):
//!   - column_width(label, specs)      ← every writer reads this value
//!   - results channel (one slot per command)
//!   - interrupt subscription (signal::subscribe)
//!
//! Launch:
//!   spec #1 ... spec #N ──► launcher::spawn_all ──► JoinSet of launch tasks
//!                                                   Vec<ProcessHandle>
//!
//! Coordinating loop (until no handle is outstanding):
//!   select! {
//!     result    → log "process throws an error: ..." on Err, shrink set
//!     interrupt → log "Interrupt signal received", SIGINT each outstanding
//!   }
//!
//! Teardown:
//!   join all launch tasks ──► log "All processes were closed"
//! ```
//!
//! ## Rules
//! - Exactly one result is observed per launched command; the loop ends only
//!   when the outstanding count reaches zero.
//! - There is no global timeout: a child that ignores the interrupt keeps
//!   the supervisor alive indefinitely.
//! - An interrupt never short-circuits the wait; it only relays the signal.
//! - Completion order is arbitrary; removing a completed handle does not
//!   disturb the still-pending ones.

use std::io::Write;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::command::CommandSpec;
use crate::config::Config;
use crate::core::handle::{ProcessHandle, ProcessResult};
use crate::core::{launcher, signal};
use crate::error::RuntimeError;
use crate::writer::{LineWriter, Output, column_width};

/// Coordinates launch, completion fan-in, and interrupt forwarding.
pub struct Supervisor {
    cfg: Config,
    output: Output,
}

impl Supervisor {
    /// Creates a supervisor bound to the real process stdout/stderr.
    pub fn new(cfg: Config) -> Self {
        Self::with_output(cfg, Output::standard())
    }

    /// Creates a supervisor bound to the given sinks.
    ///
    /// This is how embedders (and the end-to-end tests) capture the
    /// interleaved log instead of printing it.
    pub fn with_output(cfg: Config, output: Output) -> Self {
        Self { cfg, output }
    }

    /// Runs every command to completion, relaying OS interrupts.
    ///
    /// Subscribes to the interrupt signal once, launches all commands, and
    /// returns after every child has reported and the final
    /// `All processes were closed` line was written. Child failures are
    /// surfaced as log lines, never as an error return: the only error here
    /// is a failed interrupt subscription, raised before anything spawns.
    pub async fn run(&self, specs: Vec<CommandSpec>) -> Result<(), RuntimeError> {
        let interrupts = signal::subscribe()?;
        self.run_with_interrupts(specs, interrupts).await
    }

    /// Runs with an injected interrupt source.
    ///
    /// Each message on `interrupts` counts as one delivery of the external
    /// interrupt notification.
    pub(crate) async fn run_with_interrupts(
        &self,
        specs: Vec<CommandSpec>,
        mut interrupts: mpsc::Receiver<()>,
    ) -> Result<(), RuntimeError> {
        // Width pass first: single writer, no concurrent readers yet.
        let width = column_width(self.cfg.label(), &specs);
        let mut logger = LineWriter::new(self.output.stderr_sink(), self.cfg.label(), 0, width);

        let capacity = self.cfg.results_capacity_for(specs.len());
        let (results_tx, mut results_rx) = mpsc::channel(capacity);

        let mut set = JoinSet::new();
        let mut active: Vec<ProcessHandle> =
            launcher::spawn_all(specs, &self.output, &logger, width, &results_tx, &mut set);
        drop(results_tx);

        while !active.is_empty() {
            tokio::select! {
                result = results_rx.recv() => match result {
                    Some(ProcessResult { id, outcome }) => {
                        if let Err(err) = outcome {
                            let _ = writeln!(logger, "process throws an error: {err}");
                        }
                        active.retain(|handle| handle.id() != id);
                    }
                    // Every launch task sends exactly once; a closed channel
                    // with handles still active cannot leave results behind.
                    None => break,
                },
                Some(()) = interrupts.recv() => {
                    let _ = writeln!(logger, "Interrupt signal received");
                    for handle in &active {
                        handle.interrupt();
                    }
                }
            }
        }

        while set.join_next().await.is_some() {}
        let _ = writeln!(logger, "All processes were closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::{sleep, timeout};

    use super::*;
    use crate::writer::testing::SharedBuf;

    fn supervisor_with_buffer() -> (Supervisor, SharedBuf) {
        let buf = SharedBuf::default();
        let output = Output::new(buf.clone(), buf.clone());
        (Supervisor::with_output(Config::default(), output), buf)
    }

    fn specs(commands: &[&str]) -> Vec<CommandSpec> {
        commands
            .iter()
            .map(|raw| CommandSpec::parse(raw).unwrap())
            .collect()
    }

    /// Interrupt source that never fires.
    fn no_interrupts() -> mpsc::Receiver<()> {
        mpsc::channel(1).1
    }

    #[tokio::test]
    async fn test_no_commands_still_emits_final_line() {
        let (sup, buf) = supervisor_with_buffer();
        sup.run_with_interrupts(Vec::new(), no_interrupts())
            .await
            .unwrap();
        assert_eq!(buf.contents(), "[parallel#0] All processes were closed\n");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_runs_all_commands_and_tags_their_output() {
        let (sup, buf) = supervisor_with_buffer();
        sup.run_with_interrupts(specs(&["echo hello", "echo world"]), no_interrupts())
            .await
            .unwrap();

        let log = buf.contents();
        assert!(log.contains("[parallel#0] Process echo (#1) is running"), "{log}");
        assert!(log.contains("[parallel#0] Process echo (#2) is running"), "{log}");
        assert!(log.contains("[echo#1]     hello"), "{log}");
        assert!(log.contains("[echo#2]     world"), "{log}");
        assert!(log.trim_end().ends_with("All processes were closed"), "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_output_columns_align_across_name_lengths() {
        let (sup, buf) = supervisor_with_buffer();
        sup.run_with_interrupts(specs(&["echo one", "printf two"]), no_interrupts())
            .await
            .unwrap();

        let log = buf.contents();
        let columns: Vec<usize> = log
            .lines()
            .filter(|line| line.ends_with("one") || line.ends_with("two"))
            .map(|line| line.len() - 3)
            .collect();
        assert_eq!(columns.len(), 2, "{log}");
        assert_eq!(columns[0], columns[1], "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_unterminated_final_line_is_kept() {
        let (sup, buf) = supervisor_with_buffer();
        // printf leaves the last line without a terminator.
        sup.run_with_interrupts(specs(&[r"printf a\nb"]), no_interrupts())
            .await
            .unwrap();

        let log = buf.contents();
        assert!(log.contains("[printf#1]   a\n"), "{log}");
        assert!(log.contains("[printf#1]   b\n"), "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_launch_failure_does_not_stop_other_commands() {
        let (sup, buf) = supervisor_with_buffer();
        sup.run_with_interrupts(
            specs(&["procvisor-no-such-binary", "echo survived"]),
            no_interrupts(),
        )
        .await
        .unwrap();

        let log = buf.contents();
        assert!(log.contains("process throws an error: failed to start:"), "{log}");
        assert!(log.contains("survived"), "{log}");
        assert!(log.trim_end().ends_with("All processes were closed"), "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_nonzero_exit_is_reported_and_run_completes() {
        let (sup, buf) = supervisor_with_buffer();
        sup.run_with_interrupts(specs(&["false"]), no_interrupts())
            .await
            .unwrap();

        let log = buf.contents();
        assert!(log.contains("process throws an error: exit status: 1"), "{log}");
        assert!(log.trim_end().ends_with("All processes were closed"), "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_interrupt_signals_outstanding_children() {
        let (sup, buf) = supervisor_with_buffer();
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            sleep(Duration::from_millis(300)).await;
            let _ = tx.send(()).await;
        });

        let run = sup.run_with_interrupts(specs(&["sleep 30", "sleep 30"]), rx);
        timeout(Duration::from_secs(10), run)
            .await
            .expect("interrupted children must still complete the run")
            .unwrap();

        let log = buf.contents();
        assert!(log.contains("[parallel#0] Interrupt signal received"), "{log}");
        // Both sleeps die to SIGINT and report a signal-terminated status.
        assert_eq!(
            log.matches("process throws an error:").count(),
            2,
            "{log}"
        );
        assert!(log.trim_end().ends_with("All processes were closed"), "{log}");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_interrupt_after_completion_is_harmless() {
        let (sup, buf) = supervisor_with_buffer();
        let (tx, rx) = mpsc::channel(1);

        // One child exits immediately, the other outlives the interrupt.
        tokio::spawn(async move {
            sleep(Duration::from_millis(400)).await;
            let _ = tx.send(()).await;
        });

        let run = sup.run_with_interrupts(specs(&["true", "sleep 30"]), rx);
        timeout(Duration::from_secs(10), run)
            .await
            .expect("supervisor must not hang")
            .unwrap();

        let log = buf.contents();
        assert!(log.contains("Interrupt signal received"), "{log}");
        // Only the still-running sleep reports an error.
        assert_eq!(log.matches("process throws an error:").count(), 1, "{log}");
    }
}
