//! # Launcher: spawn every command and report one result each.
//!
//! For each [`CommandSpec`], in input order, the launcher assigns the next
//! sequential id (starting at 1), spawns the child non-blockingly, and runs
//! one task that announces the process, pumps both output pipes through its
//! [`LineWriter`]s, waits for exit, and delivers exactly one
//! [`ProcessResult`] into the shared results channel.
//!
//! ## Flow
//! ```text
//! spec ──► spawn
//!   ├─ Err ──► task: deliver Err(Spawn) immediately     (handle has no pid)
//!   └─ Ok  ──► task: announce "Process <path> (#<id>) is running"
//!                    join: wait() + pump(stdout) + pump(stderr)
//!                    deliver Ok / Err(Exit) / Err(Wait)
//! ```
//!
//! ## Rules
//! - A spawn failure never aborts the remaining commands; every spec is
//!   launched unconditionally and independently.
//! - The result is delivered only after both pumps have drained, so a
//!   child's output is fully flushed before its completion is observable.
//! - The column width is read-only here; it was finalized before the first
//!   writer was constructed.

use std::io::Write;
use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::command::CommandSpec;
use crate::core::handle::{ProcessHandle, ProcessResult};
use crate::error::ProcessError;
use crate::writer::{LineWriter, Output};

/// Launches every spec and returns the handles, in input order.
///
/// One task per command lands in `set`; each delivers exactly one
/// [`ProcessResult`] into `results`.
pub(crate) fn spawn_all(
    specs: Vec<CommandSpec>,
    output: &Output,
    logger: &LineWriter,
    width: usize,
    results: &mpsc::Sender<ProcessResult>,
    set: &mut JoinSet<()>,
) -> Vec<ProcessHandle> {
    let mut handles = Vec::with_capacity(specs.len());
    for (index, spec) in specs.into_iter().enumerate() {
        let id = index as u32 + 1;
        handles.push(launch(spec, id, output, logger, width, results, set));
    }
    handles
}

/// Spawns one child and its launch task.
fn launch(
    spec: CommandSpec,
    id: u32,
    output: &Output,
    logger: &LineWriter,
    width: usize,
    results: &mpsc::Sender<ProcessResult>,
    set: &mut JoinSet<()>,
) -> ProcessHandle {
    let name: Arc<str> = Arc::from(spec.name());
    let results = results.clone();

    let mut command = Command::new(spec.program());
    command
        .args(spec.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            set.spawn(async move {
                let _ = results
                    .send(ProcessResult {
                        id,
                        outcome: Err(ProcessError::Spawn { source }),
                    })
                    .await;
            });
            return ProcessHandle::new(id, name, None);
        }
    };

    let pid = child.id();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_writer = LineWriter::new(output.stdout_sink(), Arc::clone(&name), id, width);
    let stderr_writer = LineWriter::new(output.stderr_sink(), Arc::clone(&name), id, width);
    let mut logger = logger.clone();
    let program = spec.program().to_string();

    set.spawn(async move {
        let _ = writeln!(logger, "Process {program} (#{id}) is running");

        let (status, _, _) = tokio::join!(
            child.wait(),
            pump(stdout, stdout_writer),
            pump(stderr, stderr_writer),
        );

        let outcome = match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ProcessError::Exit { status }),
            Err(source) => Err(ProcessError::Wait { source }),
        };
        let _ = results.send(ProcessResult { id, outcome }).await;
    });

    ProcessHandle::new(id, name, pid)
}

/// Copies one child pipe into its writer, chunk by chunk, until EOF.
async fn pump(stream: Option<impl AsyncRead + Unpin>, mut writer: LineWriter) {
    let Some(mut stream) = stream else { return };
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let _ = writer.write(&buf[..n]);
            }
        }
    }
}
