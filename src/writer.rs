//! # Tagged line writer and shared output sinks.
//!
//! [`LineWriter`] wraps an output sink and tags every line written through it
//! with a process name and numeric id, padded so that lines from
//! differently-named processes start at the same column:
//!
//! ```text
//! [parallel#0] Process /usr/bin/sleep (#1) is running
//! [sleep#1]    some output line
//! [sh#2]       another line
//! ```
//!
//! ## Chunk contract
//! A chunk handed to [`LineWriter::write`] may contain zero or more embedded
//! line breaks. Exactly one trailing `\n` is stripped from the whole chunk
//! before splitting, so:
//! - `"a\nb\nc\n"` yields the lines `a`, `b`, `c` (no spurious empty line)
//! - `"a\nb\nc"` yields the same three lines (final partial line included)
//!
//! The call reports the **full original byte count** as consumed even though
//! it performs one sink write per embedded line; callers must not infer write
//! atomicity from the return value.
//!
//! ## Sharing
//! Sinks are `Mutex`-guarded and shared between the supervisor's own logger
//! and every child's two writers. Each logical line is one guarded write, so
//! concurrent writers interleave at line granularity and never mid-line.
//!
//! ## Rules
//! - The column width is computed once, before any writer exists, by
//!   [`column_width`]. Writers only ever read it.
//! - Padding is `max(0, width - len(name))` spaces between the tag and the
//!   line body.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::command::CommandSpec;

/// Shared, mutex-guarded output sink.
pub type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// The supervisor-process output streams child writers are bound to.
///
/// Child stdout goes to `stdout`; child stderr and the supervisor's own log
/// lines go to `stderr`. Both are swappable, which is how the end-to-end
/// tests capture the interleaved log.
#[derive(Clone)]
pub struct Output {
    stdout: SharedSink,
    stderr: SharedSink,
}

impl Output {
    /// Binds to the real process stdout/stderr.
    pub fn standard() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Binds to arbitrary sinks.
    pub fn new(stdout: impl Write + Send + 'static, stderr: impl Write + Send + 'static) -> Self {
        Self {
            stdout: Arc::new(Mutex::new(stdout)),
            stderr: Arc::new(Mutex::new(stderr)),
        }
    }

    /// Returns the sink child stdout streams are written to.
    pub fn stdout_sink(&self) -> SharedSink {
        Arc::clone(&self.stdout)
    }

    /// Returns the sink child stderr streams and supervisor lines are written to.
    pub fn stderr_sink(&self) -> SharedSink {
        Arc::clone(&self.stderr)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::standard()
    }
}

/// Computes the shared name column width.
///
/// The width is the maximum of the supervisor's own label length and every
/// display name's length. It must be fully computed before the first writer
/// is constructed; the launch pass runs strictly after this one.
///
/// # Example
/// ```
/// use procvisor::{CommandSpec, column_width};
///
/// let specs = vec![CommandSpec::parse("verylongname").unwrap()];
/// assert_eq!(column_width("parallel", &specs), 12);
/// assert_eq!(column_width("parallel", &[]), 8);
/// ```
pub fn column_width(label: &str, specs: &[CommandSpec]) -> usize {
    specs
        .iter()
        .map(|spec| spec.name().len())
        .fold(label.len(), usize::max)
}

/// Line-prefixing writer bound to one process name/id.
///
/// Implements [`std::io::Write`]; every line in a written chunk comes out as
/// `[<name>#<id>] <padding><line>\n` on the underlying sink.
///
/// # Example
/// ```
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use procvisor::LineWriter;
///
/// let buf = Arc::new(Mutex::new(Vec::new()));
/// let sink: Arc<Mutex<dyn Write + Send>> = buf.clone();
///
/// let mut writer = LineWriter::new(sink, "web", 1, 8);
/// writer.write(b"hello\nworld\n").unwrap();
///
/// let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
/// assert_eq!(out, "[web#1]      hello\n[web#1]      world\n");
/// ```
#[derive(Clone)]
pub struct LineWriter {
    sink: SharedSink,
    name: Arc<str>,
    id: u32,
    width: usize,
}

impl LineWriter {
    /// Creates a writer tagging lines with `name` and `id`, padded to `width`.
    pub fn new(sink: SharedSink, name: impl Into<Arc<str>>, id: u32, width: usize) -> Self {
        Self {
            sink,
            name: name.into(),
            id,
            width,
        }
    }

    /// Formats one tagged record: `[<name>#<id>] <padding><line>\n`.
    fn record(&self, line: &[u8]) -> Vec<u8> {
        let pad = self.width.saturating_sub(self.name.len());
        let mut record = Vec::with_capacity(self.name.len() + pad + line.len() + 16);
        record.extend_from_slice(b"[");
        record.extend_from_slice(self.name.as_bytes());
        record.extend_from_slice(b"#");
        record.extend_from_slice(self.id.to_string().as_bytes());
        record.extend_from_slice(b"] ");
        record.resize(record.len() + pad, b' ');
        record.extend_from_slice(line);
        record.push(b'\n');
        record
    }
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = buf.strip_suffix(b"\n").unwrap_or(buf);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        for line in chunk.split(|byte| *byte == b'\n') {
            sink.write_all(&self.record(line))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    // One formatted message must land as one tagged line, so the arguments
    // are rendered into a single chunk before hitting `write`.
    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.write_all(args.to_string().as_bytes())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SharedBuf;
    use super::*;

    fn writer(buf: &SharedBuf, name: &str, id: u32, width: usize) -> LineWriter {
        LineWriter::new(
            Arc::new(Mutex::new(buf.clone())),
            name.to_string(),
            id,
            width,
        )
    }

    #[test]
    fn test_terminated_chunk_has_no_trailing_empty_line() {
        let buf = SharedBuf::default();
        let n = writer(&buf, "echo", 1, 4).write(b"a\nb\nc\n").unwrap();
        assert_eq!(n, 6, "full chunk length must be reported");
        assert_eq!(buf.contents(), "[echo#1] a\n[echo#1] b\n[echo#1] c\n");
    }

    #[test]
    fn test_unterminated_chunk_keeps_final_partial_line() {
        let buf = SharedBuf::default();
        let n = writer(&buf, "echo", 1, 4).write(b"a\nb\nc").unwrap();
        assert_eq!(n, 5);
        assert_eq!(buf.contents(), "[echo#1] a\n[echo#1] b\n[echo#1] c\n");
    }

    #[test]
    fn test_only_one_trailing_terminator_is_stripped() {
        let buf = SharedBuf::default();
        writer(&buf, "echo", 1, 4).write(b"a\n\n").unwrap();
        assert_eq!(buf.contents(), "[echo#1] a\n[echo#1] \n");
    }

    #[test]
    fn test_empty_chunk_yields_one_empty_line() {
        let buf = SharedBuf::default();
        writer(&buf, "echo", 1, 4).write(b"").unwrap();
        assert_eq!(buf.contents(), "[echo#1] \n");
    }

    #[test]
    fn test_padding_aligns_different_name_lengths() {
        let buf = SharedBuf::default();
        writer(&buf, "sh", 1, 8).write(b"one").unwrap();
        writer(&buf, "parallel", 0, 8).write(b"two").unwrap();

        let log = buf.contents();
        let columns: Vec<usize> = log
            .lines()
            .map(|line| line.find(|c| c == 'o' || c == 't').unwrap())
            .collect();
        assert_eq!(columns[0], columns[1], "lines must start at the same column:\n{log}");
        assert_eq!(log, "[sh#1]       one\n[parallel#0] two\n");
    }

    #[test]
    fn test_width_never_truncates_long_names() {
        let buf = SharedBuf::default();
        writer(&buf, "longername", 3, 4).write(b"x").unwrap();
        assert_eq!(buf.contents(), "[longername#3] x\n");
    }

    #[test]
    fn test_write_fmt_lands_as_one_line() {
        let buf = SharedBuf::default();
        let mut w = writer(&buf, "parallel", 0, 8);
        writeln!(w, "Process {} (#{}) is running", "/bin/echo", 1).unwrap();
        assert_eq!(buf.contents(), "[parallel#0] Process /bin/echo (#1) is running\n");
    }

    #[test]
    fn test_column_width_baseline_is_the_label() {
        let specs = vec![
            CommandSpec::parse("echo hi").unwrap(),
            CommandSpec::parse("/usr/bin/sleep 1").unwrap(),
        ];
        assert_eq!(column_width("parallel", &specs), 8);

        let specs = vec![CommandSpec::parse("averylongexecutable").unwrap()];
        assert_eq!(column_width("parallel", &specs), 19);
    }
}
