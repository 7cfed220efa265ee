//! Line-oriented output destinations.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Receives one rendered line per committed entry.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str);
}

/// Writes each line to standard output.
///
/// A closed pipe is ignored; other write errors are reported as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = writeln!(lock, "{line}")
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            log::warn!("failed to write log line: {e}");
        }
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
