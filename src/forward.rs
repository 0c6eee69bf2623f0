//! Fire-and-forget forwarding of created records to a secondary sink.
//!
//! Forwarding is best-effort: a failed forward is surfaced to the caller as
//! an explicit [`ForwardOutcome::Failed`] to report and ignore. It never
//! fails the operation that produced the record.

use crate::model::Record;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    Delivered,
    Failed(String),
}

pub trait Forwarder {
    /// Hand a freshly created record to the sink. Must not panic and must
    /// not block beyond ordinary blocking I/O.
    fn forward(&self, record: &Record) -> ForwardOutcome;
}

/// Appends records as JSON lines to a spool file for later ingestion.
pub struct SpoolForwarder {
    spool_path: PathBuf,
}

impl SpoolForwarder {
    pub fn new(spool_path: PathBuf) -> Self {
        Self { spool_path }
    }
}

impl Forwarder for SpoolForwarder {
    fn forward(&self, record: &Record) -> ForwardOutcome {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => return ForwardOutcome::Failed(e.to_string()),
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.spool_path)
            .and_then(|mut file| writeln!(file, "{}", line));
        match result {
            Ok(()) => ForwardOutcome::Delivered,
            Err(e) => ForwardOutcome::Failed(e.to_string()),
        }
    }
}
