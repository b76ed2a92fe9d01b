//! I/O boundary traits for monolith records.
//!
//! The application layer depends on these seams, never on concrete files, so
//! the split service can be tested against in-memory sources and sinks.

use crate::domain::Record;
use crate::infrastructure::error::InfraResult;

/// Supplies the flat records of one monolith, in unspecified order.
pub trait RecordSource {
    /// Full scan yielding every record exactly once.
    fn scan(&mut self) -> InfraResult<Vec<Record>>;
}

/// Append-only sequential writer for one partition.
///
/// Sinks must not reorder or deduplicate; they persist records exactly as
/// handed over.
pub trait RecordSink {
    fn write(&mut self, record: &Record) -> InfraResult<()>;

    /// Flush any buffered records. Called once after the last write.
    fn finish(&mut self) -> InfraResult<()> {
        Ok(())
    }
}

/// In-memory sink, mainly a test seam.
#[derive(Debug, Default)]
pub struct VecSink {
    pub records: Vec<Record>,
}

impl RecordSink for VecSink {
    fn write(&mut self, record: &Record) -> InfraResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// In-memory source, mainly a test seam.
#[derive(Debug)]
pub struct VecSource {
    records: Vec<Record>,
}

impl VecSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for VecSource {
    fn scan(&mut self) -> InfraResult<Vec<Record>> {
        Ok(self.records.clone())
    }
}
