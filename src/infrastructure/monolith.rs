//! Line-oriented monolith file I/O.
//!
//! Format: one record per line, `id parent_id name…`. The name is the
//! remainder of the line and may contain whitespace or be empty. The root
//! record carries the sentinel token in place of a parent id.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{CladeId, Record};
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{RecordSink, RecordSource};

/// Parse one monolith line. `line_no` is 1-based and only used for errors.
pub fn parse_record(line: &str, sentinel: &str, line_no: u64) -> InfraResult<Record> {
    let mut fields = line.split_whitespace();
    let (id, parent) = match (fields.next(), fields.next()) {
        (Some(id), Some(parent)) => (id, parent),
        _ => {
            return Err(InfraError::Malformed {
                line: line_no,
                content: line.to_string(),
            })
        }
    };
    let name = fields.collect::<Vec<_>>().join(" ");
    let parent = if parent == sentinel {
        None
    } else {
        Some(CladeId::from(parent))
    };
    Ok(Record::new(id, parent, name))
}

/// Render one record as a monolith line (without trailing newline).
pub fn format_record(record: &Record, sentinel: &str) -> String {
    let parent = record
        .parent
        .as_ref()
        .map_or(sentinel, |p| p.as_str());
    if record.name.is_empty() {
        format!("{} {}", record.id, parent)
    } else {
        format!("{} {} {}", record.id, parent, record.name)
    }
}

/// Record source backed by a monolith file on disk.
pub struct MonolithFile {
    path: PathBuf,
    sentinel: String,
}

impl MonolithFile {
    pub fn new(path: impl Into<PathBuf>, sentinel: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sentinel: sentinel.into(),
        }
    }
}

impl RecordSource for MonolithFile {
    fn scan(&mut self) -> InfraResult<Vec<Record>> {
        let file = File::open(&self.path)
            .map_err(|e| InfraError::io(format!("open {}", self.path.display()), e))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| InfraError::io(format!("read {}", self.path.display()), e))?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&line, &self.sentinel, idx as u64 + 1)?);
        }
        debug!("scanned {}: {} records", self.path.display(), records.len());
        Ok(records)
    }
}

/// Record sink writing one partition to a monolith file.
pub struct MonolithWriter {
    path: PathBuf,
    sentinel: String,
    writer: BufWriter<File>,
}

impl MonolithWriter {
    pub fn create(path: impl Into<PathBuf>, sentinel: impl Into<String>) -> InfraResult<Self> {
        let path = path.into();
        let file = File::create(&path)
            .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
        Ok(Self {
            path,
            sentinel: sentinel.into(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for MonolithWriter {
    fn write(&mut self, record: &Record) -> InfraResult<()> {
        writeln!(self.writer, "{}", format_record(record, &self.sentinel))
            .map_err(|e| InfraError::io(format!("write {}", self.path.display()), e))
    }

    fn finish(&mut self) -> InfraResult<()> {
        self.writer
            .flush()
            .map_err(|e| InfraError::io(format!("flush {}", self.path.display()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_line_with_spaced_name_when_parsing_then_name_keeps_internal_whitespace() {
        let record = parse_record("17f498 17f43f Homo sapiens", "-", 1).unwrap();

        assert_eq!(record.id.as_str(), "17f498");
        assert_eq!(record.parent.as_ref().unwrap().as_str(), "17f43f");
        assert_eq!(record.name, "Homo sapiens");
    }

    #[test]
    fn given_sentinel_parent_when_parsing_then_record_is_root() {
        let record = parse_record("000000 - Life", "-", 1).unwrap();

        assert!(record.parent.is_none());
    }

    #[test]
    fn given_two_fields_when_parsing_then_name_is_empty() {
        let record = parse_record("17f499 17f43f", "-", 7).unwrap();

        assert_eq!(record.name, "");
    }

    #[test]
    fn given_short_line_when_parsing_then_errors_with_line_number() {
        let err = parse_record("lonely", "-", 42).unwrap_err();

        assert!(matches!(err, InfraError::Malformed { line: 42, .. }));
    }

    #[test]
    fn given_record_when_formatting_then_line_parses_back_unchanged() {
        let record = Record::new("a1", Some("b2".into()), "Canis lupus");

        let line = format_record(&record, "-");
        let reparsed = parse_record(&line, "-", 1).unwrap();

        assert_eq!(reparsed, record);
    }

    #[test]
    fn given_root_record_when_formatting_then_sentinel_is_written() {
        let record = Record::new("000000", None, "Life");

        assert_eq!(format_record(&record, "-"), "000000 - Life");
    }
}
