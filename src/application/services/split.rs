//! Monolith split service
//!
//! Orchestrates the full pipeline: scan the record source, build the taxonomy,
//! partition it around the override clade, and stream both partitions into
//! their sinks.

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{partition, CladeId, Taxonomy};
use crate::infrastructure::traits::{RecordSink, RecordSource};

/// Counts reported after a completed split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Total records ingested from the source
    pub total: usize,
    /// Records emitted to the core sink, in traversal order
    pub core: usize,
    /// Records emitted to the remainder sink
    pub remainder: usize,
    /// Root determined during graph construction
    pub root: CladeId,
}

/// Service splitting one monolith into core and remainder partitions.
pub struct SplitService {
    override_clade: CladeId,
    max_depth: u32,
    /// Traversal root; defaults to the true tree root
    root: Option<CladeId>,
}

impl SplitService {
    pub fn new(override_clade: CladeId, max_depth: u32) -> Self {
        Self {
            override_clade,
            max_depth,
            root: None,
        }
    }

    /// Anchor the core traversal at a node other than the true root.
    pub fn with_root(mut self, root: CladeId) -> Self {
        self.root = Some(root);
        self
    }

    /// Run the split: source → build → partition → two sinks.
    ///
    /// The core sink receives its records in pre-order traversal order; the
    /// remainder sink receives the leftover candidate set.
    #[instrument(skip_all)]
    pub fn split(
        &self,
        source: &mut dyn RecordSource,
        core_sink: &mut dyn RecordSink,
        remainder_sink: &mut dyn RecordSink,
    ) -> ApplicationResult<SplitReport> {
        let records = source
            .scan()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "scan record source".into(),
                source: Box::new(e),
            })?;
        let total = records.len();
        debug!("scanned {total} records");

        let tree = Taxonomy::build(records)?;
        let root = self.root.clone().unwrap_or_else(|| tree.root().clone());

        let split = partition(&tree, &root, &self.override_clade, self.max_depth)?;

        for record in &split.core_records {
            core_sink
                .write(record)
                .map_err(|e| ApplicationError::OperationFailed {
                    context: "write core partition".into(),
                    source: Box::new(e),
                })?;
        }
        core_sink
            .finish()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "finish core partition".into(),
                source: Box::new(e),
            })?;

        for id in &split.remainder {
            let record = tree.record_of(id)?;
            remainder_sink
                .write(&record)
                .map_err(|e| ApplicationError::OperationFailed {
                    context: "write remainder partition".into(),
                    source: Box::new(e),
                })?;
        }
        remainder_sink
            .finish()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "finish remainder partition".into(),
                source: Box::new(e),
            })?;

        Ok(SplitReport {
            total,
            core: split.core_records.len(),
            remainder: split.remainder.len(),
            root,
        })
    }
}
