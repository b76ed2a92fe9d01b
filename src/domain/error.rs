//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::CladeId;

/// Domain errors represent structural violations in the taxonomy.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate clade id: {0}")]
    DuplicateId(CladeId),

    #[error("clade {id} references missing parent: {parent}")]
    MissingParent { id: CladeId, parent: CladeId },

    #[error("invalid tree structure: {0}")]
    Structure(String),

    #[error("unknown clade id: {0}")]
    UnknownNode(CladeId),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
