//! Domain layer: entities and tree algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod closure;
pub mod entities;
pub mod error;
pub mod partition;
pub mod tree;

pub use closure::{ancestors_of, descendants_of};
pub use entities::{CladeId, Node, Record};
pub use error::{DomainError, DomainResult};
pub use partition::{partition, Partition};
pub use tree::Taxonomy;
