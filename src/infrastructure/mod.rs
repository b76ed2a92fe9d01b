//! Infrastructure layer: monolith file I/O
//!
//! This layer implements the record source/sink boundary traits.

pub mod error;
pub mod monolith;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use monolith::{MonolithFile, MonolithWriter};
pub use traits::{RecordSink, RecordSource, VecSink, VecSource};
