//! rstax: split a huge flat taxonomy into a fast-loading core and a
//! slow-loading remainder.
//!
//! The domain layer builds the tree from unordered `id parent_id name` records,
//! computes ancestor/descendant closures of a designated clade, and performs a
//! depth-bounded pre-order partition that keeps that clade in full. The
//! infrastructure layer handles the monolith line format; the application layer
//! wires source → build → partition → sinks.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{SplitReport, SplitService};
pub use domain::{ancestors_of, descendants_of, partition, CladeId, Record, Taxonomy};
