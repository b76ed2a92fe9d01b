//! Application services

pub mod split;

pub use split::{SplitReport, SplitService};
