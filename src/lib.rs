//! Partitioned group aggregation
//!
//! Computes per-group record and match counts over a record sequence, once
//! on a single thread and once split across worker threads that each fill a
//! private table, merged after all workers are joined.

pub mod collections;
pub mod data;
pub mod error;
pub mod execution;
pub mod physical;
pub mod report;

// Re-export main types
pub use collections::{AssocMap, Sequence};
pub use error::{AggError, Result};
pub use execution::{AggregationContext, ComparisonResult, RunMetrics};
pub use physical::{
    aggregate_parallel, aggregate_sequential, GroupKey, GroupRecord, GroupStats, GroupTable,
    Partition,
};
