//! Physical aggregation
//!
//! Leaves first: range partitioning, the per-range aggregation routine
//! shared by every execution path, and the parallel driver.

mod group_agg;
mod parallel_agg;
mod partition;

pub use group_agg::*;
pub use parallel_agg::*;
pub use partition::*;
