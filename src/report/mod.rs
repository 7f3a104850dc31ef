//! Ranking and rendering of aggregated groups
//!
//! Provides:
//! - Top-N ranking of groups by match count
//! - Conversion of rankings into an Arrow batch
//! - Output formats (table, CSV)

mod output;
mod ranking;

pub use output::*;
pub use ranking::*;
