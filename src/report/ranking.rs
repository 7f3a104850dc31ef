//! Top-N group ranking

use crate::error::Result;
use crate::physical::{GroupKey, GroupTable};
use arrow::array::{Float64Array, Int64Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// One ranked group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRank {
    pub key: GroupKey,
    pub match_count: u64,
    pub count: u64,
    /// Share of matching records, 0..=100
    pub percentage: f64,
}

/// Rank groups by match count, highest first, and keep the top `top_n`
///
/// Groups without records are skipped. Ties are broken by the smaller key
/// so the output does not depend on table iteration order.
pub fn rank_groups(table: &GroupTable, top_n: usize) -> Vec<GroupRank> {
    let mut ranks: Vec<GroupRank> = table
        .iter()
        .filter(|(_, stats)| stats.count > 0)
        .map(|(key, stats)| GroupRank {
            key: *key,
            match_count: stats.match_count,
            count: stats.count,
            percentage: stats.match_count as f64 / stats.count as f64 * 100.0,
        })
        .collect();

    ranks.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then_with(|| a.key.cmp(&b.key))
    });
    ranks.truncate(top_n);
    ranks
}

/// Schema of the ranking batch
pub fn ranking_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("rank", DataType::UInt64, false),
        Field::new("school_id", DataType::Int64, false),
        Field::new("perfect_students", DataType::UInt64, false),
        Field::new("total_students", DataType::UInt64, false),
        Field::new("percentage", DataType::Float64, false),
    ]))
}

/// Build an Arrow batch from rankings, in order
pub fn rankings_to_batch(ranks: &[GroupRank]) -> Result<RecordBatch> {
    let position: UInt64Array = (1..=ranks.len() as u64).collect();
    let keys: Int64Array = ranks.iter().map(|r| r.key).collect();
    let matches: UInt64Array = ranks.iter().map(|r| r.match_count).collect();
    let counts: UInt64Array = ranks.iter().map(|r| r.count).collect();
    // One decimal place, as displayed
    let percentages: Float64Array = ranks
        .iter()
        .map(|r| (r.percentage * 10.0).round() / 10.0)
        .collect();

    let batch = RecordBatch::try_new(
        ranking_schema(),
        vec![
            Arc::new(position),
            Arc::new(keys),
            Arc::new(matches),
            Arc::new(counts),
            Arc::new(percentages),
        ],
    )?;
    Ok(batch)
}
