//! Per-range group aggregation
//!
//! `aggregate_range` is the single routine that both the sequential
//! baseline and every parallel worker run. It only reads the records and
//! only writes into the table it is handed.

use crate::collections::{AssocMap, Sequence};
use crate::error::{AggError, Result};
use crate::physical::Partition;

/// Group identifier. Any integer; no contiguity is assumed.
pub type GroupKey = i64;

/// A record the engine can aggregate
pub trait GroupRecord {
    /// Group this record is counted under
    fn group_key(&self) -> GroupKey;

    /// Whether this record counts towards the group's match count
    fn matches(&self) -> bool;
}

impl GroupRecord for (GroupKey, bool) {
    fn group_key(&self) -> GroupKey {
        self.0
    }

    fn matches(&self) -> bool {
        self.1
    }
}

/// Running statistics for one group
///
/// Invariant: `match_count <= count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub count: u64,
    pub match_count: u64,
}

impl GroupStats {
    pub fn new(count: u64, match_count: u64) -> Self {
        Self { count, match_count }
    }

    /// Account for one record
    pub fn update(&mut self, matched: bool) {
        self.count += 1;
        if matched {
            self.match_count += 1;
        }
    }

    /// Fold another partial result into this one
    pub fn merge(&mut self, other: &GroupStats) {
        self.count += other.count;
        self.match_count += other.match_count;
    }
}

/// Hash table: group key -> statistics
pub type GroupTable = AssocMap<GroupKey, GroupStats>;

/// Aggregate `records[range]` into `out`
///
/// Fails with `IndexOutOfRange` if the range reaches past the records.
pub fn aggregate_range<R: GroupRecord>(
    records: &Sequence<R>,
    range: Partition,
    out: &mut GroupTable,
) -> Result<()> {
    for i in range.range() {
        let record = records.at(i)?;
        out.get_or_insert_default(record.group_key())
            .update(record.matches());
    }
    Ok(())
}

/// Single-threaded baseline over every record
pub fn aggregate_sequential<R: GroupRecord>(records: &Sequence<R>) -> Result<GroupTable> {
    let mut table = GroupTable::new();
    aggregate_range(records, Partition::new(0, records.len()), &mut table)?;
    Ok(table)
}

/// Merge a partial table into `target`, additively per key
pub fn merge_tables(target: &mut GroupTable, partial: &GroupTable) {
    for (key, stats) in partial.iter() {
        target.get_or_insert_default(*key).merge(stats);
    }
}

/// Check two tables hold the same keys with the same statistics
///
/// Iteration order is not compared.
pub fn verify_equivalence(expected: &GroupTable, actual: &GroupTable) -> Result<()> {
    for (key, stats) in expected.iter() {
        let other = actual.get(key);
        if other != Some(stats) {
            return Err(AggError::ResultMismatch {
                key: *key,
                expected: Some(*stats),
                actual: other.copied(),
            });
        }
    }

    for (key, stats) in actual.iter() {
        if !expected.contains_key(key) {
            return Err(AggError::ResultMismatch {
                key: *key,
                expected: None,
                actual: Some(*stats),
            });
        }
    }

    Ok(())
}
