//! Partitioned parallel aggregation
//!
//! Implements parallel aggregation with thread-local state:
//! - Records are split into one contiguous partition per worker
//! - Each worker owns its own hash table, so aggregation needs no locks
//! - After every worker is joined, the tables are merged on the calling thread

use crate::collections::Sequence;
use crate::error::{AggError, Result};
use crate::physical::{aggregate_range, merge_tables, plan_partitions, GroupRecord, GroupTable};
use std::thread;
use tracing::debug;

/// Aggregate `records` on `num_workers` freshly spawned threads
///
/// Threads are scoped to this call and all of them are joined before the
/// merge starts. If any worker fails or panics the whole run fails and no
/// partial table is returned.
pub fn aggregate_parallel<R>(records: &Sequence<R>, num_workers: usize) -> Result<GroupTable>
where
    R: GroupRecord + Sync,
{
    let partitions = plan_partitions(records.len(), num_workers)?;
    let mut local_tables: Sequence<GroupTable> = Sequence::with_default_slots(num_workers);

    debug!(
        records = records.len(),
        workers = num_workers,
        "starting partitioned aggregation"
    );

    let outcomes = thread::scope(|scope| -> Result<Sequence<Result<()>>> {
        let mut handles = Sequence::with_capacity(num_workers);

        for (worker, (partition, table)) in partitions
            .iter()
            .copied()
            .zip(local_tables.iter_mut())
            .enumerate()
        {
            let handle = thread::Builder::new()
                .name(format!("agg-worker-{}", worker))
                .spawn_scoped(scope, move || {
                    debug!(worker, start = partition.start, end = partition.end, "worker started");
                    aggregate_range(records, partition, table)
                })?;
            handles.push(handle);
        }

        // Join barrier: every worker finishes before anything is merged
        Ok(handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(AggError::WorkerPanicked { worker }))
            })
            .collect())
    })?;

    for outcome in outcomes {
        outcome?;
    }

    let mut global = GroupTable::new();
    for (worker, local) in local_tables.iter().enumerate() {
        debug!(worker, groups = local.len(), "merging local table");
        merge_tables(&mut global, local);
    }

    Ok(global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::{aggregate_sequential, verify_equivalence, GroupStats, GroupKey};

    #[test]
    fn test_two_workers_scenario() {
        let records: Sequence<(GroupKey, bool)> =
            [(1, true), (1, false), (2, true)].into_iter().collect();

        let table = aggregate_parallel(&records, 2).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&1), Some(&GroupStats::new(2, 1)));
        assert_eq!(table.get(&2), Some(&GroupStats::new(1, 1)));
    }

    #[test]
    fn test_zero_workers() {
        let records: Sequence<(GroupKey, bool)> = [(1, true)].into_iter().collect();
        assert!(matches!(
            aggregate_parallel(&records, 0),
            Err(AggError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_matches_sequential() {
        let records: Sequence<(GroupKey, bool)> = (0..1000i64)
            .map(|i| ((i * 7919) % 13 - 6, i % 3 == 0))
            .collect();
        let expected = aggregate_sequential(&records).unwrap();

        for workers in [1, 2, 3, 7, 16, 999, 1000, 1500] {
            let actual = aggregate_parallel(&records, workers).unwrap();
            verify_equivalence(&expected, &actual).unwrap();
        }
    }

    #[test]
    fn test_empty_input() {
        let records: Sequence<(GroupKey, bool)> = Sequence::new();
        let table = aggregate_parallel(&records, 4).unwrap();
        assert!(table.is_empty());
    }

    struct Exploding;

    impl GroupRecord for Exploding {
        fn group_key(&self) -> GroupKey {
            panic!("record cannot be read")
        }

        fn matches(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_worker_panic_fails_run() {
        let records: Sequence<Exploding> = [Exploding].into_iter().collect();
        assert!(matches!(
            aggregate_parallel(&records, 1),
            Err(AggError::WorkerPanicked { worker: 0 })
        ));
    }
}
