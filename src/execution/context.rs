//! Execution context - main entry point for running aggregations

use crate::collections::Sequence;
use crate::error::Result;
use crate::physical::{
    aggregate_parallel, aggregate_sequential, verify_equivalence, GroupRecord, GroupTable,
};
use std::time::{Duration, Instant};
use tracing::info;

/// Timings for one sequential-vs-parallel comparison
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Number of records aggregated
    pub records: usize,
    /// Workers used by the parallel run
    pub workers: usize,
    /// Time spent in the sequential baseline
    pub sequential_time: Duration,
    /// Time spent in the parallel run, including spawn, join and merge
    pub parallel_time: Duration,
}

impl RunMetrics {
    /// Sequential time divided by parallel time
    pub fn speedup(&self) -> f64 {
        let parallel = self.parallel_time.as_secs_f64();
        if parallel == 0.0 {
            return 0.0;
        }
        self.sequential_time.as_secs_f64() / parallel
    }
}

/// Both results of a comparison, already checked to be equal
#[derive(Debug)]
pub struct ComparisonResult {
    pub sequential: GroupTable,
    pub parallel: GroupTable,
    pub metrics: RunMetrics,
}

/// Execution context - holds run configuration and dispatches aggregations
#[derive(Debug, Clone)]
pub struct AggregationContext {
    /// Number of worker threads for parallel runs (defaults to CPU count)
    workers: usize,
}

impl Default for AggregationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationContext {
    pub fn new() -> Self {
        Self {
            workers: rayon::current_num_threads(),
        }
    }

    /// Set the number of worker threads for parallel runs
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Use exactly `workers`, without clamping; zero is rejected at run time
    pub fn with_exact_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn sequential<R: GroupRecord>(&self, records: &Sequence<R>) -> Result<GroupTable> {
        aggregate_sequential(records)
    }

    pub fn parallel<R: GroupRecord + Sync>(&self, records: &Sequence<R>) -> Result<GroupTable> {
        aggregate_parallel(records, self.workers)
    }

    /// Run both paths, time them, and check they agree
    pub fn compare<R: GroupRecord + Sync>(&self, records: &Sequence<R>) -> Result<ComparisonResult> {
        let start = Instant::now();
        let sequential = self.sequential(records)?;
        let sequential_time = start.elapsed();

        let start = Instant::now();
        let parallel = self.parallel(records)?;
        let parallel_time = start.elapsed();

        verify_equivalence(&sequential, &parallel)?;

        let metrics = RunMetrics {
            records: records.len(),
            workers: self.workers,
            sequential_time,
            parallel_time,
        };

        info!(
            records = metrics.records,
            workers = metrics.workers,
            groups = parallel.len(),
            sequential_ms = metrics.sequential_time.as_secs_f64() * 1000.0,
            parallel_ms = metrics.parallel_time.as_secs_f64() * 1000.0,
            "aggregation comparison finished"
        );

        Ok(ComparisonResult {
            sequential,
            parallel,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StudentGenerator;
    use crate::error::AggError;

    #[test]
    fn test_default_workers() {
        assert!(AggregationContext::new().workers() >= 1);
        assert_eq!(AggregationContext::new().with_workers(0).workers(), 1);
    }

    #[test]
    fn test_compare_students() {
        let students = StudentGenerator::new(20).generate(2_000).unwrap();
        let ctx = AggregationContext::new().with_workers(4);

        let result = ctx.compare(&students).unwrap();

        assert_eq!(result.metrics.records, 2_000);
        assert_eq!(result.metrics.workers, 4);
        let total: u64 = result.parallel.iter().map(|(_, s)| s.count).sum();
        assert_eq!(total, 2_000);
    }

    #[test]
    fn test_exact_zero_workers_fails() {
        let records: Sequence<(i64, bool)> = [(1, false)].into_iter().collect();
        let ctx = AggregationContext::new().with_exact_workers(0);
        assert!(matches!(
            ctx.compare(&records),
            Err(AggError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_speedup() {
        let metrics = RunMetrics {
            sequential_time: Duration::from_millis(40),
            parallel_time: Duration::from_millis(10),
            ..Default::default()
        };
        assert!((metrics.speedup() - 4.0).abs() < 1e-9);
        assert_eq!(RunMetrics::default().speedup(), 0.0);
    }
}
