//! Contiguous range partitioning
//!
//! Splits `[0, n)` into one half-open range per worker. Every range except
//! the last holds `n / workers` records; the last absorbs the remainder.

use crate::collections::Sequence;
use crate::error::{AggError, Result};
use std::ops::Range;

/// Half-open range of record indices assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Plan `num_workers` contiguous partitions covering `[0, num_records)`
///
/// When `num_workers > num_records` the leading partitions are empty and
/// the last one carries every record.
pub fn plan_partitions(num_records: usize, num_workers: usize) -> Result<Sequence<Partition>> {
    if num_workers == 0 {
        return Err(AggError::InvalidConfiguration(
            "worker count must be at least 1".to_string(),
        ));
    }

    let base = num_records / num_workers;
    let mut partitions = Sequence::with_capacity(num_workers);

    for i in 0..num_workers {
        let start = i * base;
        let end = if i == num_workers - 1 {
            num_records
        } else {
            (i + 1) * base
        };
        partitions.push(Partition::new(start, end));
    }

    Ok(partitions)
}
