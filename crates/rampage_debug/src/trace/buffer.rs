//! Ring buffer for trace records.
//!
//! Holds the most recent records up to a fixed size and answers queries by
//! iteration and event type.

use std::collections::{HashMap, VecDeque};

use rampage_engine::SimulationEvent;

use super::record::TraceRecord;

// =============================================================================
// Trace Buffer
// =============================================================================

/// A bounded buffer of trace records, oldest first.
///
/// Pushing past `max_size` discards the oldest record. Record IDs keep
/// increasing across evictions and clears.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Size used by [`TraceBuffer::default`].
    pub const DEFAULT_SIZE: usize = 10_000;

    /// Creates a buffer holding at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Appends an event and returns the assigned record ID.
    pub fn push(&mut self, iteration: u64, timestamp_ns: u64, event: SimulationEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, iteration, timestamp_ns, event));
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over the records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Returns the records of one iteration.
    #[must_use]
    pub fn records_for_iteration(&self, iteration: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.iteration == iteration)
    }

    /// Returns the records of an inclusive iteration range.
    #[must_use]
    pub fn records_in_range(&self, first: u64, last: u64) -> Vec<&TraceRecord> {
        self.filter(|r| (first..=last).contains(&r.iteration))
    }

    /// Returns the most recent `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns the records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns the records of one event type, e.g. `"city-destroyed"`.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns the oldest iteration in the buffer.
    #[must_use]
    pub fn oldest_iteration(&self) -> Option<u64> {
        self.records.front().map(|r| r.iteration)
    }

    /// Returns the newest iteration in the buffer.
    #[must_use]
    pub fn newest_iteration(&self) -> Option<u64> {
        self.records.back().map(|r| r.iteration)
    }

    /// Returns the distinct iterations in the buffer, ascending.
    #[must_use]
    pub fn iterations(&self) -> Vec<u64> {
        let mut iterations: Vec<u64> = self.records.iter().map(|r| r.iteration).collect();
        iterations.dedup();
        iterations
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_iteration: self.oldest_iteration(),
            newest_iteration: self.newest_iteration(),
            iteration_count: self.iterations().len(),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest iteration in buffer.
    pub oldest_iteration: Option<u64>,
    /// Newest iteration in buffer.
    pub newest_iteration: Option<u64>,
    /// Number of distinct iterations.
    pub iteration_count: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
