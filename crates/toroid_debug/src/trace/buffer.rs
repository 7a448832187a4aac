//! Ring buffer for trace records.

use std::collections::VecDeque;

use toroid_foundation::Vector;
use toroid_language::{IpId, Outcome};

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Buffer
// =============================================================================

/// A bounded buffer of the most recent trace records.
///
/// When full, the oldest record is discarded for each new one. Record ids
/// keep increasing across evictions and clears.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a buffer holding at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Appends an event and returns its record ID.
    pub fn push(&mut self, tick: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.max_size == 0 {
            return id;
        }
        if self.records.len() == self.max_size {
            self.records.pop_front();
        }
        self.records
            .push_back(TraceRecord::new(id, tick, timestamp_ns, event));
        id
    }

    /// The most recently pushed record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
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

    /// Maximum number of records kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Clears all records. IDs keep increasing.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over all records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns records for a specific tick.
    #[must_use]
    pub fn records_for_tick(&self, tick: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.tick == tick)
    }

    /// Returns the most recent `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns records concerning one IP.
    #[must_use]
    pub fn by_ip(&self, ip: IpId) -> Vec<&TraceRecord> {
        self.filter(|r| r.event.ip() == Some(ip))
    }

    /// Returns the steps and string pushes that touched one cell.
    #[must_use]
    pub fn at_position(&self, position: Vector) -> Vec<&TraceRecord> {
        self.filter(|r| match r.event {
            TraceEvent::Step { position: p, .. } | TraceEvent::StringPush { position: p, .. } => {
                p == position
            }
            _ => false,
        })
    }

    /// Counts what the buffered records describe.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        let mut summary = TraceSummary {
            records: self.records.len(),
            ..TraceSummary::default()
        };
        let mut last_tick = None;
        for record in &self.records {
            if last_tick != Some(record.tick) {
                summary.ticks += 1;
                last_tick = Some(record.tick);
            }
            match record.event {
                TraceEvent::Step { outcome, .. } => {
                    summary.steps += 1;
                    if outcome == Outcome::Reflect {
                        summary.reflections += 1;
                    }
                }
                TraceEvent::StringPush { .. } => summary.steps += 1,
                TraceEvent::Fork { .. } => summary.forks += 1,
                TraceEvent::Terminate { .. } => summary.terminations += 1,
                _ => {}
            }
        }
        summary
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Counts over the records currently buffered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Records in the buffer.
    pub records: usize,
    /// Distinct ticks covered.
    pub ticks: usize,
    /// Dispatched cells, string pushes included.
    pub steps: usize,
    /// Steps that reflected.
    pub reflections: usize,
    /// IPs created.
    pub forks: usize,
    /// IPs stopped.
    pub terminations: usize,
}

// =============================================================================
// Tests
// =============================================================================
