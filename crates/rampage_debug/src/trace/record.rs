//! Trace records.

use rampage_engine::SimulationEvent;
use serde::{Deserialize, Serialize};

/// A timestamped simulation event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The iteration during which the event occurred (0 during placement).
    #[serde(rename = "at_iteration")]
    pub iteration: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The event.
    #[serde(flatten)]
    pub event: SimulationEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, iteration: u64, timestamp_ns: u64, event: SimulationEvent) -> Self {
        Self {
            id,
            iteration,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }

    /// Returns true if this record marks the start of an iteration.
    #[must_use]
    pub fn is_iteration_boundary(&self) -> bool {
        matches!(self.event, SimulationEvent::IterationStarted { .. })
    }
}
