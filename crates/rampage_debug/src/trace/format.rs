//! Trace output formatters.

use std::fmt::Write;

use rampage_engine::SimulationEvent;
use rampage_foundation::{Error, ErrorKind, Result};

use super::record::TraceRecord;

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Renders trace records as text.
pub trait TraceFormatter {
    /// Formats a single record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be rendered.
    fn format(&self, record: &TraceRecord) -> Result<String>;

    /// Formats several records, one per line.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`TraceFormatter::format`].
    fn format_many(&self, records: &[&TraceRecord]) -> Result<String> {
        let lines = records
            .iter()
            .map(|r| self.format(r))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn describe(event: &SimulationEvent) -> String {
        match event {
            SimulationEvent::IterationStarted { iteration } => {
                format!("=== ITERATION {iteration} ===")
            }
            SimulationEvent::MonsterPlaced { monster, city } => {
                format!("  PLACE {} ({}) -> {city}", monster.name, monster.id)
            }
            SimulationEvent::MonsterMoved { monster, from, to } => {
                format!("  MOVE {} ({}) {from} -> {to}", monster.name, monster.id)
            }
            SimulationEvent::MonsterTrapped { monster, city } => {
                format!("  TRAPPED {} ({}) in {city}", monster.name, monster.id)
            }
            SimulationEvent::CityDestroyed { .. } => {
                format!("  DESTROYED {}", event.narration().unwrap_or_default())
            }
            SimulationEvent::Finished {
                iterations,
                termination,
            } => {
                format!("=== FINISHED after {iterations} iterations ({termination}) ===")
            }
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> Result<String> {
        let mut line = String::new();

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        let _ = write!(line, "I{:04} ", record.iteration);
        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }
        line.push_str(&Self::describe(&record.event));
        Ok(line)
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON objects.
///
/// Each object carries `id`, `iteration`, `timestamp_ns`, the event `type`
/// and the event's own fields.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn encode<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> Result<String> {
        self.encode(record)
    }

    /// Formats several records as one JSON array.
    fn format_many(&self, records: &[&TraceRecord]) -> Result<String> {
        self.encode(records)
    }
}

// =============================================================================
// Tests
// =============================================================================
