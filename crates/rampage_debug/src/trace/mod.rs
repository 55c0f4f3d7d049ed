//! Tracing of simulation events.
//!
//! A [`Tracer`] is an [`EventSink`]: hand it to a simulation (alone or paired
//! with another sink) and it records every event with the iteration it
//! happened in. Recording does nothing while the tracer is disabled.
//!
//! # Example
//!
//! ```
//! use rampage_debug::{Tracer, TracerConfig};
//! use rampage_engine::{Simulation, SimulationConfig};
//! use rampage_storage::{Capacity, City, World};
//!
//! let mut world = World::new();
//! world.add_city(City::new("Foo", Capacity::Limited(2)));
//!
//! let config = SimulationConfig::new().with_monster_count(1).with_seed(3);
//! let tracer = Tracer::new(TracerConfig::new().enabled());
//! let mut sim = Simulation::new(world, &config, tracer).unwrap();
//! sim.run().unwrap();
//!
//! let tracer = sim.into_sink();
//! assert_eq!(tracer.buffer().by_event_type("monster-trapped").len(), 1);
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::TraceRecord;

use std::io::{self, Write};
use std::time::Instant;

use rampage_engine::{EventSink, SimulationEvent};
use rampage_foundation::Result;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it arrives.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Event types to keep (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: TraceBuffer::DEFAULT_SIZE,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to keep only some event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records simulation events into a [`TraceBuffer`].
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_iteration: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_iteration: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the iteration the tracer is currently attributing events to.
    #[must_use]
    pub fn current_iteration(&self) -> u64 {
        self.current_iteration
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    fn record_internal(&mut self, event: &SimulationEvent) -> Result<()> {
        if let SimulationEvent::IterationStarted { iteration } = event {
            self.current_iteration = *iteration;
        }

        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return Ok(());
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer
            .push(self.current_iteration, timestamp_ns, event.clone());

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record)?;
                writeln!(io::stderr().lock(), "{line}")?;
            }
        }
        Ok(())
    }

    /// Formats a record using the current format settings.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn format_record(&self, record: &TraceRecord) -> Result<String> {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats several records using the current format settings.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn format_records(&self, records: &[&TraceRecord]) -> Result<String> {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl EventSink for Tracer {
    #[inline]
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }
        self.record_internal(event)
    }
}

// =============================================================================
// Tests
// =============================================================================
