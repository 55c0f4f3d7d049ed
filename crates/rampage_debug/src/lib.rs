//! Event tracing for Rampage.
//!
//! This crate provides:
//! - [`Tracer`] - An [`EventSink`](rampage_engine::EventSink) that buffers
//!   simulation events by iteration and optionally echoes them to stderr
//! - [`TraceBuffer`] - Bounded ring buffer of trace records
//! - [`HumanFormatter`] and [`JsonFormatter`] - Output formats

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceFormatter, TraceOutput,
    TraceRecord, Tracer, TracerConfig,
};
