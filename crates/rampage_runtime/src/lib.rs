//! Record formats, CLI, and session driver for Rampage.
//!
//! This crate provides:
//! - [`TextReader`] / [`TextWriter`] - The plain-text map format
//! - [`MsgPackReader`] / [`MsgPackWriter`] - The `MessagePack` record stream
//! - [`NarrationWriter`] - Destruction messages as an event sink
//! - [`Session`] - Read a map, run a simulation, write what is left
//! - [`CliConfig`] - Command-line parsing for the `rampage` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod format;
pub mod narration;
pub mod serialize;
pub mod session;
pub mod telemetry;

pub use cli::{CliConfig, DEFAULT_MAP, help_text};
pub use format::{TextReader, TextWriter, parse_line};
pub use narration::NarrationWriter;
pub use serialize::{MsgPackReader, MsgPackWriter, from_bytes, to_bytes};
pub use session::{Outcome, RecordFormat, Session, SessionConfig};
pub use telemetry::init_telemetry;
