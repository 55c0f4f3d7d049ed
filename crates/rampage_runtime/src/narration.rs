//! Destruction narration.

use std::io::Write;

use rampage_engine::{EventSink, SimulationEvent};
use rampage_foundation::Result;

/// Writes one line per destroyed city and ignores every other event.
///
/// ```text
/// Foo has been destroyed by monster Ahu and monster Ebo!
/// ```
#[derive(Debug)]
pub struct NarrationWriter<W> {
    writer: W,
    lines: usize,
}

impl<W: Write> NarrationWriter<W> {
    /// Creates a narrator writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Returns how many destructions have been narrated.
    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Consumes the narrator and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for NarrationWriter<W> {
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        if let Some(line) = event.narration() {
            writeln!(self.writer, "{line}")?;
            self.lines += 1;
        }
        if let SimulationEvent::Finished { .. } = event {
            self.writer.flush()?;
        }
        Ok(())
    }
}
