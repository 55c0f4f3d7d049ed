//! Plain-text record format.
//!
//! One city per line: the city name followed by space-separated
//! `direction=Destination` pairs.
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! Blank lines are skipped and surrounding whitespace is ignored.

use std::io::{BufRead, Lines, Write};

use rampage_foundation::{Error, ErrorContext, ErrorKind, Result};
use rampage_storage::{RecordSink, RecordSource, WorldRecord};

// =============================================================================
// Reading
// =============================================================================

/// Parses one non-blank line into a record.
///
/// # Errors
///
/// Returns a parse error carrying `line_number` if a pair has no `=`, more
/// than one `=`, or an empty side.
pub fn parse_line(line: &str, line_number: usize) -> Result<WorldRecord> {
    let mut fields = line.split_whitespace();
    let city = fields
        .next()
        .ok_or_else(|| Error::parse("expected a city name", line_number))?;

    let mut record = WorldRecord::new(city);
    for pair in fields {
        let (label, destination) = pair.split_once('=').ok_or_else(|| {
            Error::parse(
                format!("expected direction=destination, found {pair:?}"),
                line_number,
            )
        })?;
        if label.is_empty() || destination.is_empty() || destination.contains('=') {
            return Err(Error::parse(
                format!("malformed road {pair:?} leaving {city}"),
                line_number,
            ));
        }
        record = record.with_exit(label, destination);
    }
    Ok(record)
}

/// Reads text records lazily, one line at a time.
#[derive(Debug)]
pub struct TextReader<R> {
    lines: Lines<R>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> TextReader<R> {
    /// Creates a reader over buffered input.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for TextReader<R> {
    type Item = Result<WorldRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    let context = ErrorContext::new().with_line(self.line_number + 1);
                    return Some(Err(Error::from(e).with_context(context)));
                }
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let parsed = parse_line(trimmed, self.line_number);
            self.failed = parsed.is_err();
            return Some(parsed);
        }
    }
}

impl<R: BufRead> RecordSource for TextReader<R> {
    type Records = Self;

    fn records(self) -> Self::Records {
        self
    }
}

// =============================================================================
// Writing
// =============================================================================

/// Writes records as text, one line each.
#[derive(Debug)]
pub struct TextWriter<W> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Creates a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the writer and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, record: &WorldRecord) -> Result<()> {
        check_token(record.city.as_str(), false)?;
        write!(self.writer, "{}", record.city)?;
        for exit in &record.exits {
            check_token(&exit.label, true)?;
            check_token(exit.destination.as_str(), true)?;
            write!(self.writer, " {}={}", exit.label, exit.destination)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Rejects names the reader could not parse back.
fn check_token(token: &str, in_pair: bool) -> Result<()> {
    let unreadable = token.is_empty()
        || token.chars().any(char::is_whitespace)
        || (in_pair && token.contains('='));
    if unreadable {
        return Err(Error::new(ErrorKind::Serialization(format!(
            "{token:?} cannot be written in the text format"
        ))));
    }
    Ok(())
}

impl<W: Write> RecordSink for TextWriter<W> {
    fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<WorldRecord>>,
    {
        for record in records {
            self.write_record(&record?)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
