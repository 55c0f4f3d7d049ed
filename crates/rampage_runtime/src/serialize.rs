//! `MessagePack` record format.
//!
//! A stream is a plain concatenation of records, each encoded with named
//! fields. Readers decode one record at a time and stop cleanly at the end of
//! input.

use std::io::{BufRead, Write};

use rampage_foundation::{Error, ErrorKind, Result};
use rampage_storage::{RecordSink, RecordSource, WorldRecord};

fn serialization_error(e: impl ToString) -> Error {
    Error::new(ErrorKind::Serialization(e.to_string()))
}

/// Serializes records to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(records: &[WorldRecord]) -> Result<Vec<u8>> {
    let mut writer = MsgPackWriter::new(Vec::new());
    writer.write_records(records.iter().cloned().map(Ok))?;
    Ok(writer.into_inner())
}

/// Deserializes records from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a record stream.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<WorldRecord>> {
    MsgPackReader::new(bytes).records().collect()
}

/// Reads a `MessagePack` record stream lazily.
#[derive(Debug)]
pub struct MsgPackReader<R> {
    reader: R,
    failed: bool,
}

impl<R: BufRead> MsgPackReader<R> {
    /// Creates a reader over buffered input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for MsgPackReader<R> {
    type Item = Result<WorldRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let decoded = match self.reader.fill_buf() {
            Ok(buf) if buf.is_empty() => return None,
            Ok(_) => rmp_serde::from_read(&mut self.reader).map_err(serialization_error),
            Err(e) => Err(Error::from(e)),
        };
        self.failed = decoded.is_err();
        Some(decoded)
    }
}

impl<R: BufRead> RecordSource for MsgPackReader<R> {
    type Records = Self;

    fn records(self) -> Self::Records {
        self
    }
}

/// Writes records as a `MessagePack` stream.
#[derive(Debug)]
pub struct MsgPackWriter<W> {
    writer: W,
}

impl<W: Write> MsgPackWriter<W> {
    /// Creates a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the writer and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for MsgPackWriter<W> {
    fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<WorldRecord>>,
    {
        for record in records {
            rmp_serde::encode::write_named(&mut self.writer, &record?)
                .map_err(serialization_error)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
