//! Error types for the Rampage system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every [`ErrorKind`] belongs to one [`ErrorCategory`], which tells the
//! caller whether the failure is a local capacity rejection, a broken graph,
//! a broken collection invariant, or bad input.

use std::fmt;

use thiserror::Error;

use crate::ids::{CityName, MonsterId};

/// Result type alias for Rampage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Rampage operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating it if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Labels where this error came from, keeping any existing context.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a city-full error.
    #[must_use]
    pub fn city_full(city: CityName, capacity: usize) -> Self {
        Self::new(ErrorKind::CityFull { city, capacity })
    }

    /// Creates an already-destroyed error.
    #[must_use]
    pub fn already_destroyed(city: CityName) -> Self {
        Self::new(ErrorKind::CityAlreadyDestroyed(city))
    }

    /// Creates an unknown city error.
    #[must_use]
    pub fn unknown_city(city: CityName) -> Self {
        Self::new(ErrorKind::UnknownCity(city))
    }

    /// Creates a duplicate monster error.
    #[must_use]
    pub fn duplicate_monster(id: MonsterId) -> Self {
        Self::new(ErrorKind::DuplicateMonster(id))
    }

    /// Creates a monster not found error.
    #[must_use]
    pub fn monster_not_found(id: MonsterId) -> Self {
        Self::new(ErrorKind::MonsterNotFound(id))
    }

    /// Creates a parse error at the given line.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
        })
        .with_context(ErrorContext::new().with_line(line))
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A city rejected an admission because it was already at capacity.
    #[error("city {city} is full (capacity {capacity})")]
    CityFull {
        /// The city that rejected the monster.
        city: CityName,
        /// The city's capacity.
        capacity: usize,
    },

    /// A city was destroyed a second time.
    #[error("city {0} is already destroyed")]
    CityAlreadyDestroyed(CityName),

    /// A road or location refers to a city missing from the world.
    #[error("city not found: {0}")]
    UnknownCity(CityName),

    /// A monster with this id is already in the collection.
    #[error("monster {0} already exists")]
    DuplicateMonster(MonsterId),

    /// A monster with this id is not in the collection.
    #[error("monster {0} not found")]
    MonsterNotFound(MonsterId),

    /// A raw capacity value outside the accepted range.
    #[error("invalid capacity {0}: expected -1 (unlimited) or a non-negative count")]
    InvalidCapacity(i64),

    /// Malformed record input.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// Invalid command-line usage.
    #[error("usage error: {0}")]
    Usage(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CityFull { .. } => ErrorCategory::Capacity,
            Self::CityAlreadyDestroyed(_) | Self::UnknownCity(_) => ErrorCategory::Structural,
            Self::DuplicateMonster(_) | Self::MonsterNotFound(_) => ErrorCategory::Collection,
            Self::InvalidCapacity(_)
            | Self::Parse { .. }
            | Self::Usage(_)
            | Self::Io(_)
            | Self::Serialization(_) => ErrorCategory::Input,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }
}

/// Broad classification of errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A city refused a monster because it was already over-full.
    Capacity,
    /// The graph and the occupancy model disagree.
    Structural,
    /// A keyed monster collection was misused.
    Collection,
    /// Bad input, configuration or IO.
    Input,
    /// Should not happen.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity => write!(f, "capacity"),
            Self::Structural => write!(f, "structural"),
            Self::Collection => write!(f, "collection"),
            Self::Input => write!(f, "input"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or stream label.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Stack of operations that were running.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
