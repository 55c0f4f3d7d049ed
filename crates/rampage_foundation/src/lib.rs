//! Core identifiers and error types for Rampage.
//!
//! This crate provides:
//! - [`CityName`] - Unique, cheaply clonable city identifiers
//! - [`MonsterId`] - Caller-assigned monster identifiers
//! - [`Error`] - Rich error types with context and a category taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;

pub use error::{Error, ErrorCategory, ErrorContext, ErrorKind, Result};
pub use ids::{CityName, MonsterId};
