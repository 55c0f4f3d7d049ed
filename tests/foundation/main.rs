//! Integration tests for Layer 0: Foundation
//!
//! Tests for identifiers and error types.

mod ids;
