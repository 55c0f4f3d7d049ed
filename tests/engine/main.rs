//! Integration tests for Layer 2: Engine
//!
//! Tests for simulation scenarios, events, and engine invariants.

mod events;
