//! Integration tests for Layer 1: Storage
//!
//! Tests for cities, the world graph, and world records.

mod cities;
mod records;
mod world;
