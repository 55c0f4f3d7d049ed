//! Rampage - Monsters roaming a graph of cities
//!
//! This crate re-exports all layers of the Rampage system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: rampage_runtime    - Record formats, CLI, session driver
//!          rampage_debug      - Event tracing
//! Layer 2: rampage_engine     - Simulation, randomness, events
//! Layer 1: rampage_storage    - Cities, monsters, world graph, records
//! Layer 0: rampage_foundation - Core types (CityName, MonsterId, Error)
//! ```

pub use rampage_debug as debug;
pub use rampage_engine as engine;
pub use rampage_foundation as foundation;
pub use rampage_runtime as runtime;
pub use rampage_storage as storage;
