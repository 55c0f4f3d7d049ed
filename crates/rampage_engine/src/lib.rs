//! Simulation engine, randomness, and events for Rampage.
//!
//! This crate provides:
//! - [`Simulation`] - Moves monsters, destroys cities, decides termination
//! - [`RandomSource`] - Injectable uniform choice, seeded by default
//! - [`MonsterNamer`] - Display names for new monsters
//! - [`SimulationEvent`] and [`EventSink`] - What happened, and where it goes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod event;
pub mod naming;
pub mod random;
pub mod simulation;

pub use config::SimulationConfig;
pub use event::{EventSink, MonsterRef, SimulationEvent, Termination, narrate};
pub use naming::{MonsterNamer, SyllableNamer};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use simulation::{RunSummary, Simulation};
