//! Cities, monsters, and the world graph for Rampage.
//!
//! This crate provides:
//! - [`Monster`] and [`MonsterCollection`] - Monsters and keyed monster sets
//! - [`City`] and [`Capacity`] - Graph nodes that destroy themselves when full
//! - [`World`] and [`Road`] - The directed city graph
//! - [`WorldRecord`] and [`build_world`] - Record-driven graph construction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod city;
pub mod monster;
pub mod record;
pub mod world;

pub use city::{Capacity, City};
pub use monster::{Monster, MonsterCollection};
pub use record::{
    Exit, RecordSink, RecordSource, RemainingRecords, WorldRecord, build_world, remaining_records,
};
pub use world::{Road, World};
