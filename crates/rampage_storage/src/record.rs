//! World records: the format-neutral shape of a city and its outgoing roads.
//!
//! Format adapters turn bytes into [`WorldRecord`]s ([`RecordSource`]) and
//! back ([`RecordSink`]); the world itself never sees a concrete format.

use std::iter::Map;
use std::vec;

use rampage_foundation::{CityName, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::city::{Capacity, City};
use crate::world::{Road, World};

/// One outgoing road as it appears in a record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exit {
    /// Direction label.
    pub label: String,
    /// Destination city.
    pub destination: CityName,
}

impl Exit {
    /// Creates an exit.
    #[must_use]
    pub fn new(label: impl Into<String>, destination: impl Into<CityName>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
        }
    }
}

/// A city and the roads leading out of it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldRecord {
    /// The city this record describes.
    pub city: CityName,
    /// Outgoing roads, in order.
    pub exits: Vec<Exit>,
}

impl WorldRecord {
    /// Creates a record with no exits.
    #[must_use]
    pub fn new(city: impl Into<CityName>) -> Self {
        Self {
            city: city.into(),
            exits: Vec::new(),
        }
    }

    /// Builder method to append an exit.
    #[must_use]
    pub fn with_exit(mut self, label: impl Into<String>, destination: impl Into<CityName>) -> Self {
        self.exits.push(Exit::new(label, destination));
        self
    }

    /// Returns this record's exits as roads.
    pub fn roads(&self) -> impl Iterator<Item = Road> + '_ {
        self.exits
            .iter()
            .map(|exit| Road::new(exit.label.clone(), self.city.clone(), exit.destination.clone()))
    }
}

/// Produces a lazy, single-pass sequence of records.
pub trait RecordSource {
    /// The record iterator.
    type Records: Iterator<Item = Result<WorldRecord>>;

    /// Consumes the source and returns its records.
    fn records(self) -> Self::Records;
}

/// Consumes a sequence of records.
pub trait RecordSink {
    /// Writes every record, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `records` or raised while writing.
    fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<WorldRecord>>;
}

impl RecordSource for Vec<WorldRecord> {
    type Records = Map<vec::IntoIter<WorldRecord>, fn(WorldRecord) -> Result<WorldRecord>>;

    fn records(self) -> Self::Records {
        self.into_iter().map(Ok as fn(WorldRecord) -> Result<WorldRecord>)
    }
}

impl RecordSink for Vec<WorldRecord> {
    fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<WorldRecord>>,
    {
        for record in records {
            self.push(record?);
        }
        Ok(())
    }
}

/// Builds a world from a stream of records.
///
/// Every record city becomes a city with the given capacity. Destinations
/// that have not been seen yet are created on the spot, so records may refer
/// to cities described later (or never). A city described twice keeps its
/// first entry and gains the roads of both.
///
/// # Errors
///
/// Returns the first error yielded by `records`.
pub fn build_world<I>(records: I, capacity: Capacity) -> Result<World>
where
    I: IntoIterator<Item = Result<WorldRecord>>,
{
    let mut world = World::new();
    for record in records {
        let record = record?;
        world.add_city(City::new(record.city.clone(), capacity));
        for exit in record.exits {
            if !world.contains_city(exit.destination.as_str()) {
                world.add_city(City::new(exit.destination.clone(), capacity));
            }
            world.add_road(Road::new(exit.label, record.city.clone(), exit.destination))?;
        }
    }
    Ok(world)
}

/// Returns the records describing what is left of `world`.
#[must_use]
pub fn remaining_records(world: &World) -> RemainingRecords<'_> {
    RemainingRecords {
        world,
        cities: world.undestroyed_cities().into_iter(),
    }
}

/// Lazy iterator over the surviving part of a world.
///
/// Yields one record per undestroyed city that still has a road to an
/// undestroyed destination, containing only those roads.
#[derive(Debug)]
pub struct RemainingRecords<'w> {
    world: &'w World,
    cities: vec::IntoIter<&'w City>,
}

impl Iterator for RemainingRecords<'_> {
    type Item = Result<WorldRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        for city in self.cities.by_ref() {
            let mut record = WorldRecord::new(city.name().clone());
            for road in self.world.roads_from(city.name().as_str()) {
                match self.world.city(road.destination().as_str()) {
                    None => return Some(Err(Error::unknown_city(road.destination().clone()))),
                    Some(destination) if destination.is_destroyed() => {}
                    Some(_) => record
                        .exits
                        .push(Exit::new(road.label(), road.destination().clone())),
                }
            }
            if !record.exits.is_empty() {
                return Some(Ok(record));
            }
        }
        None
    }
}
