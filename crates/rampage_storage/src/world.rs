//! The world graph: cities connected by one-way roads.
//!
//! Cities are kept in insertion order so every enumeration (undestroyed
//! cities, remaining records) is deterministic for a given input.

use std::collections::HashMap;

use rampage_foundation::{CityName, Error, MonsterId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::city::City;

/// A one-way labeled edge between two cities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Road {
    label: String,
    source: CityName,
    destination: CityName,
}

impl Road {
    /// Creates a road from `source` to `destination`.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        source: impl Into<CityName>,
        destination: impl Into<CityName>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Returns the direction label (e.g. `north`).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the city this road leaves from.
    #[must_use]
    pub fn source(&self) -> &CityName {
        &self.source
    }

    /// Returns the city this road leads to.
    #[must_use]
    pub fn destination(&self) -> &CityName {
        &self.destination
    }
}

/// Directed graph of cities and roads.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// Cities in insertion order.
    cities: Vec<City>,
    /// City name -> position in `cities`.
    index: HashMap<CityName, usize>,
    /// Outgoing roads by source city, in insertion order.
    roads: HashMap<CityName, Vec<Road>>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city. Returns false, leaving the existing city untouched,
    /// if a city with the same name is already present.
    pub fn add_city(&mut self, city: City) -> bool {
        if self.index.contains_key(city.name()) {
            return false;
        }
        self.index.insert(city.name().clone(), self.cities.len());
        self.cities.push(city);
        true
    }

    /// Adds a road to its source city's edge list.
    ///
    /// The destination is not checked here, so the graph can be built with
    /// forward references; it is resolved in [`World::reachable_from`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source city does not exist.
    pub fn add_road(&mut self, road: Road) -> Result<()> {
        if !self.contains_city(road.source().as_str()) {
            return Err(Error::unknown_city(road.source().clone()));
        }
        self.roads
            .entry(road.source().clone())
            .or_default()
            .push(road);
        Ok(())
    }

    /// Returns the city with the given name.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&i| &self.cities[i])
    }

    /// Returns a mutable reference to the city with the given name.
    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.index.get(name).map(|&i| &mut self.cities[i])
    }

    /// Returns true if a city with the given name exists.
    #[must_use]
    pub fn contains_city(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over all cities in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns the number of cities, destroyed or not.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the roads leaving `name`, in insertion order.
    #[must_use]
    pub fn roads_from(&self, name: &str) -> &[Road] {
        self.roads.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the total number of roads.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum()
    }

    /// Returns the undestroyed cities one road away from `name`.
    ///
    /// Results follow road insertion order. A city reachable by two roads
    /// appears twice, which weights it accordingly in a uniform draw.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or any road destination is not a city.
    pub fn reachable_from(&self, name: &str) -> Result<Vec<&City>> {
        if !self.contains_city(name) {
            return Err(Error::unknown_city(CityName::new(name)));
        }

        let mut reachable = Vec::new();
        for road in self.roads_from(name) {
            let destination = self
                .city(road.destination().as_str())
                .ok_or_else(|| Error::unknown_city(road.destination().clone()))?;
            if !destination.is_destroyed() {
                reachable.push(destination);
            }
        }
        Ok(reachable)
    }

    /// Returns every city that has not been destroyed, in insertion order.
    #[must_use]
    pub fn undestroyed_cities(&self) -> Vec<&City> {
        self.cities.iter().filter(|c| !c.is_destroyed()).collect()
    }

    /// Returns every destroyed city, in insertion order.
    #[must_use]
    pub fn destroyed_cities(&self) -> Vec<&City> {
        self.cities.iter().filter(|c| c.is_destroyed()).collect()
    }

    /// Finds the city whose occupants include the given monster.
    #[must_use]
    pub fn locate(&self, id: MonsterId) -> Option<&City> {
        self.cities.iter().find(|c| c.occupants().contains(id))
    }
}
