//! Cities and their monster capacity.
//!
//! A city with a limited capacity destroys itself the moment its occupancy
//! reaches that capacity. Destruction is a one-way flag; destroyed cities
//! stay in the world graph but are never valid destinations again.

use std::fmt;

use rampage_foundation::{CityName, Error, ErrorKind, MonsterId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::monster::{Monster, MonsterCollection};

/// How many monsters a city holds before it is destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Capacity {
    /// The city is never destroyed by crowding.
    Unlimited,
    /// The city is destroyed when this many monsters are present.
    Limited(usize),
}

impl Capacity {
    /// Raw value that stands for [`Capacity::Unlimited`].
    pub const UNLIMITED_RAW: i64 = -1;

    /// Returns the limit, if any.
    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Limited(n) => Some(n),
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Limited(2)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        if raw == Self::UNLIMITED_RAW {
            return Ok(Self::Unlimited);
        }
        usize::try_from(raw)
            .map(Self::Limited)
            .map_err(|_| Error::new(ErrorKind::InvalidCapacity(raw)))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Limited(n) => write!(f, "{n}"),
        }
    }
}

/// A node in the world graph.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    name: CityName,
    occupants: MonsterCollection,
    destroyed: bool,
    capacity: Capacity,
}

impl City {
    /// Creates an empty, intact city.
    #[must_use]
    pub fn new(name: impl Into<CityName>, capacity: Capacity) -> Self {
        Self {
            name: name.into(),
            occupants: MonsterCollection::new(),
            destroyed: false,
            capacity,
        }
    }

    /// Returns the city's name.
    #[must_use]
    pub fn name(&self) -> &CityName {
        &self.name
    }

    /// Returns the city's capacity.
    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns true once the city has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns the monsters physically present.
    #[must_use]
    pub fn occupants(&self) -> &MonsterCollection {
        &self.occupants
    }

    /// Returns the number of monsters present.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }

    /// Admits a monster into the city.
    ///
    /// Returns `true` when this admission destroyed the city. An unlimited
    /// city never newly destroys, so it reports its existing state instead.
    ///
    /// # Errors
    ///
    /// Returns a `CityFull` error if a limited city was already at capacity;
    /// the city is destroyed (if it was not already) and the monster is not
    /// admitted. Returns a `DuplicateMonster` error if the monster is
    /// already present.
    pub fn admit(&mut self, monster: Monster) -> Result<bool> {
        let Capacity::Limited(limit) = self.capacity else {
            self.occupants.add(monster)?;
            return Ok(self.destroyed);
        };

        if self.occupants.len() >= limit {
            if !self.destroyed {
                self.destroy()?;
            }
            return Err(Error::city_full(self.name.clone(), limit));
        }

        self.occupants.add(monster)?;

        if self.occupants.len() == limit && !self.destroyed {
            self.destroy()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Removes a monster from the city.
    ///
    /// # Errors
    ///
    /// Returns a `MonsterNotFound` error if the monster is not present.
    pub fn evict(&mut self, id: MonsterId) -> Result<Monster> {
        self.occupants.remove(id)
    }

    /// Marks the city as destroyed.
    ///
    /// # Errors
    ///
    /// Returns an error if the city is already destroyed.
    pub fn destroy(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(Error::already_destroyed(self.name.clone()));
        }
        self.destroyed = true;
        Ok(())
    }
}
