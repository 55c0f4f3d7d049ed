//! Monsters and keyed monster collections.

use std::collections::BTreeMap;

use rampage_foundation::{CityName, Error, MonsterId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monster roaming the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monster {
    id: MonsterId,
    name: String,
    /// `None` until the monster is first placed.
    location: Option<CityName>,
}

impl Monster {
    /// Creates an unplaced monster.
    #[must_use]
    pub fn new(id: MonsterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: None,
        }
    }

    /// Returns the monster's ID.
    #[must_use]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    /// Returns the monster's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the city the monster is in, if placed.
    #[must_use]
    pub fn location(&self) -> Option<&CityName> {
        self.location.as_ref()
    }

    /// Returns true once the monster has been placed in a city.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    /// Moves the monster to `city`.
    pub fn set_location(&mut self, city: CityName) {
        self.location = Some(city);
    }
}

/// A keyed set of monsters.
///
/// Iteration is in ascending [`MonsterId`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonsterCollection {
    monsters: BTreeMap<MonsterId, Monster>,
}

impl MonsterCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a monster.
    ///
    /// # Errors
    ///
    /// Returns an error if a monster with the same ID is already present.
    pub fn add(&mut self, monster: Monster) -> Result<()> {
        if self.monsters.contains_key(&monster.id) {
            return Err(Error::duplicate_monster(monster.id));
        }
        self.monsters.insert(monster.id, monster);
        Ok(())
    }

    /// Removes a monster and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if no monster with this ID is present.
    pub fn remove(&mut self, id: MonsterId) -> Result<Monster> {
        self.monsters
            .remove(&id)
            .ok_or_else(|| Error::monster_not_found(id))
    }

    /// Removes a monster if present.
    pub fn take(&mut self, id: MonsterId) -> Option<Monster> {
        self.monsters.remove(&id)
    }

    /// Gets a monster by ID.
    #[must_use]
    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    /// Gets a mutable reference to a monster by ID.
    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(&id)
    }

    /// Returns true if a monster with this ID is present.
    #[must_use]
    pub fn contains(&self, id: MonsterId) -> bool {
        self.monsters.contains_key(&id)
    }

    /// Returns the number of monsters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Returns true if there are no monsters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Iterates over monsters in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }

    /// Iterates over monster IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = MonsterId> + '_ {
        self.monsters.keys().copied()
    }
}

impl FromIterator<Monster> for MonsterCollection {
    /// Later monsters replace earlier ones with the same ID.
    fn from_iter<I: IntoIterator<Item = Monster>>(iter: I) -> Self {
        Self {
            monsters: iter.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}
