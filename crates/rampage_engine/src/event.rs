//! Simulation events and the sinks that receive them.

use std::fmt;

use rampage_foundation::{CityName, MonsterId, Result};
use rampage_storage::Monster;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monster as it appears in an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonsterRef {
    /// The monster's ID.
    pub id: MonsterId,
    /// The monster's display name.
    pub name: String,
}

impl From<&Monster> for MonsterRef {
    fn from(monster: &Monster) -> Self {
        Self {
            id: monster.id(),
            name: monster.name().to_string(),
        }
    }
}

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Termination {
    /// Every monster perished or got trapped.
    AllInactive,
    /// A monster needed placing but every city was destroyed.
    NoCitiesLeft,
    /// The iteration cap was reached.
    IterationLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllInactive => write!(f, "all monsters inactive"),
            Self::NoCitiesLeft => write!(f, "no cities left"),
            Self::IterationLimit => write!(f, "iteration limit reached"),
        }
    }
}

/// Something that happened during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum SimulationEvent {
    /// An iteration began.
    IterationStarted {
        /// The iteration number, starting at 1.
        iteration: u64,
    },

    /// An unplaced monster was put into its first city.
    MonsterPlaced {
        /// The monster.
        monster: MonsterRef,
        /// Where it was placed.
        city: CityName,
    },

    /// A monster travelled along a road.
    MonsterMoved {
        /// The monster.
        monster: MonsterRef,
        /// The city it left.
        from: CityName,
        /// The city it entered.
        to: CityName,
    },

    /// A monster had no undestroyed neighbor and stopped moving.
    MonsterTrapped {
        /// The monster.
        monster: MonsterRef,
        /// The city it is stuck in.
        city: CityName,
    },

    /// A city reached capacity and was destroyed along with its occupants.
    CityDestroyed {
        /// The destroyed city.
        city: CityName,
        /// Every monster present at that moment, in ID order.
        monsters: Vec<MonsterRef>,
    },

    /// The simulation finished.
    Finished {
        /// Iterations completed.
        iterations: u64,
        /// Why it stopped.
        termination: Termination,
    },
}

impl SimulationEvent {
    /// Returns the event type as a string.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::IterationStarted { .. } => "iteration-started",
            Self::MonsterPlaced { .. } => "monster-placed",
            Self::MonsterMoved { .. } => "monster-moved",
            Self::MonsterTrapped { .. } => "monster-trapped",
            Self::CityDestroyed { .. } => "city-destroyed",
            Self::Finished { .. } => "finished",
        }
    }

    /// Returns the destruction narration, for `CityDestroyed` events.
    #[must_use]
    pub fn narration(&self) -> Option<String> {
        match self {
            Self::CityDestroyed { city, monsters } => Some(narrate(city, monsters)),
            _ => None,
        }
    }
}

/// Renders a destruction message.
///
/// ```
/// use rampage_engine::{MonsterRef, narrate};
/// use rampage_foundation::{CityName, MonsterId};
///
/// let monsters = vec![
///     MonsterRef { id: MonsterId::new(0), name: "Ahu".into() },
///     MonsterRef { id: MonsterId::new(1), name: "Ebo".into() },
/// ];
/// assert_eq!(
///     narrate(&CityName::new("Asnu"), &monsters),
///     "Asnu has been destroyed by monster Ahu and monster Ebo!"
/// );
/// ```
#[must_use]
pub fn narrate(city: &CityName, monsters: &[MonsterRef]) -> String {
    let names: Vec<String> = monsters
        .iter()
        .map(|m| format!("monster {}", m.name))
        .collect();

    match names.as_slice() {
        [] => format!("{city} has been destroyed!"),
        [only] => format!("{city} has been destroyed by {only}!"),
        [rest @ .., last] => format!("{city} has been destroyed by {} and {last}!", rest.join(", ")),
    }
}

/// Receives simulation events.
pub trait EventSink {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot accept the event (e.g. a write
    /// failed). The engine aborts the run.
    fn record(&mut self, event: &SimulationEvent) -> Result<()>;
}

/// Collects every event.
impl EventSink for Vec<SimulationEvent> {
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Discards every event.
impl EventSink for () {
    fn record(&mut self, _event: &SimulationEvent) -> Result<()> {
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        (**self).record(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        (**self).record(event)
    }
}

/// Sends every event to both sinks, first to second.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&mut self, event: &SimulationEvent) -> Result<()> {
        self.0.record(event)?;
        self.1.record(event)
    }
}
