//! The simulation engine.
//!
//! Each iteration moves every active monster once, in ID order:
//! 1. Pick the candidate cities (all intact cities if unplaced, otherwise
//!    the intact neighbors of its city)
//! 2. Leave the current city
//! 3. Choose a candidate uniformly at random
//! 4. Enter it; a city that reaches capacity is destroyed together with
//!    everyone inside
//!
//! A monster with no intact neighbor is trapped and stops being active. The
//! run ends when no monster is active, when a monster cannot be placed at
//! all, or when the iteration cap is reached.

use rampage_foundation::{CityName, Error, ErrorKind, MonsterId, Result};
use rampage_storage::{Monster, MonsterCollection, World};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::event::{EventSink, MonsterRef, SimulationEvent, Termination};
use crate::naming::{MonsterNamer, SyllableNamer};
use crate::random::{RandomSource, SeededRandom};

/// Offset applied to the run seed for the name generator, so names and
/// destination choices come from independent streams.
const NAME_SEED_OFFSET: u64 = 0x4E41_4D45;

// =============================================================================
// Run Summary
// =============================================================================

/// Final state of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations completed.
    pub iterations: u64,
    /// Monsters still active.
    pub active_monsters: usize,
    /// Cities destroyed.
    pub destroyed_cities: usize,
    /// Why the run stopped, if it has.
    pub termination: Option<Termination>,
}

// =============================================================================
// Simulation
// =============================================================================

/// Drives monsters around a [`World`].
#[derive(Debug)]
pub struct Simulation<S, R = SeededRandom> {
    world: World,
    /// Monsters that still move.
    active: MonsterCollection,
    max_iterations: u64,
    iteration: u64,
    finished: bool,
    termination: Option<Termination>,
    seed: Option<u64>,
    random: R,
    sink: S,
}

impl<S: EventSink> Simulation<S> {
    /// Creates a simulation with seeded randomness and generated names, and
    /// places `config.monster_count` monsters.
    ///
    /// When `config.seed` is unset a seed is drawn from entropy; it is
    /// available afterwards through [`Simulation::seed`].
    ///
    /// # Errors
    ///
    /// Returns an error if placing a monster fails or the sink rejects an event.
    pub fn new(world: World, config: &SimulationConfig, sink: S) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut namer =
            SyllableNamer::new(seed.wrapping_add(NAME_SEED_OFFSET)).with_length(config.name_length);
        let config = config.clone().with_seed(seed);
        Self::with_sources(world, &config, sink, SeededRandom::new(seed), &mut namer)
    }
}

impl<S: EventSink, R: RandomSource> Simulation<S, R> {
    /// Creates a simulation with explicit randomness and naming, and places
    /// `config.monster_count` monsters.
    ///
    /// Monsters get IDs `0..monster_count`. Placement stops early if the
    /// simulation finishes because no city is left.
    ///
    /// # Errors
    ///
    /// Returns an error if placing a monster fails or the sink rejects an event.
    pub fn with_sources<N>(
        world: World,
        config: &SimulationConfig,
        sink: S,
        random: R,
        namer: &mut N,
    ) -> Result<Self>
    where
        N: MonsterNamer + ?Sized,
    {
        let mut simulation = Self {
            world,
            active: MonsterCollection::new(),
            max_iterations: config.max_iterations,
            iteration: 0,
            finished: false,
            termination: None,
            seed: config.seed,
            random,
            sink,
        };
        simulation.populate(config.monster_count, namer)?;
        Ok(simulation)
    }

    fn populate<N>(&mut self, count: u32, namer: &mut N) -> Result<()>
    where
        N: MonsterNamer + ?Sized,
    {
        for raw in 0..count {
            if self.finished {
                break;
            }
            let id = MonsterId::new(raw);
            self.active.add(Monster::new(id, namer.name_for(id)))?;
            self.move_monster(id)
                .map_err(|e| e.with_frame(format!("placing monster {id}")))?;
        }
        debug!(
            placed = self.active.len(),
            requested = count,
            "monsters placed"
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Consumes the simulation and returns the world.
    #[must_use]
    pub fn into_world(self) -> World {
        self.world
    }

    /// Consumes the simulation and returns the world and the event sink.
    #[must_use]
    pub fn into_parts(self) -> (World, S) {
        (self.world, self.sink)
    }

    /// Returns the monsters that are still moving.
    #[must_use]
    pub fn active_monsters(&self) -> &MonsterCollection {
        &self.active
    }

    /// Returns the number of monsters that are still moving.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of iterations started so far.
    #[must_use]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Returns true once the simulation has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns why the simulation finished, if it has.
    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Returns the seed, if the simulation was seeded.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns mutable access to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the simulation and returns the event sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns a summary of the current state.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            iterations: self.iteration,
            active_monsters: self.active.len(),
            destroyed_cities: self.world.destroyed_cities().len(),
            termination: self.termination,
        }
    }

    // -------------------------------------------------------------------------
    // Execution
    // -------------------------------------------------------------------------

    /// Runs until finished or until the iteration cap is reached.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step; the run stops there.
    pub fn run(&mut self) -> Result<RunSummary> {
        while !self.finished && self.iteration < self.max_iterations {
            self.step()?;
        }
        self.finish(Termination::IterationLimit)?;
        Ok(self.summary())
    }

    /// Runs one iteration: every monster active at its start moves once,
    /// unless it perishes or gets trapped before its turn.
    ///
    /// Does nothing once the simulation has finished.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while moving a monster.
    pub fn step(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        if self.active.is_empty() {
            return self.finish(Termination::AllInactive);
        }

        self.iteration += 1;
        let iteration = self.iteration;
        self.emit(&SimulationEvent::IterationStarted { iteration })?;

        let snapshot: Vec<MonsterId> = self.active.ids().collect();
        for id in snapshot {
            if !self.active.contains(id) {
                continue;
            }
            self.move_monster(id)
                .map_err(|e| e.with_frame(format!("moving monster {id} in iteration {iteration}")))?;
        }
        Ok(())
    }

    /// Moves one active monster to a random intact destination.
    ///
    /// An unplaced monster may go to any intact city; if there is none the
    /// simulation finishes. A placed monster may go to any intact neighbor;
    /// if there is none it is trapped and removed from the active set.
    ///
    /// # Errors
    ///
    /// Returns an error if the monster is not active, if the graph refers to
    /// a missing city, or if the destination rejects the monster.
    pub fn move_monster(&mut self, id: MonsterId) -> Result<()> {
        let mut monster = self
            .active
            .get(id)
            .cloned()
            .ok_or_else(|| Error::monster_not_found(id))?;
        let origin = monster.location().cloned();

        let candidates: Vec<CityName> = match &origin {
            None => self
                .world
                .undestroyed_cities()
                .into_iter()
                .map(|c| c.name().clone())
                .collect(),
            Some(here) => self
                .world
                .reachable_from(here.as_str())?
                .into_iter()
                .map(|c| c.name().clone())
                .collect(),
        };

        if candidates.is_empty() {
            return match origin {
                None => self.finish(Termination::NoCitiesLeft),
                Some(here) => {
                    self.active.remove(id)?;
                    debug!(monster = %id, city = %here, "monster trapped");
                    self.emit(&SimulationEvent::MonsterTrapped {
                        monster: MonsterRef::from(&monster),
                        city: here,
                    })
                }
            };
        }

        if let Some(here) = &origin {
            self.world
                .city_mut(here.as_str())
                .ok_or_else(|| Error::unknown_city(here.clone()))?
                .evict(id)?;
        }

        let pick = self.random.choose_index(candidates.len());
        let destination = candidates.get(pick).cloned().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "random source chose {pick} of {} candidates",
                candidates.len()
            )))
        })?;

        monster.set_location(destination.clone());
        let city = self
            .world
            .city_mut(destination.as_str())
            .ok_or_else(|| Error::unknown_city(destination.clone()))?;
        let destroyed = city.admit(monster.clone())?;
        let victims: Vec<MonsterRef> = if destroyed {
            city.occupants().iter().map(MonsterRef::from).collect()
        } else {
            Vec::new()
        };

        if let Some(active) = self.active.get_mut(id) {
            active.set_location(destination.clone());
        }

        let monster = MonsterRef::from(&monster);
        match origin {
            None => {
                debug!(monster = %id, city = %destination, "monster placed");
                self.emit(&SimulationEvent::MonsterPlaced {
                    monster,
                    city: destination.clone(),
                })?;
            }
            Some(from) => {
                debug!(monster = %id, %from, to = %destination, "monster moved");
                self.emit(&SimulationEvent::MonsterMoved {
                    monster,
                    from,
                    to: destination.clone(),
                })?;
            }
        }

        if destroyed {
            for victim in &victims {
                self.active.take(victim.id);
            }
            info!(
                city = %destination,
                victims = victims.len(),
                iteration = self.iteration,
                "city destroyed"
            );
            self.emit(&SimulationEvent::CityDestroyed {
                city: destination,
                monsters: victims,
            })?;
        }
        Ok(())
    }

    /// Marks the simulation finished and reports it, once.
    fn finish(&mut self, termination: Termination) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.termination = Some(termination);
        info!(
            iterations = self.iteration,
            active = self.active.len(),
            %termination,
            "simulation finished"
        );
        self.emit(&SimulationEvent::Finished {
            iterations: self.iteration,
            termination,
        })
    }

    fn emit(&mut self, event: &SimulationEvent) -> Result<()> {
        self.sink.record(event)
    }
}

// =============================================================================
// Tests
// =============================================================================
