//! Configuration for a simulation run.

/// Parameters of a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Hard cap on the number of iterations.
    pub max_iterations: u64,
    /// Number of monsters created and placed at construction.
    pub monster_count: u32,
    /// Seed for destination choice and names; drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Length of generated monster names.
    pub name_length: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            monster_count: 0,
            seed: None,
            name_length: 8,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method to set the number of monsters.
    #[must_use]
    pub fn with_monster_count(mut self, count: u32) -> Self {
        self.monster_count = count;
        self
    }

    /// Builder method to fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the monster name length.
    #[must_use]
    pub fn with_name_length(mut self, length: usize) -> Self {
        self.name_length = length;
        self
    }
}
