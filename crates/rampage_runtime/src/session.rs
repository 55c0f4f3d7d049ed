//! A complete run: read the map, simulate, write what is left.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rampage_debug::{Tracer, TracerConfig};
use rampage_engine::{RunSummary, Simulation, SimulationConfig};
use rampage_foundation::{Error, ErrorKind, Result};
use rampage_storage::{
    Capacity, RecordSink, RecordSource, World, build_world, remaining_records,
};
use tracing::info;

use crate::format::{TextReader, TextWriter};
use crate::narration::NarrationWriter;
use crate::serialize::{MsgPackReader, MsgPackWriter};

// =============================================================================
// Record Format
// =============================================================================

/// Encoding of map records on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// `City direction=Destination ...` lines.
    #[default]
    Text,
    /// `MessagePack` record stream.
    MsgPack,
}

impl FromStr for RecordFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "msgpack" => Ok(Self::MsgPack),
            other => Err(Error::new(ErrorKind::Usage(format!(
                "unknown format {other:?} (expected text or msgpack)"
            )))),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::MsgPack => write!(f, "msgpack"),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Everything a session needs to run.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Input map path.
    pub map: PathBuf,
    /// Output path; stdout when unset.
    pub output: Option<PathBuf>,
    /// Record format for input and output.
    pub format: RecordFormat,
    /// Capacity of every city.
    pub capacity: Capacity,
    /// Simulation parameters.
    pub simulation: SimulationConfig,
    /// Tracer settings; no tracing when unset.
    pub trace: Option<TracerConfig>,
}

/// Result of [`Session::simulate`].
#[derive(Debug)]
pub struct Outcome {
    /// The world after the run.
    pub world: World,
    /// How the run ended.
    pub summary: RunSummary,
    /// The seed actually used.
    pub seed: Option<u64>,
    /// The tracer, holding the buffered events if tracing was on.
    pub tracer: Tracer,
}

/// Drives one run.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
}

fn with_path(err: Error, path: &Path) -> Error {
    err.with_source(path.display().to_string())
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Builds a world from records in the session's format.
    ///
    /// # Errors
    ///
    /// Returns the first read or parse error.
    pub fn read_world<R: BufRead>(&self, reader: R) -> Result<World> {
        let capacity = self.config.capacity;
        let world = match self.config.format {
            RecordFormat::Text => build_world(TextReader::new(reader).records(), capacity)?,
            RecordFormat::MsgPack => build_world(MsgPackReader::new(reader).records(), capacity)?,
        };
        info!(
            cities = world.city_count(),
            roads = world.road_count(),
            %capacity,
            "world built"
        );
        Ok(world)
    }

    /// Reads the configured map file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load_world(&self) -> Result<World> {
        let path = &self.config.map;
        let file = File::open(path).map_err(|e| with_path(e.into(), path))?;
        self.read_world(BufReader::new(file))
            .map_err(|e| with_path(e, path))
    }

    /// Runs the simulation, narrating destruction to `narration`.
    ///
    /// # Errors
    ///
    /// Returns the first simulation or write error.
    pub fn simulate<W: Write>(&self, world: World, narration: W) -> Result<Outcome> {
        let tracer = Tracer::new(self.config.trace.clone().unwrap_or_default());
        let sink = (NarrationWriter::new(narration), tracer);

        let mut simulation = Simulation::new(world, &self.config.simulation, sink)?;
        let summary = simulation.run()?;
        let seed = simulation.seed();
        info!(
            seed,
            iterations = summary.iterations,
            destroyed = summary.destroyed_cities,
            active = summary.active_monsters,
            "run complete"
        );

        let (world, (_, tracer)) = simulation.into_parts();
        Ok(Outcome {
            world,
            summary,
            seed,
            tracer,
        })
    }

    /// Writes what is left of `world` in the session's format.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    pub fn write_world<W: Write>(&self, world: &World, writer: W) -> Result<()> {
        match self.config.format {
            RecordFormat::Text => TextWriter::new(writer).write_records(remaining_records(world)),
            RecordFormat::MsgPack => {
                MsgPackWriter::new(writer).write_records(remaining_records(world))
            }
        }
    }

    /// Runs the whole session against the real stdout and filesystem.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage.
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with(io::stdout().lock())
    }

    /// Runs the whole session, narrating to `out`.
    ///
    /// A blank line always follows the narration. The remaining world goes
    /// to the output file if one is configured, otherwise to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage.
    pub fn run_with<W: Write>(&self, mut out: W) -> Result<RunSummary> {
        let world = self.load_world()?;
        let outcome = self.simulate(world, &mut out)?;
        writeln!(out)?;

        match &self.config.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| with_path(e.into(), path))?;
                self.write_world(&outcome.world, BufWriter::new(file))
                    .map_err(|e| with_path(e, path))?;
                out.flush()?;
            }
            None => self.write_world(&outcome.world, out)?,
        }
        Ok(outcome.summary)
    }
}
