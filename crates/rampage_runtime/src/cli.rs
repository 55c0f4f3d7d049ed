//! Command-line configuration.

use std::path::PathBuf;
use std::str::FromStr;

use rampage_debug::TracerConfig;
use rampage_engine::SimulationConfig;
use rampage_foundation::{Error, ErrorKind, Result};
use rampage_storage::Capacity;

use crate::session::{RecordFormat, SessionConfig};

/// Map read when `-d` is not given.
pub const DEFAULT_MAP: &str = "assets/world_map_small.txt";

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Number of monsters; zero means "print usage".
    pub monsters: u32,
    /// Input map path.
    pub map: PathBuf,
    /// Output path; stdout when unset.
    pub output: Option<PathBuf>,
    /// Record format for both input and output.
    pub format: RecordFormat,
    /// Raw capacity (`-1` for unlimited).
    pub capacity: i64,
    /// Iteration cap.
    pub max_iterations: u64,
    /// Fixed seed.
    pub seed: Option<u64>,
    /// Echo simulation events to stderr.
    pub trace: bool,
    /// Echo them as JSON.
    pub trace_json: bool,
    /// `-h` was given.
    pub show_help: bool,
    /// `-V` was given.
    pub show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        let simulation = SimulationConfig::default();
        Self {
            monsters: 0,
            map: PathBuf::from(DEFAULT_MAP),
            output: None,
            format: RecordFormat::Text,
            capacity: 2,
            max_iterations: simulation.max_iterations,
            seed: None,
            trace: false,
            trace_json: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn usage(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Usage(message.into()))
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| usage(format!("invalid {flag} value: {value}")))
}

impl CliConfig {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns a usage error for unknown options, missing values, stray
    /// positional arguments, and values that do not parse.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| usage(format!("{arg} requires a value")))
            };
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "--trace" => config.trace = true,
                "--trace-json" => {
                    config.trace = true;
                    config.trace_json = true;
                }
                "-n" | "--monsters" => config.monsters = parse_value(&arg, &value()?)?,
                "-d" | "--map" => config.map = PathBuf::from(value()?),
                "-o" | "--output" => config.output = Some(PathBuf::from(value()?)),
                "--format" => config.format = parse_value(&arg, &value()?)?,
                "--capacity" => config.capacity = parse_value(&arg, &value()?)?,
                "--max-iterations" => config.max_iterations = parse_value(&arg, &value()?)?,
                "--seed" => config.seed = Some(parse_value(&arg, &value()?)?),
                other if other.starts_with('-') => {
                    return Err(usage(format!("unknown option: {other}")));
                }
                other => return Err(usage(format!("unexpected argument: {other}"))),
            }
        }

        Ok(config)
    }

    /// Builds the session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is out of range.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut simulation = SimulationConfig::new()
            .with_monster_count(self.monsters)
            .with_max_iterations(self.max_iterations);
        if let Some(seed) = self.seed {
            simulation = simulation.with_seed(seed);
        }

        let trace = self.trace.then(|| {
            let config = TracerConfig::new().enabled().to_stderr();
            if self.trace_json { config.json() } else { config }
        });

        Ok(SessionConfig {
            map: self.map.clone(),
            output: self.output.clone(),
            format: self.format,
            capacity: Capacity::try_from(self.capacity)?,
            simulation,
            trace,
        })
    }
}

/// Returns the help text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\x1b[1mRampage\x1b[0m - Monsters roaming a world of cities

\x1b[1mUSAGE:\x1b[0m
    rampage -n <COUNT> [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -n, --monsters N       Number of monsters to start with (N > 0)
    -d, --map PATH         Map file to read [default: {DEFAULT_MAP}]
    -o, --output PATH      Write the remaining world here instead of stdout
    --format FORMAT        Record format: text or msgpack [default: text]
    --capacity N           Monsters that destroy a city; -1 for unlimited [default: 2]
    --max-iterations N     Iteration cap [default: 10000]
    --seed N               Seed for a reproducible run
    -h, --help             Print help information
    -V, --version          Print version information

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                Echo simulation events to stderr
    --trace-json           Echo simulation events to stderr as JSON

\x1b[1mENVIRONMENT:\x1b[0m
    RAMPAGE_LOG            Log filter, e.g. debug or rampage_engine=info [default: warn]

\x1b[1mEXAMPLES:\x1b[0m
    rampage -n 10                          Run on the bundled map
    rampage -n 50 -d map.txt -o left.txt   Write what is left to left.txt
    rampage -n 5 --seed 42 --trace         Reproducible run with tracing"
    )
}
