//! End-to-end sessions: map file in, remaining world out

use std::fs;
use std::path::PathBuf;

use rampage_engine::{SimulationConfig, Termination};
use rampage_foundation::{ErrorCategory, ErrorKind};
use rampage_runtime::{CliConfig, RecordFormat, Session, SessionConfig};
use rampage_storage::Capacity;

const MAP: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
Baz east=Foo
Qu-ux north=Foo
Bee east=Bar
";

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rampage-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(map: PathBuf, output: Option<PathBuf>, monsters: u32, capacity: Capacity) -> SessionConfig {
    SessionConfig {
        map,
        output,
        format: RecordFormat::Text,
        capacity,
        simulation: SimulationConfig::new()
            .with_monster_count(monsters)
            .with_max_iterations(1_000)
            .with_seed(7),
        trace: None,
    }
}

#[test]
fn run_writes_remaining_world_to_file() {
    let dir = scratch("run");
    let map = dir.join("map.txt");
    let out = dir.join("out.txt");
    fs::write(&map, MAP).unwrap();

    let session = Session::new(config(map, Some(out.clone()), 4, Capacity::Limited(2)));
    let summary = session.run().unwrap();
    assert!(summary.termination.is_some());

    let written = fs::read_to_string(&out).unwrap();
    let session = Session::new(config(out, None, 0, Capacity::Unlimited));
    let remaining = session.read_world(written.as_bytes()).unwrap();

    // Destroyed cities never reappear in the output.
    assert!(remaining.city_count() <= 5);
    for line in written.lines() {
        assert!(!line.is_empty());
        assert!(line.split_whitespace().skip(1).all(|pair| pair.contains('=')));
    }
    fs::remove_dir_all(dir).ok();
}

#[test]
fn zero_monsters_leave_the_world_untouched() {
    let session = Session::new(config(PathBuf::from("unused"), None, 0, Capacity::Limited(2)));
    let world = session.read_world(MAP.as_bytes()).unwrap();
    let mut narration = Vec::new();
    let outcome = session.simulate(world, &mut narration).unwrap();

    assert!(narration.is_empty());
    assert_eq!(outcome.summary.destroyed_cities, 0);
    assert_eq!(outcome.summary.termination, Some(Termination::AllInactive));

    let mut out = Vec::new();
    session.write_world(&outcome.world, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), MAP);
}

#[test]
fn narration_has_one_line_per_destroyed_city() {
    let session = Session::new(config(PathBuf::from("unused"), None, 10, Capacity::Limited(2)));
    let world = session.read_world(MAP.as_bytes()).unwrap();
    let mut narration = Vec::new();
    let outcome = session.simulate(world, &mut narration).unwrap();

    let text = String::from_utf8(narration).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), outcome.summary.destroyed_cities);
    assert!(lines.iter().all(|l| l.contains(" has been destroyed") && l.ends_with('!')));
    assert_eq!(outcome.seed, Some(7));
}

#[test]
fn missing_map_names_the_path() {
    let session = Session::new(config(
        PathBuf::from("/definitely/not/here.txt"),
        None,
        1,
        Capacity::Limited(2),
    ));
    let err = session.load_world().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(
        err.context.and_then(|c| c.source).as_deref(),
        Some("/definitely/not/here.txt")
    );
}

#[test]
fn malformed_map_reports_line_and_path() {
    let dir = scratch("malformed");
    let map = dir.join("bad.txt");
    fs::write(&map, "Foo north=Bar\nBar south\n").unwrap();

    let err = Session::new(config(map.clone(), None, 1, Capacity::Limited(2)))
        .load_world()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(2));
    assert_eq!(context.source, Some(map.display().to_string()));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn cli_arguments_become_a_session() {
    let args = ["-n", "3", "--map", "world.txt", "--capacity", "-1", "--seed", "5"];
    let cli = CliConfig::parse(args.iter().map(|s| (*s).to_string())).unwrap();
    let config = cli.session_config().unwrap();

    assert_eq!(config.capacity, Capacity::Unlimited);
    assert_eq!(config.map, PathBuf::from("world.txt"));
    assert_eq!(config.simulation.monster_count, 3);
    assert_eq!(config.simulation.seed, Some(5));
    assert!(config.trace.is_none());
}
