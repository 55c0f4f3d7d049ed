//! Tracing a run alongside narration

use rampage_debug::{HumanFormatter, JsonFormatter, TraceFormatter, Tracer, TracerConfig};
use rampage_engine::{Simulation, SimulationConfig, SimulationEvent};
use rampage_runtime::NarrationWriter;
use rampage_storage::{Capacity, WorldRecord, build_world};

fn world() -> rampage_storage::World {
    let records = ["a", "b", "c", "d"].iter().enumerate().map(|(i, name)| {
        let next = ["a", "b", "c", "d"][(i + 1) % 4];
        let prev = ["a", "b", "c", "d"][(i + 3) % 4];
        Ok(WorldRecord::new(*name)
            .with_exit("cw", next)
            .with_exit("ccw", prev))
    });
    build_world(records, Capacity::Limited(2)).unwrap()
}

fn traced_run(seed: u64) -> (Vec<u8>, Tracer) {
    let config = SimulationConfig::new()
        .with_monster_count(6)
        .with_max_iterations(100)
        .with_seed(seed);
    let sink = (
        NarrationWriter::new(Vec::new()),
        Tracer::new(TracerConfig::new().enabled()),
    );
    let mut sim = Simulation::new(world(), &config, sink).unwrap();
    sim.run().unwrap();
    let (narration, tracer) = sim.into_sink();
    (narration.into_inner(), tracer)
}

#[test]
fn tracer_sees_every_destruction_that_was_narrated() {
    let (narration, tracer) = traced_run(3);
    let narrated = String::from_utf8(narration).unwrap().lines().count();
    assert_eq!(tracer.buffer().by_event_type("city-destroyed").len(), narrated);
    assert_eq!(tracer.buffer().by_event_type("finished").len(), 1);
}

#[test]
fn placement_is_traced_as_iteration_zero() {
    let (_, tracer) = traced_run(8);
    for record in tracer.buffer().by_event_type("monster-placed") {
        assert_eq!(record.iteration, 0);
    }
    for record in tracer.buffer().by_event_type("monster-moved") {
        assert!(record.iteration >= 1);
    }
}

#[test]
fn trace_records_are_tagged_with_their_iteration() {
    let (_, tracer) = traced_run(21);
    for record in tracer.buffer().iter() {
        if let SimulationEvent::IterationStarted { iteration } = &record.event {
            assert_eq!(record.iteration, *iteration);
        }
    }
}

#[test]
fn filtered_tracer_keeps_only_requested_events() {
    let config = SimulationConfig::new()
        .with_monster_count(6)
        .with_seed(2);
    let tracer = Tracer::new(
        TracerConfig::new()
            .enabled()
            .filter_events(vec!["city-destroyed".to_string()]),
    );
    let mut sim = Simulation::new(world(), &config, tracer).unwrap();
    sim.run().unwrap();

    let tracer = sim.into_sink();
    assert!(tracer.buffer().iter().all(|r| r.event_type() == "city-destroyed"));
}

#[test]
fn formatters_render_a_whole_run() {
    let (_, tracer) = traced_run(5);
    let records: Vec<_> = tracer.buffer().iter().collect();

    let human = HumanFormatter::default().format_many(&records).unwrap();
    assert!(human.contains("=== FINISHED after"));

    let json = JsonFormatter::default().format_many(&records).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(records.len()));
}
