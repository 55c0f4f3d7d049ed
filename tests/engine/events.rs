//! Event stream shape and determinism

use rampage_engine::{Simulation, SimulationConfig, SimulationEvent, Termination};
use rampage_foundation::MonsterId;
use rampage_storage::{Capacity, WorldRecord, build_world};

fn ring(n: usize, capacity: Capacity) -> rampage_storage::World {
    let records = (0..n).map(|i| {
        Ok(WorldRecord::new(format!("c{i}"))
            .with_exit("next", format!("c{}", (i + 1) % n))
            .with_exit("prev", format!("c{}", (i + n - 1) % n)))
    });
    build_world(records, capacity).unwrap()
}

fn history(seed: u64) -> Vec<SimulationEvent> {
    let config = SimulationConfig::new()
        .with_monster_count(12)
        .with_max_iterations(200)
        .with_seed(seed);
    let mut sim = Simulation::new(ring(10, Capacity::Limited(3)), &config, Vec::new()).unwrap();
    sim.run().unwrap();
    sim.into_sink()
}

#[test]
fn same_seed_same_history() {
    assert_eq!(history(17), history(17));
}

#[test]
fn different_seeds_diverge() {
    let histories: Vec<_> = (0..8).map(history).collect();
    assert!(histories.iter().any(|h| h != &histories[0]));
}

#[test]
fn placements_precede_the_first_iteration() {
    let events = history(5);
    let first_iteration = events
        .iter()
        .position(|e| matches!(e, SimulationEvent::IterationStarted { .. }))
        .unwrap_or(events.len());
    for event in &events[first_iteration..] {
        assert!(!matches!(event, SimulationEvent::MonsterPlaced { .. }));
    }
}

#[test]
fn iterations_are_numbered_from_one() {
    let numbers: Vec<u64> = history(9)
        .iter()
        .filter_map(|e| match e {
            SimulationEvent::IterationStarted { iteration } => Some(*iteration),
            _ => None,
        })
        .collect();
    let expected: Vec<u64> = (1..=numbers.len() as u64).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn finished_is_the_last_event_and_appears_once() {
    let events = history(23);
    let finished: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, SimulationEvent::Finished { .. }))
        .collect();
    assert_eq!(finished.len(), 1);
    assert!(matches!(events.last(), Some(SimulationEvent::Finished { .. })));
}

#[test]
fn monsters_move_in_id_order_within_an_iteration() {
    let config = SimulationConfig::new()
        .with_monster_count(6)
        .with_max_iterations(3)
        .with_seed(2);
    let mut sim = Simulation::new(ring(20, Capacity::Unlimited), &config, Vec::new()).unwrap();
    sim.run().unwrap();

    let mut last: Option<MonsterId> = None;
    for event in sim.sink() {
        match event {
            SimulationEvent::IterationStarted { .. } => last = None,
            SimulationEvent::MonsterMoved { monster, .. } => {
                assert!(last.is_none_or(|prev| prev < monster.id));
                last = Some(monster.id);
            }
            _ => {}
        }
    }
}

#[test]
fn moves_follow_roads() {
    let config = SimulationConfig::new()
        .with_monster_count(4)
        .with_max_iterations(50)
        .with_seed(31);
    let mut sim = Simulation::new(ring(6, Capacity::Unlimited), &config, Vec::new()).unwrap();
    sim.run().unwrap();

    for event in sim.sink() {
        if let SimulationEvent::MonsterMoved { from, to, .. } = event {
            let roads = sim.world().roads_from(from.as_str());
            assert!(roads.iter().any(|r| r.destination() == to), "{from} -> {to}");
        }
    }
    assert_eq!(sim.termination(), Some(Termination::IterationLimit));
}

#[test]
fn generated_names_are_stable_for_a_seed() {
    let names = |seed| {
        let config = SimulationConfig::new().with_monster_count(3).with_seed(seed);
        let sim = Simulation::new(ring(5, Capacity::Unlimited), &config, ()).unwrap();
        sim.active_monsters()
            .iter()
            .map(|m| m.name().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(4), names(4));
    assert!(names(4).iter().all(|n| n.len() == 8));
}
