//! Integration tests for building worlds from records and reading them back

use std::collections::BTreeSet;

use rampage_foundation::{Error, ErrorKind, Result};
use rampage_storage::{
    Capacity, RecordSink, RecordSource, World, WorldRecord, build_world, remaining_records,
};

fn sample() -> Vec<WorldRecord> {
    vec![
        WorldRecord::new("Foo")
            .with_exit("north", "Bar")
            .with_exit("west", "Baz")
            .with_exit("south", "Qu-ux"),
        WorldRecord::new("Bar")
            .with_exit("south", "Foo")
            .with_exit("west", "Bee"),
        WorldRecord::new("Lonely"),
    ]
}

fn edges(records: &[WorldRecord]) -> BTreeSet<(String, String, String)> {
    records
        .iter()
        .flat_map(|r| {
            r.exits.iter().map(|e| {
                (
                    r.city.to_string(),
                    e.label.clone(),
                    e.destination.to_string(),
                )
            })
        })
        .collect()
}

fn world() -> World {
    build_world(sample().records(), Capacity::default()).unwrap()
}

#[test]
fn build_creates_destinations_on_demand() {
    let world = world();
    // Foo, Bar, Baz, Qu-ux, Bee, Lonely
    assert_eq!(world.city_count(), 6);
    assert_eq!(world.road_count(), 5);
    assert!(world.city("Qu-ux").unwrap().occupants().is_empty());
}

#[test]
fn build_merges_repeated_cities() {
    let records = vec![
        WorldRecord::new("A").with_exit("n", "B"),
        WorldRecord::new("A").with_exit("s", "C"),
    ];
    let world = build_world(records.records(), Capacity::Unlimited).unwrap();
    assert_eq!(world.city_count(), 3);
    assert_eq!(world.roads_from("A").len(), 2);
}

#[test]
fn build_stops_at_first_error() {
    let records: Vec<Result<WorldRecord>> = vec![
        Ok(WorldRecord::new("A").with_exit("n", "B")),
        Err(Error::parse("bad pair", 2)),
    ];
    let err = build_world(records, Capacity::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { line: 2, .. }));
}

#[test]
fn untouched_world_round_trips() {
    let world = world();
    let remaining: Vec<WorldRecord> = remaining_records(&world).collect::<Result<_>>().unwrap();

    assert_eq!(edges(&remaining), edges(&sample()));
    // Cities without roads are left out.
    assert!(remaining.iter().all(|r| r.city.as_str() != "Lonely"));
}

#[test]
fn destroyed_cities_drop_out_of_records() {
    let mut world = world();
    world.city_mut("Bar").unwrap().destroy().unwrap();

    let remaining: Vec<WorldRecord> = remaining_records(&world).collect::<Result<_>>().unwrap();
    assert_eq!(
        remaining,
        vec![
            WorldRecord::new("Foo")
                .with_exit("west", "Baz")
                .with_exit("south", "Qu-ux")
        ]
    );
}

#[test]
fn records_flow_into_a_sink() {
    let world = world();
    let mut sink: Vec<WorldRecord> = Vec::new();
    sink.write_records(remaining_records(&world)).unwrap();
    assert_eq!(sink.len(), 2);
}
