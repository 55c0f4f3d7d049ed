//! Integration tests for the world graph

use rampage_foundation::{ErrorCategory, ErrorKind, MonsterId};
use rampage_storage::{Capacity, City, Monster, Road, World};

fn triangle() -> World {
    let mut world = World::new();
    for name in ["A", "B", "C"] {
        world.add_city(City::new(name, Capacity::Limited(2)));
    }
    world.add_road(Road::new("east", "A", "B")).unwrap();
    world.add_road(Road::new("south", "A", "C")).unwrap();
    world.add_road(Road::new("west", "B", "A")).unwrap();
    world
}

fn names<'a>(cities: impl IntoIterator<Item = &'a City>) -> Vec<&'a str> {
    cities.into_iter().map(|c| c.name().as_str()).collect()
}

#[test]
fn world_starts_empty() {
    let world = World::new();
    assert_eq!(world.city_count(), 0);
    assert_eq!(world.road_count(), 0);
    assert!(world.undestroyed_cities().is_empty());
}

#[test]
fn adding_a_city_twice_keeps_the_first() {
    let mut world = World::new();
    assert!(world.add_city(City::new("A", Capacity::Limited(2))));
    assert!(!world.add_city(City::new("A", Capacity::Unlimited)));
    assert_eq!(world.city_count(), 1);
    assert_eq!(world.city("A").unwrap().capacity(), Capacity::Limited(2));
}

#[test]
fn roads_need_a_known_source() {
    let mut world = triangle();
    let err = world.add_road(Road::new("up", "Z", "A")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCity(_)));
}

#[test]
fn roads_are_directed() {
    let world = triangle();
    assert_eq!(world.road_count(), 3);
    assert_eq!(names(world.reachable_from("A").unwrap()), vec!["B", "C"]);
    assert_eq!(names(world.reachable_from("B").unwrap()), vec!["A"]);
    assert!(world.reachable_from("C").unwrap().is_empty());
}

#[test]
fn destroyed_cities_are_unreachable() {
    let mut world = triangle();
    world.city_mut("B").unwrap().destroy().unwrap();

    assert_eq!(names(world.reachable_from("A").unwrap()), vec!["C"]);
    assert_eq!(names(world.undestroyed_cities()), vec!["A", "C"]);
    assert_eq!(names(world.destroyed_cities()), vec!["B"]);
    // Still part of the graph.
    assert_eq!(world.city_count(), 3);
    assert_eq!(world.roads_from("B").len(), 1);
}

#[test]
fn reachable_from_unknown_city_fails() {
    let world = triangle();
    let err = world.reachable_from("Nowhere").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Structural);
}

#[test]
fn missing_destination_is_structural() {
    let mut world = triangle();
    world.add_road(Road::new("north", "C", "Ghost")).unwrap();

    let err = world.reachable_from("C").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCity(ref c) if c.as_str() == "Ghost"));
}

#[test]
fn locate_finds_the_occupied_city() {
    let mut world = triangle();
    let id = MonsterId::new(3);
    world
        .city_mut("C")
        .unwrap()
        .admit(Monster::new(id, "Ahu"))
        .unwrap();

    assert_eq!(world.locate(id).map(|c| c.name().as_str()), Some("C"));
    assert!(world.locate(MonsterId::new(4)).is_none());
}
