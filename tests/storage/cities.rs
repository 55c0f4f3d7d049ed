//! Integration tests for city capacity and destruction

use rampage_foundation::{ErrorCategory, ErrorKind, MonsterId};
use rampage_storage::{Capacity, City, Monster};

fn monster(id: u32) -> Monster {
    Monster::new(MonsterId::new(id), format!("m{id}"))
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn capacity_from_raw_values() {
    assert_eq!(Capacity::try_from(-1_i64).unwrap(), Capacity::Unlimited);
    assert_eq!(Capacity::try_from(0_i64).unwrap(), Capacity::Limited(0));
    assert_eq!(Capacity::try_from(5_i64).unwrap(), Capacity::Limited(5));

    let err = Capacity::try_from(-2_i64).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCapacity(-2)));
}

#[test]
fn default_capacity_is_two() {
    assert_eq!(Capacity::default(), Capacity::Limited(2));
    assert_eq!(Capacity::default().to_string(), "2");
    assert_eq!(Capacity::Unlimited.to_string(), "unlimited");
}

// =============================================================================
// Admission
// =============================================================================

#[test]
fn reaching_capacity_destroys_immediately() {
    let mut city = City::new("Asnu", Capacity::Limited(3));

    assert!(!city.admit(monster(0)).unwrap());
    assert!(!city.admit(monster(1)).unwrap());
    assert!(!city.is_destroyed());

    assert!(city.admit(monster(2)).unwrap());
    assert!(city.is_destroyed());
    assert_eq!(city.occupancy(), 3);
}

#[test]
fn full_city_rejects_without_admitting() {
    let mut city = City::new("Asnu", Capacity::Limited(1));
    assert!(city.admit(monster(0)).unwrap());

    let err = city.admit(monster(1)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Capacity);
    assert_eq!(city.occupancy(), 1);
    assert!(!city.occupants().contains(MonsterId::new(1)));
}

#[test]
fn zero_capacity_city_rejects_and_destroys() {
    let mut city = City::new("Void", Capacity::Limited(0));
    assert!(city.admit(monster(0)).is_err());
    assert!(city.is_destroyed());
    assert_eq!(city.occupancy(), 0);
}

#[test]
fn unlimited_city_never_self_destructs() {
    let mut city = City::new("Metropolis", Capacity::Unlimited);
    for id in 0..100 {
        assert!(!city.admit(monster(id)).unwrap());
    }
    assert_eq!(city.occupancy(), 100);
    assert!(!city.is_destroyed());
}

#[test]
fn duplicate_admission_is_a_collection_error() {
    let mut city = City::new("Asnu", Capacity::Unlimited);
    city.admit(monster(4)).unwrap();
    let err = city.admit(monster(4)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Collection);
}

// =============================================================================
// Eviction and Destruction
// =============================================================================

#[test]
fn evict_returns_the_monster() {
    let mut city = City::new("Asnu", Capacity::Limited(5));
    city.admit(monster(7)).unwrap();

    let evicted = city.evict(MonsterId::new(7)).unwrap();
    assert_eq!(evicted.name(), "m7");
    assert_eq!(city.occupancy(), 0);
    assert!(city.evict(MonsterId::new(7)).is_err());
}

#[test]
fn destruction_is_one_way() {
    let mut city = City::new("Asnu", Capacity::Limited(5));
    city.destroy().unwrap();
    assert!(city.is_destroyed());

    let err = city.destroy().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CityAlreadyDestroyed(_)));
    assert!(city.is_destroyed());
}
