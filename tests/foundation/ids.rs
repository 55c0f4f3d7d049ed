//! Integration tests for city and monster identifiers

use std::collections::{BTreeSet, HashMap};

use rampage_foundation::{CityName, MonsterId};

// =============================================================================
// City Names
// =============================================================================

#[test]
fn city_names_compare_by_content() {
    let a = CityName::new("Asnu");
    let b = CityName::from(String::from("Asnu"));
    assert_eq!(a, b);
    assert_ne!(a, CityName::from("asnu"));
}

#[test]
fn city_names_key_maps_by_str() {
    let mut occupancy: HashMap<CityName, usize> = HashMap::new();
    occupancy.insert(CityName::new("Denalmo"), 2);

    assert_eq!(occupancy.get("Denalmo"), Some(&2));
    assert_eq!(occupancy.get("Migina"), None);
}

#[test]
fn city_names_sort_lexically() {
    let names: BTreeSet<CityName> = ["Migina", "Ago", "Denalmo"]
        .into_iter()
        .map(CityName::from)
        .collect();
    let sorted: Vec<&str> = names.iter().map(CityName::as_str).collect();
    assert_eq!(sorted, vec!["Ago", "Denalmo", "Migina"]);
}

// =============================================================================
// Monster IDs
// =============================================================================

#[test]
fn monster_ids_order_numerically() {
    let mut ids = vec![MonsterId::new(10), MonsterId::new(2), MonsterId::from(7)];
    ids.sort();
    assert_eq!(ids, vec![MonsterId(2), MonsterId(7), MonsterId(10)]);
}

#[test]
fn monster_id_display() {
    assert_eq!(MonsterId::new(42).to_string(), "#42");
    assert_eq!(MonsterId::new(42).get(), 42);
}
