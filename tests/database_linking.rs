//! Database Linking Tests
//!
//! Tests for registry and linker invariants:
//! - Every object is found by its own designation and name
//! - Links are bidirectional
//! - Unresolvable designations fail construction
//! - Lookup misses return None

use chrono::NaiveDateTime;
use neodb::database::{DatabaseError, NeoDatabase};
use neodb::model::time::parse_approach_time;
use neodb::model::{CloseApproach, NearEarthObject};

// =============================================================================
// Helper Functions
// =============================================================================

fn at(s: &str) -> NaiveDateTime {
    parse_approach_time(s).unwrap()
}

fn make_neos() -> Vec<NearEarthObject> {
    vec![
        NearEarthObject::new("433", Some("Eros".into()), Some(16.84), false),
        NearEarthObject::new("99942", Some("Apophis".into()), Some(0.37), true),
        NearEarthObject::new("2020 AB", None, None, true),
        NearEarthObject::new("719", Some(String::new()), None, false),
    ]
}

fn make_approaches() -> Vec<CloseApproach> {
    vec![
        CloseApproach::new("433", at("1900-Jan-01 00:00"), 0.3, 5.5),
        CloseApproach::new("99942", at("2029-Apr-13 21:46"), 0.00025, 7.42),
        CloseApproach::new("433", at("1975-Jan-23 07:23"), 0.15, 5.8),
        CloseApproach::new("2020 AB", at("2020-Jan-05 10:00"), 0.02, 11.0),
        CloseApproach::new("99942", at("2036-Mar-27 05:00"), 0.3, 3.1),
    ]
}

fn make_db() -> NeoDatabase {
    NeoDatabase::new(make_neos(), make_approaches()).unwrap()
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Single object, single approach: linked both ways.
#[test]
fn test_eros_scenario() {
    let neos = vec![NearEarthObject::new(
        "433",
        Some("Eros".into()),
        Some(16.84),
        false,
    )];
    let approaches = vec![CloseApproach::new("433", at("1900-Jan-01 00:00"), 0.3, 5.5)];

    let db = NeoDatabase::new(neos, approaches).unwrap();

    let eros = db.get_neo_by_designation("433").unwrap();
    assert_eq!(eros.approach_ids().len(), 1);

    let approach = db.approach(eros.approach_ids()[0]).unwrap();
    let owner = db.neo_of(approach).unwrap();
    assert_eq!(owner.name(), Some("Eros"));
}

/// Approach referencing a missing designation fails construction.
#[test]
fn test_unresolvable_designation_fails_fast() {
    let mut approaches = make_approaches();
    approaches.push(CloseApproach::new("999999", at("2000-Jan-01 00:00"), 0.1, 1.0));

    let err = NeoDatabase::new(make_neos(), approaches).unwrap_err();

    assert_eq!(
        err,
        DatabaseError::UnresolvedDesignation {
            designation: "999999".into(),
            index: 5,
        }
    );
    assert!(err.to_string().contains("999999"));
}

/// Duplicate designations are rejected.
#[test]
fn test_duplicate_designation_rejected() {
    let mut neos = make_neos();
    neos.push(NearEarthObject::new("433", None, None, false));

    let err = NeoDatabase::new(neos, Vec::new()).unwrap_err();
    assert_eq!(err, DatabaseError::DuplicateDesignation("433".into()));
}

// =============================================================================
// Lookup Tests
// =============================================================================

/// Every object is found by its own designation.
#[test]
fn test_designation_lookup_is_identity() {
    let db = make_db();
    for neo in db.neos() {
        let found = db.get_neo_by_designation(neo.designation()).unwrap();
        assert!(std::ptr::eq(found, neo));
    }
}

/// Every named object is found by its own name.
#[test]
fn test_name_lookup_is_identity() {
    let db = make_db();
    for neo in db.neos() {
        if let Some(name) = neo.name() {
            let found = db.get_neo_by_name(name).unwrap();
            assert!(std::ptr::eq(found, neo));
        }
    }
}

/// Empty string and None never match, even with an object whose raw name was empty.
#[test]
fn test_empty_name_never_matches() {
    let db = make_db();
    assert!(db.get_neo_by_name("").is_none());
    assert!(db.get_neo_by_optional_name(None).is_none());
    assert!(db.get_neo_by_optional_name(Some("")).is_none());

    let blank = db.get_neo_by_designation("719").unwrap();
    assert_eq!(blank.name(), None);
}

/// Absent keys return None.
#[test]
fn test_lookup_misses() {
    let db = make_db();
    assert!(db.get_neo_by_designation("1").is_none());
    assert!(db.get_neo_by_designation("433 ").is_none());
    assert!(db.get_neo_by_name("Ceres").is_none());
    assert!(db.get_neo_by_name("apophis").is_none());
}

// =============================================================================
// Bidirectional Consistency Tests
// =============================================================================

/// Every approach appears in its owner's list.
#[test]
fn test_every_approach_in_owner_list() {
    let db = make_db();
    for record in db.query(&[]) {
        let owner = record.neo().unwrap();
        assert!(owner.approach_ids().contains(&record.id()));
        assert_eq!(owner.designation(), record.approach().designation());
    }
}

/// Every listed approach points back at the object listing it.
#[test]
fn test_every_listed_approach_points_back() {
    let db = make_db();
    for neo in db.neos() {
        for record in db.approaches_of(neo) {
            assert!(std::ptr::eq(record.neo().unwrap(), neo));
        }
    }
}

/// Per-object lists keep load order and objects without approaches get an empty list.
#[test]
fn test_object_lists_in_load_order() {
    let db = make_db();

    let eros = db.get_neo_by_designation("433").unwrap();
    let times: Vec<String> = db
        .approaches_of(eros)
        .map(|r| r.approach().time_str())
        .collect();
    assert_eq!(times, vec!["1900-01-01 00:00", "1975-01-23 07:23"]);

    let bare = db.get_neo_by_designation("719").unwrap();
    assert!(bare.approach_ids().is_empty());
}

/// Linking neither adds nor drops records.
#[test]
fn test_membership_preserved() {
    let db = make_db();
    assert_eq!(db.len_neos(), 4);
    assert_eq!(db.len_approaches(), 5);

    let linked: usize = db.neos().iter().map(|n| n.approach_ids().len()).sum();
    assert_eq!(linked, db.len_approaches());
}
