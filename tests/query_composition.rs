//! Query Composition Tests
//!
//! Tests for predicate conjunction and result streaming:
//! - A conjunction yields exactly the intersection of its parts
//! - Results keep storage order unless sorted
//! - Unknown diameters never match a diameter bound
//! - Streams are lazy and can be cut short

use std::collections::BTreeSet;

use chrono::NaiveDate;
use neodb::database::NeoDatabase;
use neodb::model::time::parse_approach_time;
use neodb::model::{ApproachId, CloseApproach, NearEarthObject};
use neodb::query::{
    limit, Field, FilterOp, Operand, Predicate, QueryError, QueryExecutor, QueryPlan, SortKey,
    SortSpec,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn approach(des: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
    CloseApproach::new(des, parse_approach_time(time).unwrap(), distance, velocity)
}

/// Two hazardous objects and three non-hazardous ones, one approach each.
fn hazard_db() -> NeoDatabase {
    let neos = vec![
        NearEarthObject::new("1", None, Some(1.0), true),
        NearEarthObject::new("2", None, Some(2.0), false),
        NearEarthObject::new("3", None, Some(3.0), true),
        NearEarthObject::new("4", None, Some(4.0), false),
        NearEarthObject::new("5", None, None, false),
    ];
    let approaches = vec![
        approach("1", "2020-Jan-01 00:00", 0.1, 10.0),
        approach("2", "2020-Jan-02 00:00", 0.2, 20.0),
        approach("3", "2020-Jan-03 00:00", 0.3, 30.0),
        approach("4", "2020-Jan-04 00:00", 0.4, 40.0),
        approach("5", "2020-Jan-05 00:00", 0.5, 50.0),
    ];
    NeoDatabase::new(neos, approaches).unwrap()
}

fn mixed_db() -> NeoDatabase {
    let neos = vec![
        NearEarthObject::new("433", Some("Eros".into()), Some(16.84), false),
        NearEarthObject::new("99942", Some("Apophis".into()), Some(0.37), true),
        NearEarthObject::new("2020 AB", None, None, true),
    ];
    let approaches = vec![
        approach("433", "2020-Jan-01 03:00", 0.3, 5.5),
        approach("99942", "2020-Jan-01 21:46", 0.02, 7.4),
        approach("2020 AB", "2020-Jan-02 10:00", 0.05, 11.0),
        approach("433", "2020-Mar-10 07:23", 0.15, 5.8),
        approach("99942", "2029-Apr-13 21:46", 0.00025, 7.42),
        approach("2020 AB", "2020-Jan-01 00:00", 0.4, 3.1),
    ];
    NeoDatabase::new(neos, approaches).unwrap()
}

fn ids(db: &NeoDatabase, predicates: &[Predicate]) -> BTreeSet<ApproachId> {
    db.query(predicates).map(|r| r.id()).collect()
}

// =============================================================================
// Conjunction Tests
// =============================================================================

/// Hazardous filter over 2 hazardous and 3 non-hazardous objects yields 2.
#[test]
fn test_hazardous_filter_scenario() {
    let db = hazard_db();
    let predicates = [Predicate::hazardous(true)];

    let results: Vec<_> = db.query(&predicates).collect();

    assert_eq!(results.len(), 2);
    for record in &results {
        assert!(record.neo().unwrap().hazardous());
    }
}

/// The conjunction of predicates equals the intersection of each alone.
#[test]
fn test_conjunction_is_intersection() {
    let db = mixed_db();
    let parts = vec![
        Predicate::date_from(date(2020, 1, 1)),
        Predicate::date_until(date(2020, 1, 31)),
        Predicate::distance_max(0.35),
        Predicate::hazardous(true),
    ];

    let mut expected = ids(&db, &[]);
    for p in &parts {
        let alone = ids(&db, std::slice::from_ref(p));
        expected = expected.intersection(&alone).copied().collect();
    }

    assert_eq!(ids(&db, &parts), expected);
    assert_eq!(expected.len(), 2);
}

/// Predicate order does not change the result set.
#[test]
fn test_conjunction_order_independent() {
    let db = mixed_db();
    let forward = vec![Predicate::velocity_min(5.0), Predicate::diameter_max(1.0)];
    let reverse: Vec<_> = forward.iter().rev().cloned().collect();

    assert_eq!(ids(&db, &forward), ids(&db, &reverse));
}

/// No predicates returns every approach in storage order.
#[test]
fn test_empty_conjunction_returns_all() {
    let db = mixed_db();
    let order: Vec<usize> = db.query(&[]).map(|r| r.id().index()).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

/// Date equality compares the calendar date only.
#[test]
fn test_date_equality_ignores_time_of_day() {
    let db = mixed_db();
    let predicates = [Predicate::date_on(date(2020, 1, 1))];
    let designations: Vec<&str> = db
        .query(&predicates)
        .map(|r| r.approach().designation())
        .collect();
    assert_eq!(designations, vec!["433", "99942", "2020 AB"]);
}

// =============================================================================
// Unknown Diameter Tests
// =============================================================================

/// An object with unknown diameter matches neither a min nor a max bound.
#[test]
fn test_unknown_diameter_never_matches() {
    let db = hazard_db();

    let min = [Predicate::diameter_min(0.0)];
    let max = [Predicate::diameter_max(1000.0)];

    assert!(db.query(&min).all(|r| r.neo().unwrap().designation() != "5"));
    assert!(db.query(&max).all(|r| r.neo().unwrap().designation() != "5"));
    assert_eq!(db.query(&min).count(), 4);
    assert_eq!(db.query(&max).count(), 4);
}

// =============================================================================
// Predicate Validation Tests
// =============================================================================

#[test]
fn test_mismatched_operand_rejected() {
    let err = Predicate::new(Field::Velocity, FilterOp::AtLeast, Operand::Flag(true)).unwrap_err();
    assert!(matches!(err, QueryError::OperandMismatch { .. }));
}

#[test]
fn test_hazardous_range_rejected() {
    let err = Predicate::new(Field::Hazardous, FilterOp::AtMost, Operand::Flag(true)).unwrap_err();
    assert!(matches!(err, QueryError::UnsupportedOperator { .. }));
}

#[test]
fn test_constructed_predicate_matches_shorthand() {
    let built = Predicate::new(Field::Distance, FilterOp::AtMost, Operand::Number(0.1)).unwrap();
    assert_eq!(built, Predicate::distance_max(0.1));
}

// =============================================================================
// Laziness and Limit Tests
// =============================================================================

/// Pulling the first match stops the scan there.
#[test]
fn test_stream_stops_early() {
    let db = hazard_db();
    let predicates = [Predicate::hazardous(true)];

    let mut stream = db.query(&predicates);
    let first = stream.next().unwrap();

    assert_eq!(first.approach().designation(), "1");
    assert_eq!(stream.scanned(), 1);
}

#[test]
fn test_limit_helper() {
    let db = hazard_db();

    assert_eq!(limit(db.query(&[]), Some(3)).count(), 3);
    assert_eq!(limit(db.query(&[]), Some(0)).count(), 5);
    assert_eq!(limit(db.query(&[]), None).count(), 5);
    assert_eq!(limit(db.query(&[]), Some(50)).count(), 5);
}

/// Sort happens before limit.
#[test]
fn test_sorted_then_limited() {
    let db = mixed_db();
    let plan = QueryPlan::new()
        .with_predicate(Predicate::hazardous(true))
        .with_sort(SortSpec::asc(SortKey::Distance))
        .with_limit(2);

    let result = QueryExecutor::new(&db).execute(&plan);

    let distances: Vec<f64> = result.iter().map(|r| r.approach().distance()).collect();
    assert_eq!(distances, vec![0.00025, 0.02]);
    assert!(result.limit_applied);
    assert_eq!(result.scanned_count, 6);
}

/// Without a sort the limit is applied while streaming.
#[test]
fn test_unsorted_limit_scans_less() {
    let db = hazard_db();
    let plan = QueryPlan::new().with_limit(2);

    let result = QueryExecutor::new(&db).execute(&plan);

    assert_eq!(result.returned_count, 2);
    assert!(result.limit_applied);
    assert!(result.scanned_count < db.len_approaches());
}
