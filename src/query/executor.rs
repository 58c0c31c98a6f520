//! Query executor for neodb
//!
//! Runs a plan against a database. Execution flow (strict order):
//! 1. Stream approaches matching every predicate, in storage order
//! 2. Apply sort (if specified)
//! 3. Apply limit
//! 4. Return ordered results
//!
//! Without a sort, the limit is applied while streaming so the scan stops
//! once enough matches are found.

use crate::database::{ApproachRecord, NeoDatabase};
use crate::observability::Logger;

use super::criteria::QueryCriteria;
use super::errors::QueryResult;
use super::predicate::Predicate;
use super::sorter::{ResultSorter, SortSpec};

/// Caps an iterator at `n` items. `None` or `Some(0)` means unlimited.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> std::iter::Take<I> {
    iter.take(effective_limit(n).unwrap_or(usize::MAX))
}

fn effective_limit(n: Option<usize>) -> Option<usize> {
    n.filter(|n| *n > 0)
}

/// Predicates plus the optional post-processing steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    /// Filter predicates (all combined with AND)
    pub predicates: Vec<Predicate>,
    /// Optional ordering applied after filtering
    pub sort: Option<SortSpec>,
    /// Maximum number of results; `None` or `Some(0)` means unlimited
    pub limit: Option<usize>,
}

impl QueryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan with one predicate per criterion that is set
    pub fn from_criteria(criteria: &QueryCriteria) -> QueryResult<Self> {
        Ok(Self {
            predicates: criteria.to_predicates()?,
            ..Self::default()
        })
    }

    /// Adds a predicate
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of plan execution
#[derive(Debug, Clone)]
pub struct ExecutionResult<'a> {
    /// Records in result order
    pub records: Vec<ApproachRecord<'a>>,
    /// Number of approaches examined
    pub scanned_count: usize,
    /// Number of records returned
    pub returned_count: usize,
    /// Whether the limit cut off further matches
    pub limit_applied: bool,
}

impl<'a> ExecutionResult<'a> {
    /// Returns true if nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &ApproachRecord<'a>> {
        self.records.iter()
    }
}

/// Executes query plans against a database
pub struct QueryExecutor<'a> {
    db: &'a NeoDatabase,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(db: &'a NeoDatabase) -> Self {
        Self { db }
    }

    /// Executes a plan and returns results.
    ///
    /// Deterministic: same plan + same data = same results.
    pub fn execute(&self, plan: &'a QueryPlan) -> ExecutionResult<'a> {
        let mut matches = self.db.query(&plan.predicates);
        let limit = effective_limit(plan.limit);

        let (records, limit_applied) = match &plan.sort {
            None => {
                let records: Vec<_> = matches.by_ref().take(limit.unwrap_or(usize::MAX)).collect();
                let limit_applied =
                    limit.is_some_and(|n| records.len() == n) && matches.next().is_some();
                (records, limit_applied)
            }
            Some(spec) => {
                let mut records: Vec<_> = matches.by_ref().collect();
                ResultSorter::sort(&mut records, spec);
                let limit_applied = limit.is_some_and(|n| records.len() > n);
                if let Some(n) = limit {
                    records.truncate(n);
                }
                (records, limit_applied)
            }
        };

        let result = ExecutionResult {
            returned_count: records.len(),
            scanned_count: matches.scanned(),
            limit_applied,
            records,
        };

        Logger::trace(
            "QUERY_EXECUTED",
            &[
                ("limit_applied", &result.limit_applied.to_string()),
                ("predicates", &plan.predicates.len().to_string()),
                ("returned", &result.returned_count.to_string()),
                ("scanned", &result.scanned_count.to_string()),
            ],
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::time::parse_approach_time;
    use crate::model::{CloseApproach, NearEarthObject};
    use crate::query::sorter::SortKey;

    fn make_db() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::new("h", None, Some(0.5), true),
            NearEarthObject::new("s", None, Some(0.1), false),
        ];
        let approaches = vec![
            CloseApproach::new("h", parse_approach_time("2000-01-05 00:00").unwrap(), 0.40, 9.0),
            CloseApproach::new("s", parse_approach_time("2000-01-04 00:00").unwrap(), 0.10, 8.0),
            CloseApproach::new("h", parse_approach_time("2000-01-03 00:00").unwrap(), 0.20, 7.0),
            CloseApproach::new("s", parse_approach_time("2000-01-02 00:00").unwrap(), 0.30, 6.0),
            CloseApproach::new("h", parse_approach_time("2000-01-01 00:00").unwrap(), 0.05, 5.0),
        ];
        NeoDatabase::new(neos, approaches).unwrap()
    }

    fn ids(result: &ExecutionResult<'_>) -> Vec<usize> {
        result.iter().map(|r| r.id().index()).collect()
    }

    #[test]
    fn test_limit_helper() {
        assert_eq!(limit(0..10, Some(3)).count(), 3);
        assert_eq!(limit(0..10, Some(0)).count(), 10);
        assert_eq!(limit(0..10, None).count(), 10);
        assert_eq!(limit(0..2, Some(5)).count(), 2);
    }

    #[test]
    fn test_execute_unsorted_keeps_storage_order() {
        let db = make_db();
        let plan = QueryPlan::new().with_predicate(Predicate::hazardous(true));
        let result = QueryExecutor::new(&db).execute(&plan);

        assert_eq!(ids(&result), vec![0, 2, 4]);
        assert_eq!(result.scanned_count, 5);
        assert!(!result.limit_applied);
    }

    #[test]
    fn test_execute_limit_stops_scan_early() {
        let db = make_db();
        let plan = QueryPlan::new().with_limit(1);
        let result = QueryExecutor::new(&db).execute(&plan);

        assert_eq!(ids(&result), vec![0]);
        assert!(result.limit_applied);
        // One record taken, one more pulled to detect truncation
        assert_eq!(result.scanned_count, 2);
    }

    #[test]
    fn test_execute_limit_exact_fit_not_applied() {
        let db = make_db();
        let plan = QueryPlan::new()
            .with_predicate(Predicate::hazardous(false))
            .with_limit(2);
        let result = QueryExecutor::new(&db).execute(&plan);

        assert_eq!(ids(&result), vec![1, 3]);
        assert!(!result.limit_applied);
    }

    #[test]
    fn test_execute_sorted_then_limited() {
        let db = make_db();
        let plan = QueryPlan::new()
            .with_sort(SortSpec::asc(SortKey::Distance))
            .with_limit(2);
        let result = QueryExecutor::new(&db).execute(&plan);

        assert_eq!(ids(&result), vec![4, 1]);
        assert_eq!(result.returned_count, 2);
        assert_eq!(result.scanned_count, 5);
        assert!(result.limit_applied);
    }

    #[test]
    fn test_execute_zero_limit_is_unlimited() {
        let db = make_db();
        let plan = QueryPlan::new().with_limit(0);
        let result = QueryExecutor::new(&db).execute(&plan);
        assert_eq!(result.len(), 5);
        assert!(!result.limit_applied);
    }

    #[test]
    fn test_from_criteria() {
        let criteria = QueryCriteria {
            distance_max: Some(0.2),
            ..Default::default()
        };
        let db = make_db();
        let plan = QueryPlan::from_criteria(&criteria).unwrap();
        let result = QueryExecutor::new(&db).execute(&plan);
        assert_eq!(ids(&result), vec![1, 2, 4]);
    }

    #[test]
    fn test_execute_no_match() {
        let db = make_db();
        let plan = QueryPlan::new().with_predicate(Predicate::velocity_min(100.0));
        let result = QueryExecutor::new(&db).execute(&plan);
        assert!(result.is_empty());
    }
}
