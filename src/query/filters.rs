//! Predicate filtering for query execution
//!
//! Evaluates predicates against linked approach records.
//! AND semantics, no coercion, unknown values never match.

use crate::database::ApproachRecord;

use super::predicate::Predicate;

/// Evaluates predicates against approach records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches all predicates.
    ///
    /// Stops at the first predicate that fails.
    pub fn matches(record: &ApproachRecord<'_>, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(record, pred))
    }

    /// Checks if a record matches a single predicate
    pub fn matches_predicate(record: &ApproachRecord<'_>, predicate: &Predicate) -> bool {
        let actual = match predicate.field().extract(record) {
            Some(v) => v,
            None => return false, // Unknown value = no match
        };

        predicate
            .op()
            .accepts(actual.compare(&predicate.operand()))
    }
}
