//! Lazy query result stream

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::database::{ApproachRecord, NeoDatabase};
use crate::model::{ApproachId, CloseApproach};

use super::filters::PredicateFilter;
use super::predicate::Predicate;

/// Iterator over the approaches that satisfy every predicate
///
/// Holds a cursor into the database's approach arena. Each call to `next`
/// advances the cursor until a match is found or the arena is exhausted,
/// so callers can stop pulling at any point. Yields in storage order.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    db: &'a NeoDatabase,
    cursor: Enumerate<slice::Iter<'a, CloseApproach>>,
    predicates: &'a [Predicate],
    scanned: usize,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(db: &'a NeoDatabase, predicates: &'a [Predicate]) -> Self {
        Self {
            db,
            cursor: db.approaches().iter().enumerate(),
            predicates,
            scanned: 0,
        }
    }

    /// Number of approaches examined so far
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = ApproachRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, approach) in self.cursor.by_ref() {
            self.scanned += 1;

            let record = ApproachRecord::new(ApproachId(index), approach, self.db.neo_of(approach));
            if PredicateFilter::matches(&record, self.predicates) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}

impl FusedIterator for Matches<'_> {}
