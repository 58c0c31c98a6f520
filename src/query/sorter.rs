//! Result sorting for query execution
//!
//! Ordering is a post-processing step over collected results. The query
//! stream itself always yields in storage order.

use std::cmp::Ordering;

use crate::database::ApproachRecord;

/// Approach attribute results can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Time,
    Distance,
    Velocity,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Attribute to sort by
    pub key: SortKey,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Sorts approach records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to sort specification.
    ///
    /// Sort is stable and deterministic; ties keep storage order.
    pub fn sort(records: &mut [ApproachRecord<'_>], spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, spec.key);

            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn compare(a: &ApproachRecord<'_>, b: &ApproachRecord<'_>, key: SortKey) -> Ordering {
        let (a, b) = (a.approach(), b.approach());
        match key {
            SortKey::Time => a.time().cmp(&b.time()),
            SortKey::Distance => a.distance().total_cmp(&b.distance()),
            SortKey::Velocity => a.velocity().total_cmp(&b.velocity()),
        }
    }
}
