//! Linked view of a single close approach

use std::fmt;

use crate::model::{ApproachId, CloseApproach, NearEarthObject};

/// A close approach together with its owning object
///
/// Borrowed from a [`NeoDatabase`](super::NeoDatabase); this is what queries
/// yield and what predicates evaluate against. `neo` is `None` only for an
/// approach that was never linked.
#[derive(Debug, Clone, Copy)]
pub struct ApproachRecord<'a> {
    id: ApproachId,
    approach: &'a CloseApproach,
    neo: Option<&'a NearEarthObject>,
}

impl<'a> ApproachRecord<'a> {
    pub(crate) fn new(
        id: ApproachId,
        approach: &'a CloseApproach,
        neo: Option<&'a NearEarthObject>,
    ) -> Self {
        Self { id, approach, neo }
    }

    /// Handle of the approach in its database
    pub fn id(&self) -> ApproachId {
        self.id
    }

    pub fn approach(&self) -> &'a CloseApproach {
        self.approach
    }

    /// The owning object
    pub fn neo(&self) -> Option<&'a NearEarthObject> {
        self.neo
    }
}

impl PartialEq for ApproachRecord<'_> {
    /// Identity comparison: same arena slot, same record.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.approach, other.approach)
    }
}

impl Eq for ApproachRecord<'_> {}

impl fmt::Display for ApproachRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fullname = match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation().to_string(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            fullname,
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}
