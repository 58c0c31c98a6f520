//! In-memory NEO database
//!
//! Owns the object and approach arenas, the lookup indexes, and the entry
//! point to the query engine.
//!
//! # Construction
//!
//! `NeoDatabase::new` takes both record collections by value and links them
//! once. Membership never changes afterwards, so every index built here stays
//! valid for the life of the database and shared reads need no locking.
//!
//! # Invariants
//!
//! - Designations are unique
//! - Every approach resolves to exactly one object (construction fails otherwise)
//! - For every object O and approach A in O's list, A's owner is O, and vice versa

mod errors;
mod linker;
mod record;

use std::collections::HashMap;

use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use crate::observability::Logger;
use crate::query::{Matches, Predicate};

pub use errors::{DatabaseError, DatabaseResult};
pub use record::ApproachRecord;

/// A linked, read-only collection of NEOs and their close approaches
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Links `neos` and `approaches` into a new database.
    ///
    /// Fails with [`DatabaseError::UnresolvedDesignation`] if any approach
    /// names an object that is not in `neos`, and with
    /// [`DatabaseError::DuplicateDesignation`] if two objects share a
    /// designation.
    pub fn new(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> DatabaseResult<Self> {
        let tables = linker::link(neos, approaches)?;

        Logger::trace(
            "DATABASE_LINKED",
            &[
                ("approaches", &tables.approaches.len().to_string()),
                ("neos", &tables.neos.len().to_string()),
            ],
        );

        Ok(Self {
            neos: tables.neos,
            approaches: tables.approaches,
            by_designation: tables.by_designation,
            by_name: tables.by_name,
        })
    }

    /// Finds an object by primary designation. Exact, case-sensitive match.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .and_then(|id| self.neo(*id))
    }

    /// Finds an object by IAU name. Exact match; the empty string never matches.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(name).and_then(|id| self.neo(*id))
    }

    /// Like [`get_neo_by_name`](Self::get_neo_by_name), treating `None` as a miss.
    pub fn get_neo_by_optional_name(&self, name: Option<&str>) -> Option<&NearEarthObject> {
        name.and_then(|n| self.get_neo_by_name(n))
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// All objects, in load order
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All approaches, in load order
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn len_neos(&self) -> usize {
        self.neos.len()
    }

    pub fn len_approaches(&self) -> usize {
        self.approaches.len()
    }

    /// Owning object of `approach`
    pub fn neo_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo_id().and_then(|id| self.neo(id))
    }

    /// Linked view of one approach
    pub fn record(&self, id: ApproachId) -> Option<ApproachRecord<'_>> {
        self.approach(id)
            .map(|approach| ApproachRecord::new(id, approach, self.neo_of(approach)))
    }

    /// Linked views of `neo`'s approaches, in load order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = ApproachRecord<'a>> + 'a {
        neo.approach_ids().iter().filter_map(move |id| self.record(*id))
    }

    /// Streams the approaches matching every predicate, in storage order.
    ///
    /// An empty slice matches everything. The returned iterator is lazy and
    /// single-pass; call `query` again to re-run.
    pub fn query<'a>(&'a self, predicates: &'a [Predicate]) -> Matches<'a> {
        Matches::new(self, predicates)
    }
}
