//! Object/approach linking
//!
//! Runs once, inside `NeoDatabase::new`. Builds the designation and name
//! indexes, resolves each approach's designation to an object handle, and
//! appends the approach handle to that object's list.
//!
//! Approach order within each object's list is load order.

use std::collections::HashMap;

use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};

use super::errors::{DatabaseError, DatabaseResult};

/// Output of a successful link pass
pub(super) struct LinkedTables {
    pub neos: Vec<NearEarthObject>,
    pub approaches: Vec<CloseApproach>,
    pub by_designation: HashMap<String, NeoId>,
    pub by_name: HashMap<String, NeoId>,
}

/// Links `approaches` to `neos` by designation.
///
/// Fails on the first duplicate object designation or the first approach
/// whose designation matches no object.
pub(super) fn link(
    mut neos: Vec<NearEarthObject>,
    mut approaches: Vec<CloseApproach>,
) -> DatabaseResult<LinkedTables> {
    let (by_designation, by_name) = build_indexes(&neos)?;

    for neo in neos.iter_mut() {
        neo.approaches.clear();
    }

    for (index, approach) in approaches.iter_mut().enumerate() {
        let neo_id = *by_designation.get(approach.designation()).ok_or_else(|| {
            DatabaseError::UnresolvedDesignation {
                designation: approach.designation().to_string(),
                index,
            }
        })?;

        approach.neo = Some(neo_id);
        neos[neo_id.0].approaches.push(ApproachId(index));
    }

    Ok(LinkedTables {
        neos,
        approaches,
        by_designation,
        by_name,
    })
}

/// Builds designation and name indexes. First name occurrence wins.
fn build_indexes(
    neos: &[NearEarthObject],
) -> DatabaseResult<(HashMap<String, NeoId>, HashMap<String, NeoId>)> {
    let mut by_designation = HashMap::with_capacity(neos.len());
    let mut by_name = HashMap::new();

    for (index, neo) in neos.iter().enumerate() {
        let id = NeoId(index);

        if by_designation
            .insert(neo.designation().to_string(), id)
            .is_some()
        {
            return Err(DatabaseError::DuplicateDesignation(
                neo.designation().to_string(),
            ));
        }

        if let Some(name) = neo.name() {
            by_name.entry(name.to_string()).or_insert(id);
        }
    }

    Ok((by_designation, by_name))
}
