//! Near-Earth object record

use std::fmt;

use serde::Serialize;

use super::approach::ApproachId;

/// Handle to an object in a [`NeoDatabase`](crate::database::NeoDatabase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position of the object in the database's object arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A near-Earth object (NEO)
///
/// Carries the primary designation (required, unique), the IAU name
/// (optional), the diameter in kilometers (optional, often unknown) and the
/// potentially-hazardous flag. The `approaches` list is empty until the
/// database links it.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: Option<f64>,
    hazardous: bool,
    pub(crate) approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an unlinked object.
    ///
    /// An empty name normalizes to `None`, as does a NaN or infinite diameter.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter: diameter.filter(|d| d.is_finite()),
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Primary designation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if the object has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, if known
    pub fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    /// Whether the object is flagged potentially hazardous
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Handles of this object's close approaches, in load order
    pub fn approach_ids(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `designation` or `designation (name)`
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Flat field mapping for CSV/JSON output
    pub fn serialize(&self) -> NeoSummary {
        NeoSummary {
            designation: self.designation.clone(),
            name: self.name.clone(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous {
            "potentially hazardous"
        } else {
            "not potentially hazardous"
        };
        match self.diameter {
            Some(d) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and is {}.",
                self.fullname(),
                d,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and is {}.",
                self.fullname(),
                hazard
            ),
        }
    }
}

/// User-facing fields of a [`NearEarthObject`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoSummary {
    pub designation: String,
    pub name: Option<String>,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: bool,
}
