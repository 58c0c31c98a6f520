//! Close approach record

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::neo::NeoId;
use super::time::{format_approach_time, truncate_to_minute};

/// Handle to an approach in a [`NeoDatabase`](crate::database::NeoDatabase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Position of the approach in the database's approach arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A close approach to Earth by an NEO
///
/// Holds the time of closest approach (UTC, minute precision), the nominal
/// distance in astronomical units and the relative velocity in km/s. Until
/// linked, the owning object is known only by designation.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates an unlinked approach. Seconds are dropped from `time`.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time: truncate_to_minute(time),
            distance,
            velocity,
            neo: None,
        }
    }

    /// Designation of the owning object
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Nominal approach distance (au)
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity (km/s)
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Handle of the owning object, once linked
    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo
    }

    /// Approach time as `YYYY-MM-DD HH:MM`
    pub fn time_str(&self) -> String {
        format_approach_time(&self.time)
    }

    /// Flat field mapping for CSV/JSON output
    pub fn serialize(&self) -> ApproachSummary {
        ApproachSummary {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

/// User-facing fields of a [`CloseApproach`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachSummary {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
}
