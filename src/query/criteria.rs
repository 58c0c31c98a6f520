//! User-facing query criteria
//!
//! Collects the optional criteria a caller can supply (from the command line
//! or a JSON request) and turns each one that is present into a predicate.

use chrono::NaiveDate;
use serde::Deserialize;

use super::errors::QueryResult;
use super::predicate::{Field, FilterOp, Operand, Predicate};

/// Optional filter criteria, all combined with AND
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryCriteria {
    /// Exact approach date
    pub date: Option<NaiveDate>,
    /// First approach date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Last approach date, inclusive
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl QueryCriteria {
    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// One predicate per criterion that is set, in declaration order.
    ///
    /// Fails on the first non-finite numeric bound.
    pub fn to_predicates(&self) -> QueryResult<Vec<Predicate>> {
        let mut predicates = Vec::new();

        if let Some(d) = self.date {
            predicates.push(Predicate::date_on(d));
        }
        if let Some(d) = self.start_date {
            predicates.push(Predicate::date_from(d));
        }
        if let Some(d) = self.end_date {
            predicates.push(Predicate::date_until(d));
        }

        let bounds = [
            (Field::Distance, FilterOp::AtLeast, self.distance_min),
            (Field::Distance, FilterOp::AtMost, self.distance_max),
            (Field::Velocity, FilterOp::AtLeast, self.velocity_min),
            (Field::Velocity, FilterOp::AtMost, self.velocity_max),
            (Field::Diameter, FilterOp::AtLeast, self.diameter_min),
            (Field::Diameter, FilterOp::AtMost, self.diameter_max),
        ];
        for (field, op, value) in bounds {
            if let Some(v) = value {
                predicates.push(Predicate::new(field, op, Operand::Number(v))?);
            }
        }

        if let Some(flag) = self.hazardous {
            predicates.push(Predicate::hazardous(flag));
        }

        Ok(predicates)
    }
}
