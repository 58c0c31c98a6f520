//! Predicate structures
//!
//! A predicate is one field selector, one comparison operator and one
//! operand. The set of fields is closed; each field accepts exactly one
//! operand kind, checked when the predicate is built.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::database::ApproachRecord;

use super::errors::{QueryError, QueryResult};

/// Approach attribute a predicate inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Calendar date of closest approach
    Date,
    /// Nominal approach distance (au)
    Distance,
    /// Relative approach velocity (km/s)
    Velocity,
    /// Diameter of the owning object (km)
    Diameter,
    /// Hazard flag of the owning object
    Hazardous,
}

impl Field {
    /// Name used in predicate display and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Distance => "distance",
            Field::Velocity => "velocity",
            Field::Diameter => "diameter",
            Field::Hazardous => "hazardous",
        }
    }

    /// The only operand kind this field compares against
    pub fn operand_kind(&self) -> OperandKind {
        match self {
            Field::Date => OperandKind::Date,
            Field::Distance | Field::Velocity | Field::Diameter => OperandKind::Number,
            Field::Hazardous => OperandKind::Flag,
        }
    }

    /// Reads this field from a record.
    ///
    /// Returns `None` when the value is unknown: an unknown diameter, or any
    /// object field on an unlinked approach.
    pub fn extract(&self, record: &ApproachRecord<'_>) -> Option<Operand> {
        let approach = record.approach();
        match self {
            Field::Date => Some(Operand::Date(approach.time().date())),
            Field::Distance => Some(Operand::Number(approach.distance())),
            Field::Velocity => Some(Operand::Number(approach.velocity())),
            Field::Diameter => record
                .neo()
                .and_then(|neo| neo.diameter())
                .map(Operand::Number),
            Field::Hazardous => record.neo().map(|neo| Operand::Flag(neo.hazardous())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// field == operand
    Eq,
    /// field >= operand
    AtLeast,
    /// field <= operand
    AtMost,
}

impl FilterOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOp::Eq => "==",
            FilterOp::AtLeast => ">=",
            FilterOp::AtMost => "<=",
        }
    }

    /// Whether an ordering between actual and expected satisfies the operator.
    ///
    /// `None` (incomparable) never satisfies anything.
    pub fn accepts(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (FilterOp::Eq, Some(o)) => o == Ordering::Equal,
            (FilterOp::AtLeast, Some(o)) => o != Ordering::Less,
            (FilterOp::AtMost, Some(o)) => o != Ordering::Greater,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Date,
    Number,
    Flag,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperandKind::Date => "date",
            OperandKind::Number => "number",
            OperandKind::Flag => "flag",
        };
        f.write_str(s)
    }
}

/// Comparison value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Date(NaiveDate),
    Number(f64),
    Flag(bool),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Date(_) => OperandKind::Date,
            Operand::Number(_) => OperandKind::Number,
            Operand::Flag(_) => OperandKind::Flag,
        }
    }

    /// Orders `self` against `other`.
    ///
    /// Different kinds, and NaN numbers, are incomparable.
    pub fn compare(&self, other: &Operand) -> Option<Ordering> {
        match (self, other) {
            (Operand::Date(a), Operand::Date(b)) => Some(a.cmp(b)),
            (Operand::Number(a), Operand::Number(b)) => a.partial_cmp(b),
            (Operand::Flag(a), Operand::Flag(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// A single filter criterion over one approach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predicate {
    field: Field,
    op: FilterOp,
    operand: Operand,
}

impl Predicate {
    /// Builds a predicate, checking that `operand` fits `field`.
    ///
    /// `Hazardous` only supports `Eq`. Numbers must be finite, since NaN
    /// compares false against every value.
    pub fn new(field: Field, op: FilterOp, operand: Operand) -> QueryResult<Self> {
        if operand.kind() != field.operand_kind() {
            return Err(QueryError::OperandMismatch {
                field,
                expected: field.operand_kind(),
                found: operand.kind(),
            });
        }
        if field == Field::Hazardous && op != FilterOp::Eq {
            return Err(QueryError::UnsupportedOperator { field, op });
        }
        if let Operand::Number(n) = operand {
            if !n.is_finite() {
                return Err(QueryError::NonFiniteOperand {
                    field,
                    value: n.to_string(),
                });
            }
        }
        Ok(Self { field, op, operand })
    }

    fn unchecked(field: Field, op: FilterOp, operand: Operand) -> Self {
        Self { field, op, operand }
    }

    /// Approach date equals `date`
    pub fn date_on(date: NaiveDate) -> Self {
        Self::unchecked(Field::Date, FilterOp::Eq, Operand::Date(date))
    }

    /// Approach date on or after `date`
    pub fn date_from(date: NaiveDate) -> Self {
        Self::unchecked(Field::Date, FilterOp::AtLeast, Operand::Date(date))
    }

    /// Approach date on or before `date`
    pub fn date_until(date: NaiveDate) -> Self {
        Self::unchecked(Field::Date, FilterOp::AtMost, Operand::Date(date))
    }

    /// Distance at least `au`.
    ///
    /// The numeric shorthands do not validate; values from user input go
    /// through [`Predicate::new`].
    pub fn distance_min(au: f64) -> Self {
        Self::unchecked(Field::Distance, FilterOp::AtLeast, Operand::Number(au))
    }

    pub fn distance_max(au: f64) -> Self {
        Self::unchecked(Field::Distance, FilterOp::AtMost, Operand::Number(au))
    }

    pub fn velocity_min(km_s: f64) -> Self {
        Self::unchecked(Field::Velocity, FilterOp::AtLeast, Operand::Number(km_s))
    }

    pub fn velocity_max(km_s: f64) -> Self {
        Self::unchecked(Field::Velocity, FilterOp::AtMost, Operand::Number(km_s))
    }

    pub fn diameter_min(km: f64) -> Self {
        Self::unchecked(Field::Diameter, FilterOp::AtLeast, Operand::Number(km))
    }

    pub fn diameter_max(km: f64) -> Self {
        Self::unchecked(Field::Diameter, FilterOp::AtMost, Operand::Number(km))
    }

    /// Owning object's hazard flag equals `flag`
    pub fn hazardous(flag: bool) -> Self {
        Self::unchecked(Field::Hazardous, FilterOp::Eq, Operand::Flag(flag))
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn op(&self) -> FilterOp {
        self.op
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.operand)
    }
}
