//! Query construction errors

use thiserror::Error;

use super::predicate::{Field, FilterOp, OperandKind};

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised when building a predicate
///
/// Evaluation itself cannot fail; a predicate that was built is always
/// well-typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("field '{field}' compares against a {expected}, got a {found}")]
    OperandMismatch {
        field: Field,
        expected: OperandKind,
        found: OperandKind,
    },

    #[error("operator '{op}' is not supported on field '{field}'")]
    UnsupportedOperator { field: Field, op: FilterOp },

    #[error("field '{field}' needs a finite number, got {value}")]
    NonFiniteOperand { field: Field, value: String },
}
