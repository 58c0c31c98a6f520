//! Database construction errors
//!
//! Both variants are data-consistency failures in the loaded records.
//! Construction fails fast rather than dropping records.

use thiserror::Error;

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Errors raised while linking objects and approaches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("approach #{index} references unknown designation '{designation}'")]
    UnresolvedDesignation { designation: String, index: usize },

    #[error("designation '{0}' appears on more than one object")]
    DuplicateDesignation(String),
}

impl DatabaseError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DatabaseError::UnresolvedDesignation { .. } => "NEO_UNRESOLVED_DESIGNATION",
            DatabaseError::DuplicateDesignation(_) => "NEO_DUPLICATE_DESIGNATION",
        }
    }

    /// Designation that caused the failure
    pub fn designation(&self) -> &str {
        match self {
            DatabaseError::UnresolvedDesignation { designation, .. } => designation,
            DatabaseError::DuplicateDesignation(designation) => designation,
        }
    }
}
