//! Query engine for neodb
//!
//! Filters close approaches by a conjunction of predicates.
//!
//! # Execution Flow
//!
//! 1. Build predicates (directly, or from `QueryCriteria`)
//! 2. `NeoDatabase::query` streams matching approaches in storage order
//! 3. Optionally sort and limit via `QueryExecutor`
//!
//! The engine knows nothing about which fields exist beyond evaluating
//! `Field::extract`; it only ANDs a list of predicates over one record.

mod criteria;
mod errors;
mod executor;
mod filters;
mod matches;
mod predicate;
mod sorter;

pub use criteria::QueryCriteria;
pub use errors::{QueryError, QueryResult};
pub use executor::{limit, ExecutionResult, QueryExecutor, QueryPlan};
pub use filters::PredicateFilter;
pub use matches::Matches;
pub use predicate::{Field, FilterOp, Operand, OperandKind, Predicate};
pub use sorter::{ResultSorter, SortDirection, SortKey, SortSpec};
