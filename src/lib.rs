//! neodb - an in-memory database of near-Earth objects and their close approaches
//!
//! Loads the NASA/JPL NEO catalog and close-approach data, links every
//! approach to its object, and answers designation/name lookups and
//! filtered approach queries.
//!
//! ```ignore
//! use neodb::database::NeoDatabase;
//! use neodb::ingest::{load_approaches, load_neos};
//! use neodb::query::Predicate;
//!
//! let db = NeoDatabase::new(load_neos("data/neos.csv")?, load_approaches("data/cad.json")?)?;
//! let eros = db.get_neo_by_name("Eros");
//! let preds = [Predicate::hazardous(true), Predicate::distance_max(0.05)];
//! for record in db.query(&preds).take(10) {
//!     println!("{}", record);
//! }
//! ```

pub mod cli;
pub mod database;
pub mod ingest;
pub mod model;
pub mod observability;
pub mod output;
pub mod query;
