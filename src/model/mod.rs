//! Data model for near-Earth objects and their close approaches
//!
//! Records are plain owned values. Cross references between the two record
//! types are integer handles into the arenas owned by
//! [`NeoDatabase`](crate::database::NeoDatabase); nothing here holds a
//! reference to anything else.
//!
//! # Lifecycle
//!
//! 1. Ingestion builds unlinked records (`approaches` empty, `neo` unset)
//! 2. `NeoDatabase::new` takes ownership and links them once
//! 3. Records are read-only from then on

mod approach;
mod neo;
pub mod time;

pub use approach::{ApproachId, ApproachSummary, CloseApproach};
pub use neo::{NearEarthObject, NeoId, NeoSummary};
