//! Source data ingestion
//!
//! Turns the NASA/JPL data files into unlinked model records:
//!
//! - `neos.csv` (SBDB query export) → `Vec<NearEarthObject>`
//! - `cad.json` (close-approach API payload) → `Vec<CloseApproach>`
//!
//! Field-level validation (numeric parsing, time formats) happens here. The
//! database assumes well-typed records.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, load_approaches_from_reader};
pub use errors::{IngestError, IngestResult};
pub use neos::{load_neos, load_neos_from_reader};
