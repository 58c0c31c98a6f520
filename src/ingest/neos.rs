//! NEO catalog loader (`neos.csv`)
//!
//! Reads the columns `pdes`, `name`, `diameter` and `pha` by header name;
//! any other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::NearEarthObject;

use super::errors::{IngestError, IngestResult};

const SOURCE_NAME: &str = "neos.csv";
const REQUIRED_COLUMNS: [&str; 4] = ["pdes", "name", "diameter", "pha"];

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: String,
    diameter: String,
    pha: String,
}

/// Loads objects from a CSV file
pub fn load_neos(path: impl AsRef<Path>) -> IngestResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IngestError::io(path.display().to_string(), e))?;
    load_neos_from_reader(file)
}

/// Loads objects from CSV content
pub fn load_neos_from_reader<R: Read>(reader: R) -> IngestResult<Vec<NearEarthObject>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn {
                source_name: SOURCE_NAME,
                column,
            });
        }
    }

    let mut neos = Vec::new();
    for (index, result) in reader.deserialize::<NeoRow>().enumerate() {
        let row = result?;
        neos.push(parse_row(index + 1, row)?);
    }

    Ok(neos)
}

fn parse_row(row_number: usize, row: NeoRow) -> IngestResult<NearEarthObject> {
    if row.pdes.is_empty() {
        return Err(IngestError::malformed(row_number, "pdes", row.pdes));
    }

    let diameter = parse_diameter(row_number, &row.diameter)?;
    let hazardous = row.pha == "Y";

    Ok(NearEarthObject::new(
        row.pdes,
        Some(row.name),
        diameter,
        hazardous,
    ))
}

/// Empty means unknown
fn parse_diameter(row_number: usize, raw: &str) -> IngestResult<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| IngestError::malformed(row_number, "diameter", raw))
}
