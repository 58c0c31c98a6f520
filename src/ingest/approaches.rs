//! Close-approach loader (`cad.json`)
//!
//! The file is the JPL close-approach API payload: a `fields` array naming
//! the columns and a `data` array of rows. Columns are located by name
//! (`des`, `cd`, `dist`, `v_rel`), so their order does not matter.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::time::parse_approach_time;
use crate::model::CloseApproach;

use super::errors::{IngestError, IngestResult};

const SOURCE_NAME: &str = "cad.json";

#[derive(Debug, Deserialize)]
struct CadPayload {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Positions of the columns we read
struct Columns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl Columns {
    fn locate(fields: &[String]) -> IngestResult<Self> {
        let find = |column: &'static str| {
            fields
                .iter()
                .position(|f| f == column)
                .ok_or(IngestError::MissingColumn {
                    source_name: SOURCE_NAME,
                    column,
                })
        };

        Ok(Self {
            designation: find("des")?,
            time: find("cd")?,
            distance: find("dist")?,
            velocity: find("v_rel")?,
        })
    }
}

/// Loads approaches from a JSON file
pub fn load_approaches(path: impl AsRef<Path>) -> IngestResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IngestError::io(path.display().to_string(), e))?;
    load_approaches_from_reader(BufReader::new(file))
}

/// Loads approaches from JSON content
pub fn load_approaches_from_reader<R: Read>(reader: R) -> IngestResult<Vec<CloseApproach>> {
    let payload: CadPayload = serde_json::from_reader(reader)?;
    let columns = Columns::locate(&payload.fields)?;

    payload
        .data
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index + 1, row, &columns))
        .collect()
}

fn parse_row(row_number: usize, row: &[Value], columns: &Columns) -> IngestResult<CloseApproach> {
    let designation = cell(row_number, row, columns.designation, "des")?;

    let raw_time = cell(row_number, row, columns.time, "cd")?;
    let time = parse_approach_time(&raw_time)
        .map_err(|_| IngestError::malformed(row_number, "cd", raw_time.as_str()))?;

    let distance = number(row_number, row, columns.distance, "dist")?;
    let velocity = number(row_number, row, columns.velocity, "v_rel")?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

/// Cell text. Numbers are accepted as their JSON text; null and absent cells are not.
fn cell(row_number: usize, row: &[Value], index: usize, field: &'static str) -> IngestResult<String> {
    match row.get(index) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(IngestError::malformed(row_number, field, other.to_string())),
        None => Err(IngestError::malformed(row_number, field, "")),
    }
}

fn number(row_number: usize, row: &[Value], index: usize, field: &'static str) -> IngestResult<f64> {
    let raw = cell(row_number, row, index, field)?;
    raw.parse::<f64>()
        .map_err(|_| IngestError::malformed(row_number, field, raw))
}
