//! Result writers
//!
//! Serializes approach records as CSV or JSON. Both writers consume any
//! iterator of records, so a lazy query stream can be written without
//! collecting it first.
//!
//! CSV columns: `datetime_utc, distance_au, velocity_km_s, designation,
//! name, diameter_km, potentially_hazardous`. A missing name is written
//! empty and an unknown diameter as `nan`.
//!
//! JSON: an array of approach objects, each with a nested `neo` object.
//! A missing name or unknown diameter is written as `null`.

mod errors;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::database::ApproachRecord;
use crate::model::{ApproachSummary, NeoSummary};

pub use errors::{OutputError, OutputResult};

/// Supported result file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Picks the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: String,
    potentially_hazardous: bool,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &ApproachRecord<'a>) -> Self {
        let approach = record.approach();
        let neo = record.neo();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            designation: approach.designation(),
            name: neo.and_then(|n| n.name()).unwrap_or(""),
            diameter_km: neo
                .and_then(|n| n.diameter())
                .map_or_else(|| "nan".to_string(), |d| d.to_string()),
            potentially_hazardous: neo.is_some_and(|n| n.hazardous()),
        }
    }
}

#[derive(Serialize)]
struct JsonRecord {
    #[serde(flatten)]
    approach: ApproachSummary,
    neo: Option<NeoSummary>,
}

impl JsonRecord {
    fn from_record(record: &ApproachRecord<'_>) -> Self {
        Self {
            approach: record.approach().serialize(),
            neo: record.neo().map(|n| n.serialize()),
        }
    }
}

/// Writes records as CSV with a header row. Returns the number of rows.
pub fn write_to_csv<'a, W, I>(records: I, writer: W) -> OutputResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachRecord<'a>>,
{
    let mut writer = csv::Writer::from_writer(writer);
    let mut count = 0;

    for record in records {
        writer.serialize(CsvRow::from_record(&record))?;
        count += 1;
    }

    // No records means serialize never emitted the header
    if count == 0 {
        writer.write_record([
            "datetime_utc",
            "distance_au",
            "velocity_km_s",
            "designation",
            "name",
            "diameter_km",
            "potentially_hazardous",
        ])?;
    }

    writer.flush()?;
    Ok(count)
}

/// Writes records as a pretty-printed JSON array. Returns the number of records.
///
/// Each element is written as soon as its record is pulled.
pub fn write_to_json<'a, W, I>(records: I, mut writer: W) -> OutputResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachRecord<'a>>,
{
    let mut count = 0;
    {
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::new());
        let rows = records.into_iter().map(|r| {
            count += 1;
            JsonRecord::from_record(&r)
        });
        serde::Serializer::collect_seq(&mut serializer, rows)?;
    }

    writeln!(writer)?;
    writer.flush()?;
    Ok(count)
}

/// Writes records to `path`, choosing the format from its extension.
///
/// The extension is checked before the file is created. After that the file
/// is written as records arrive, so a failure part way through leaves a
/// truncated file behind.
pub fn write_results<'a, I>(path: &Path, records: I) -> OutputResult<usize>
where
    I: IntoIterator<Item = ApproachRecord<'a>>,
{
    let format = OutputFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);

    match format {
        OutputFormat::Csv => write_to_csv(records, writer),
        OutputFormat::Json => write_to_json(records, writer),
    }
}
