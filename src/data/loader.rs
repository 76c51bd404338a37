use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{FleetDataset, Record};

/// Column names the source file must provide, exactly as spelled here
/// (case-sensitive; column order is irrelevant, extra columns are ignored).
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "ship_type",
    "fuel_type",
    "weather_conditions",
    "month",
    "fuel_consumption",
    "CO2_emissions",
    "engine_efficiency",
];

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Errors raised while loading a dataset file. All of them are fatal to the
/// dashboard: nothing renders until a dataset loads cleanly.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a fleet dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-delimited UTF-8 with a header row (the dashboard's
///   native format)
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path) -> Result<FleetDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Raw row decoding
// ---------------------------------------------------------------------------

/// One row as it appears on disk, before it becomes a [`Record`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    ship_type: String,
    fuel_type: String,
    weather_conditions: String,
    #[serde(deserialize_with = "month_label")]
    month: String,
    fuel_consumption: f64,
    #[serde(rename = "CO2_emissions")]
    co2_emissions: f64,
    engine_efficiency: f64,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            ship_type: raw.ship_type,
            fuel_type: raw.fuel_type,
            weather_conditions: raw.weather_conditions,
            month: raw.month,
            fuel_consumption: raw.fuel_consumption,
            co2_emissions: raw.co2_emissions,
            engine_efficiency: raw.engine_efficiency,
        }
    }
}

/// Month labels may be text ("January") or an ordinal number (3); both are
/// normalized to their textual form.
fn month_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Ordinal(i64),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(s) => s,
        Label::Ordinal(n) => n.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<FleetDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| LoadError::MalformedRow {
        row: 0,
        message: e.to_string(),
    })?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        // A non-numeric cell in a numeric column rejects the whole file
        // rather than silently dropping the row.
        let raw = result.map_err(|e| LoadError::MalformedRow {
            row: row_no + 1,
            message: e.to_string(),
        })?;
        records.push(raw.into());
    }

    log::debug!("parsed {} CSV rows from {}", records.len(), path.display());
    Ok(FleetDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "ship_type": "Tanker Ship",
///     "fuel_type": "HFO",
///     "weather_conditions": "Calm",
///     "month": "January",
///     "fuel_consumption": 2145.6,
///     "CO2_emissions": 6672.8,
///     "engine_efficiency": 77.4
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<FleetDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let raws: Vec<RawRecord> = serde_json::from_str(&text)?;
    let records = raws.into_iter().map(Record::from).collect();
    Ok(FleetDataset::from_records(records))
}
