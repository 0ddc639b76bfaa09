use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, LabelMaps, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Shape errors the loader can surface beyond plain I/O and parse failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("dataset contains no rows")]
    Empty,
}

/// Load the scenario dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated with a header row naming the fields
/// * `.json` – records-oriented array of row objects with the same names
///
/// Loading happens once per process lifetime; any failure here is fatal at
/// startup, so no partial dataset is ever served.
pub fn load_file(path: &Path, labels: &LabelMaps) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path, labels)
            .with_context(|| format!("loading CSV dataset {}", path.display()))?,
        "json" => load_json(path, labels)
            .with_context(|| format!("loading JSON dataset {}", path.display()))?,
        other => bail!(DatasetError::UnsupportedExtension(other.to_string())),
    };

    if records.is_empty() {
        bail!(DatasetError::Empty);
    }

    log::info!(
        "loaded {} scenario records from {}",
        records.len(),
        path.display()
    );
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw row – the on-disk column names
// ---------------------------------------------------------------------------

/// One row as named in the source table header.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Technology")]
    technology: u8,
    #[serde(rename = "cEE")]
    c_ee: f64,
    #[serde(rename = "cH2")]
    c_h2: f64,
    #[serde(rename = "cNG")]
    c_ng: f64,
    #[serde(rename = "cCO2")]
    c_co2: f64,
    fuel_demand: f64,
    elec_demand: f64,
    co2_capt: u8,
    #[serde(rename = "EI")]
    ei: f64,
    #[serde(rename = "TRL")]
    trl: String,
    elec_prod: f64,
}

impl RawRow {
    /// Normalize into a [`Record`], deriving the TRL ordinal once at load
    /// time. Unmapped TRL text yields `None`, not an error.
    fn into_record(self, labels: &LabelMaps) -> Record {
        let trl_num = labels.trl_ordinal(&self.trl);
        if trl_num.is_none() {
            log::warn!("row has unmapped TRL text: {:?}", self.trl);
        }
        Record {
            technology: self.technology,
            c_ee: self.c_ee,
            c_h2: self.c_h2,
            c_ng: self.c_ng,
            c_co2: self.c_co2,
            fuel_demand: self.fuel_demand,
            elec_demand: self.elec_demand,
            co2_capt: self.co2_capt,
            ei: self.ei,
            trl: self.trl,
            trl_num,
            elec_prod: self.elec_prod,
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, labels: &LabelMaps) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(labels));
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the shape of `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Technology": 1, "cEE": 50.0, "cH2": 100.0, "cNG": 35.0,
///     "cCO2": 100.0, "fuel_demand": 5.34, "elec_demand": 0.8,
///     "co2_capt": 2, "EI": 0.22, "TRL": "High: 9", "elec_prod": 0.22 },
///   ...
/// ]
/// ```
fn load_json(path: &Path, labels: &LabelMaps) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRow> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(rows
        .into_iter()
        .map(|raw| raw.into_record(labels))
        .collect())
}
