//! The day log: one CSV row per day.
//!
//! Columns are `Date,Rain_mm,BOM_mm,Notes,Watered,Moisture`. Row order on
//! disk is not authoritative; the ordered store re-sorts on load. A log
//! written before the moisture column existed reads fine: the missing
//! column defaults to blank and the next recompute fills it in.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use demeter_engine::parse_mm;
use demeter_store::{DayRecord, LogDate, RecordStore};

use crate::error::IoError;

/// One row of the on-disk log, every field as raw text.
#[derive(Debug, Default, Deserialize, Serialize)]
struct LogRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Rain_mm", default)]
    rain_mm: String,
    #[serde(rename = "BOM_mm", default)]
    bom_mm: String,
    #[serde(rename = "Notes", default)]
    notes: String,
    #[serde(rename = "Watered", default)]
    watered: String,
    #[serde(rename = "Moisture", default)]
    moisture: String,
}

fn record_from_row(row: LogRow) -> DayRecord {
    DayRecord {
        date: LogDate::parse(&row.date),
        rain_user: parse_mm(&row.rain_mm),
        rain_official: parse_mm(&row.bom_mm),
        watered: row.watered.trim().eq_ignore_ascii_case("yes"),
        notes: row.notes,
        moisture: row.moisture.trim().parse().unwrap_or(0.0),
    }
}

fn row_from_record(record: &DayRecord) -> LogRow {
    LogRow {
        date: record.date.to_string(),
        rain_mm: record.rain_user.map(|mm| mm.to_string()).unwrap_or_default(),
        bom_mm: record
            .rain_official
            .map(|mm| mm.to_string())
            .unwrap_or_default(),
        notes: record.notes.clone(),
        watered: if record.watered { "Yes" } else { "No" }.to_string(),
        moisture: format!("{:.2}", record.moisture),
    }
}

/// Reads the day log into a store.
///
/// A missing file is an empty log, not an error (first run). Rows with
/// unparseable dates are kept under their raw text and sort first;
/// duplicate dates collapse with the last row winning.
///
/// # Errors
///
/// Returns [`IoError::Read`] when the file exists but cannot be opened and
/// [`IoError::Csv`] when a row cannot be decoded at all.
pub fn read_log(path: &Path) -> Result<RecordStore, IoError> {
    if !path.exists() {
        debug!(path = %path.display(), "no day log yet, starting empty");
        return Ok(RecordStore::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| IoError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut store = RecordStore::new();
    for result in reader.deserialize::<LogRow>() {
        let row = result.map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let record = record_from_row(row);
        if let Some(replaced) = store.upsert(record) {
            warn!(date = %replaced.date, "duplicate date in log, keeping the later row");
        }
    }
    debug!(path = %path.display(), rows = store.len(), "day log loaded");
    Ok(store)
}

/// Writes the whole store as a day log, rows in date order.
///
/// Rainfall fields are plain decimals or blank; `Watered` is `Yes`/`No`;
/// `Moisture` always carries two fractional digits.
///
/// # Errors
///
/// Returns [`IoError::Write`] when the file cannot be created or flushed
/// and [`IoError::Csv`] when a row fails to encode.
pub fn write_log(path: &Path, store: &RecordStore) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    for record in store.iter() {
        writer
            .serialize(row_from_record(record))
            .map_err(|e| IoError::Csv {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
    }

    writer.flush().map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), rows = store.len(), "day log written");
    Ok(())
}
