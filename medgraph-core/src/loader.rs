//! Dataset loading — the I/O boundary in front of the graph builder.
//!
//! Batch contract: every listed path is loaded and must conform to the
//! row shape; any individual failure fails the whole batch with no
//! partial results. Retry policy, if any, belongs to the caller.

use crate::error::DataError;
use crate::types::{ActorRecord, EventRecord};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parsed GeoJSON document. Geometry passes through untyped — the
/// renderer consumes it as-is.
pub type GeoDocument = serde_json::Value;

/// Load one CSV file into typed rows.
pub fn load_csv<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, DataError> {
    let path_str = path.as_ref().display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .map_err(|e| to_data_error(&path_str, e))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| to_data_error(&path_str, e))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load every CSV path in order; one result per path.
pub fn load_csv_batch<T: DeserializeOwned, P: AsRef<Path>>(
    paths: &[P],
) -> Result<Vec<Vec<T>>, DataError> {
    paths.iter().map(load_csv).collect()
}

/// Load a batch of event tables (one per path).
pub fn load_events<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Vec<EventRecord>>, DataError> {
    load_csv_batch(paths)
}

/// Load the actor reference table.
pub fn load_actors<P: AsRef<Path>>(path: P) -> Result<Vec<ActorRecord>, DataError> {
    load_csv(path)
}

/// Load a batch of GeoJSON documents (one per path).
pub fn load_geo_batch<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<GeoDocument>, DataError> {
    paths
        .iter()
        .map(|path| {
            let path_str = path.as_ref().display().to_string();
            let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| DataError::Fetch {
                path: path_str.clone(),
                source: e,
            })?;
            serde_json::from_str(&contents).map_err(|e| DataError::Parse {
                path: path_str,
                message: e.to_string(),
            })
        })
        .collect()
}

fn to_data_error(path: &str, e: csv::Error) -> DataError {
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => DataError::Fetch {
            path: path.to_string(),
            source: io,
        },
        _ => DataError::Parse {
            path: path.to_string(),
            message,
        },
    }
}
