//! Producer-side adapter: derives a `ChartPayload` from an exported matrix CSV.
//!
//! The first column becomes the category labels and the last column the series
//! values. Blank rows are skipped.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::ChartPayload;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MATRIX_DATASET_LABEL: &str = "Matrix Value (Last Column)";
pub const FILE_NOT_FOUND_DATASET_LABEL: &str = "File Not Found";
pub const DATA_ERROR_DATASET_LABEL: &str = "Data Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSourceOptions {
    pub has_headers: bool,
    pub delimiter: u8,
    pub dataset_label: String,
}

impl Default for MatrixSourceOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
            dataset_label: DEFAULT_MATRIX_DATASET_LABEL.to_owned(),
        }
    }
}

impl MatrixSourceOptions {
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_dataset_label(mut self, dataset_label: impl Into<String>) -> Self {
        self.dataset_label = dataset_label.into();
        self
    }
}

/// Reads a matrix CSV and keeps its first and last columns.
pub fn payload_from_csv_reader<R: Read>(
    reader: R,
    options: &MatrixSourceOptions,
) -> ChartResult<ChartPayload> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (row_index, record) in rdr.records().enumerate() {
        let record = record
            .map_err(|e| ChartError::InvalidData(format!("failed to read matrix row: {e}")))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let first = record.get(0).unwrap_or_default().trim();
        let last = record.get(record.len() - 1).unwrap_or_default().trim();
        let value = last.parse::<f64>().map_err(|_| {
            ChartError::InvalidData(format!(
                "matrix row {row_index}: last column `{last}` is not numeric"
            ))
        })?;

        labels.push(first.to_owned());
        values.push(value);
    }

    debug!(rows = values.len(), "loaded matrix payload");
    Ok(ChartPayload::new(
        labels,
        options.dataset_label.clone(),
        values,
    ))
}

pub fn payload_from_csv_path(
    path: impl AsRef<Path>,
    options: &MatrixSourceOptions,
) -> ChartResult<ChartPayload> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ChartError::InvalidData(format!("failed to open `{}`: {e}", path.display()))
    })?;
    payload_from_csv_reader(file, options)
}

/// Loads the matrix or substitutes a one-point placeholder payload.
///
/// A missing file yields the `File Not Found` placeholder, every other failure
/// the `Data Error` one. The dashboard then shows the placeholder instead of an
/// empty canvas.
#[must_use]
pub fn payload_from_csv_path_or_fallback(
    path: impl AsRef<Path>,
    options: &MatrixSourceOptions,
) -> ChartPayload {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "matrix csv not found");
            return fallback_payload(FILE_NOT_FOUND_DATASET_LABEL);
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "matrix csv could not be opened");
            return fallback_payload(DATA_ERROR_DATASET_LABEL);
        }
    };

    match payload_from_csv_reader(file, options) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "matrix csv could not be processed");
            fallback_payload(DATA_ERROR_DATASET_LABEL)
        }
    }
}

#[must_use]
pub fn fallback_payload(dataset_label: &str) -> ChartPayload {
    ChartPayload::new(["Error"], dataset_label, [0.0])
}
