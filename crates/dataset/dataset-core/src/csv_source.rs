//! CSV implementation of the table source.

use std::fs::File;
use std::io::BufReader;

use dataset_api::DatasetConfig;
use dataset_spi::{BirthRecord, BirthTable, DatasetError, Result, TableSource};

/// Required column headers, matched exactly against the file header row.
const REQUIRED_COLUMNS: [&str; 8] = [
    "year", "month", "region", "birth_count", "<20", "20-29", "30-39", "40+",
];

/// Loads the birth table from a CSV file.
///
/// Headers must match [`REQUIRED_COLUMNS`] exactly; no normalization is
/// applied. Integer columns accept float-formatted values (truncated), the
/// month column is taken as a raw string.
pub struct CsvTableSource {
    config: DatasetConfig,
}

impl CsvTableSource {
    /// Create a source for the configured file.
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Create a source for the default data path.
    pub fn with_defaults() -> Self {
        Self::new(DatasetConfig::default())
    }
}

impl TableSource for CsvTableSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<BirthTable> {
        let path = self.config.path();
        let file = File::open(path)
            .map_err(|e| DatasetError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::CsvError(e.to_string()))?
            .clone();

        let mut indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| DatasetError::CsvError(e.to_string()))?;
            let field = |i: usize| row.get(indices[i]).unwrap_or("");

            records.push(BirthRecord {
                year: coerce_int(field(0)).ok_or_else(|| invalid("year", field(0)))? as i32,
                month: field(1).to_string(),
                region: field(2).to_string(),
                birth_count: coerce_count("birth_count", field(3))?,
                under_20: coerce_count("<20", field(4))?,
                age_20_29: coerce_count("20-29", field(5))?,
                age_30_39: coerce_count("30-39", field(6))?,
                age_40_plus: coerce_count("40+", field(7))?,
            });
        }

        if records.is_empty() {
            return Err(DatasetError::NoData);
        }

        tracing::info!(path = %path.display(), rows = records.len(), "loaded birth table");
        Ok(BirthTable::new(records))
    }
}

/// Parse an integer, accepting float-formatted values by truncating.
fn coerce_int(value: &str) -> Option<i64> {
    let value = value.trim();
    value
        .parse::<i64>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
}

fn coerce_count(column: &str, value: &str) -> Result<u64> {
    coerce_int(value)
        .filter(|v| *v >= 0)
        .map(|v| v as u64)
        .ok_or_else(|| invalid(column, value))
}

fn invalid(column: &str, value: &str) -> DatasetError {
    DatasetError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    }
}
