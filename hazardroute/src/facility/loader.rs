//! CSV loader for facility records.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::FacilityRecord;

/// Error type for facility loading.
#[derive(Debug, thiserror::Error)]
pub enum FacilityError {
    #[error("Facility file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid facility record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
    #[error("Failed to read facility CSV: {0}")]
    Csv(String),
}

/// Loader for facility CSV files.
pub struct FacilityLoader;

impl FacilityLoader {
    /// Load all facility records from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FacilityRecord>, FacilityError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FacilityError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let records = Self::from_reader(file)?;

        tracing::info!(path = %path.display(), count = records.len(), "Loaded facilities");

        Ok(records)
    }

    /// Load all facility records from a reader.
    ///
    /// Fields are trimmed. A row that cannot be deserialized fails the whole
    /// load with its line number; nothing is skipped silently.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FacilityRecord>, FacilityError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize::<FacilityRecord>() {
            let record = result.map_err(|e| match e.position() {
                Some(position) => FacilityError::InvalidRecord {
                    line: position.line(),
                    message: e.to_string(),
                },
                None => FacilityError::Csv(e.to_string()),
            })?;
            records.push(record);
        }

        Ok(records)
    }
}
