//! Read exported schedules back from CSV

use super::writer::SCHEDULE_HEADER;
use crate::error::{LoanError, Result};
use csv::Reader;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One data row of an exported schedule, at export precision
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ExportedRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Parse an exported schedule from any reader
pub fn read_schedule<R: Read>(reader: R) -> Result<Vec<ExportedRow>> {
    let mut csv_reader = Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().eq(SCHEDULE_HEADER.iter().copied()) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(LoanError::validation(
            "header",
            format!("expected {}, got {}", SCHEDULE_HEADER.join(","), found.join(",")),
        ));
    }

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: ExportedRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse an exported schedule file
pub fn read_schedule_file<P: AsRef<Path>>(path: P) -> Result<Vec<ExportedRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_schedule(file)
}
