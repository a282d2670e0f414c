//! CSV export of amortization schedules

use crate::error::{LoanError, Result};
use crate::schedule::Schedule;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Column names, in output order
pub const SCHEDULE_HEADER: [&str; 5] = ["month", "payment", "interest", "principal", "balance"];

/// Render a money amount with two decimals, no thousands separators
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    // -0.001 and -0.0 both print as "-0.00"
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Write the schedule as CSV: a header line, then one line per month
pub fn write_schedule<W: Write>(schedule: &Schedule, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(SCHEDULE_HEADER)?;

    for record in schedule {
        wtr.write_record([
            record.month.to_string(),
            format_amount(record.payment),
            format_amount(record.interest),
            format_amount(record.principal),
            format_amount(record.balance),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Export the schedule to a CSV file.
///
/// On any failure the partially written file is removed and an
/// [`LoanError::Io`] is returned.
pub fn export_schedule<P: AsRef<Path>>(schedule: &Schedule, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| LoanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let result = write_schedule(schedule, &file)
        .map_err(|err| match err {
            LoanError::Csv(e) => io::Error::from(e),
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        })
        .and_then(|()| file.sync_all());
    drop(file);

    match result {
        Ok(()) => {
            info!("wrote {} rows to {}", schedule.len(), path.display());
            Ok(())
        }
        Err(source) => {
            if let Err(e) = fs::remove_file(path) {
                warn!("could not remove partial export {}: {}", path.display(), e);
            }
            Err(LoanError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
