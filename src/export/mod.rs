//! Tabular (CSV) export of amortization schedules

mod writer;
pub mod reader;

pub use writer::{export_schedule, format_amount, write_schedule, SCHEDULE_HEADER};
pub use reader::{read_schedule, read_schedule_file, ExportedRow};
