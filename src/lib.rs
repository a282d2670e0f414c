//! Loan Amortization - fixed-installment loan engine
//!
//! This library provides:
//! - Installment (EMI) calculation, including the zero-rate case
//! - Month-by-month amortization schedules that close at exactly zero
//! - Affordability classification of an installment against monthly salary
//! - CSV export of schedules and a console report

pub mod error;
pub mod loan;
pub mod schedule;
pub mod affordability;
pub mod evaluation;
pub mod export;
pub mod report;

// Re-export commonly used types
pub use error::{LoanError, Result};
pub use loan::{LoanParameters, Tenure};
pub use schedule::{compute_installment, generate_schedule, PaymentRecord, Schedule, ScheduleGenerator, ScheduleSummary};
pub use affordability::{classify, classify_with, AffordabilityBand, AffordabilityThresholds, AffordabilityVerdict};
pub use evaluation::{evaluate_loan, LoanEvaluation, LoanEvaluator};
pub use export::{export_schedule, read_schedule, write_schedule};
pub use report::render_report;
