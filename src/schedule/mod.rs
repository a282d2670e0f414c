//! Installment calculation and amortization schedule generation

mod state;
mod engine;
mod payments;
mod installment;

pub use state::AmortizationState;
pub use engine::{ScheduleGenerator, generate_schedule};
pub use payments::{PaymentRecord, Schedule, ScheduleSummary};
pub use installment::compute_installment;
