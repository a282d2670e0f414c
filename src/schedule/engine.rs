//! Month-by-month amortization schedule generation

use crate::error::Result;
use crate::loan::{validate_months, LoanParameters};
use super::installment::compute_installment;
use super::payments::{PaymentRecord, Schedule};
use super::state::AmortizationState;
use log::{debug, trace, warn};

/// Final-month residuals larger than this are reported as drift
const RESIDUAL_WARN_THRESHOLD: f64 = 0.005;

/// Generates amortization schedules for a set of loan parameters
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    params: LoanParameters,
}

impl ScheduleGenerator {
    pub fn new(params: LoanParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    /// Build the full schedule, one record per month
    pub fn generate(&self) -> Result<Schedule> {
        let LoanParameters {
            principal,
            annual_rate_percent,
            months,
        } = self.params;

        let months = validate_months(months)?;
        let installment = compute_installment(principal, annual_rate_percent, months)?;

        let mut schedule = Schedule::new(principal, annual_rate_percent, installment, months);
        let mut state = AmortizationState::new(principal, self.params.monthly_rate(), months);

        for _month in 1..=months {
            state.advance_month();
            let record = self.calculate_month(&mut state, installment);
            schedule.add_payment(record);
        }

        debug!(
            "generated {} month schedule: installment {:.2}, total interest {:.2}",
            schedule.len(),
            installment,
            schedule.total_interest()
        );
        Ok(schedule)
    }

    /// Split one month's payment into interest and principal
    fn calculate_month(&self, state: &mut AmortizationState, installment: f64) -> PaymentRecord {
        let interest = state.interest_due();
        let mut principal_paid = installment - interest;
        let mut payment = installment;

        if state.is_final_month() {
            // Whatever is left is repaid in full so the schedule closes at exactly zero
            let residual = state.balance - principal_paid;
            if residual.abs() > RESIDUAL_WARN_THRESHOLD {
                warn!(
                    "month {}: final payment adjusted by {:.6}",
                    state.month, residual
                );
            } else if residual != 0.0 {
                trace!("month {}: final residual {:e}", state.month, residual);
            }
            principal_paid = state.balance;
            payment = interest + principal_paid;
            state.apply_principal(principal_paid);
            state.balance = 0.0;
        } else {
            if principal_paid > state.balance {
                warn!(
                    "month {}: principal {:.6} exceeds balance {:.6}, clamping",
                    state.month, principal_paid, state.balance
                );
                principal_paid = state.balance;
                payment = interest + principal_paid;
            }
            state.apply_principal(principal_paid);
        }

        trace!(
            "month {}: payment {}, interest {}, principal {}, balance {}",
            state.month,
            payment,
            interest,
            principal_paid,
            state.balance
        );

        PaymentRecord::new(state.month, payment, interest, principal_paid, state.balance)
    }
}

/// Generate an amortization schedule from raw inputs
pub fn generate_schedule(principal: f64, annual_rate_percent: f64, months: u32) -> Result<Schedule> {
    let params = LoanParameters {
        principal,
        annual_rate_percent,
        months,
    };
    ScheduleGenerator::new(params).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Tenure;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const CASES: [(f64, f64, u32); 7] = [
        (20_000_000.0, 10.0, 120),
        (250_000.0, 6.5, 360),
        (1_000.0, 0.0, 7),
        (999.99, 3.3, 13),
        (5_000.0, 18.0, 1),
        (123_456.78, 0.01, 240),
        (10.0, 99.0, 600),
    ];

    #[test]
    fn test_schedule_length_and_month_indices() {
        for &(p, rate, n) in &CASES {
            let schedule = generate_schedule(p, rate, n).unwrap();
            assert_eq!(schedule.len(), n as usize);
            for (i, record) in schedule.iter().enumerate() {
                assert_eq!(record.month, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_final_balance_is_exactly_zero() {
        for &(p, rate, n) in &CASES {
            let schedule = generate_schedule(p, rate, n).unwrap();
            let last = schedule.payments.last().unwrap();
            assert_eq!(last.balance, 0.0, "case ({}, {}, {})", p, rate, n);
        }
    }

    #[test]
    fn test_payment_splits_into_interest_and_principal() {
        for &(p, rate, n) in &CASES {
            let schedule = generate_schedule(p, rate, n).unwrap();
            let (last, rest) = schedule.payments.split_last().unwrap();
            for record in rest {
                assert_relative_eq!(
                    record.payment,
                    record.interest + record.principal,
                    max_relative = 1e-12
                );
            }
            assert_eq!(last.payment, last.interest + last.principal);
        }
    }

    #[test]
    fn test_totals_reconcile_with_principal() {
        for &(p, rate, n) in &CASES {
            let schedule = generate_schedule(p, rate, n).unwrap();
            let summary = schedule.summary();
            assert_relative_eq!(
                summary.total_paid,
                p + summary.total_interest,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_rate_schedule_is_straight_line() {
        let schedule = generate_schedule(1200.0, 0.0, 12).unwrap();
        for record in &schedule {
            assert_eq!(record.interest, 0.0);
            assert_abs_diff_eq!(record.payment, 100.0, epsilon = 1e-9);
        }
        assert_eq!(schedule.total_interest(), 0.0);
    }

    #[test]
    fn test_balance_decreases_monotonically() {
        let schedule = generate_schedule(250_000.0, 6.5, 360).unwrap();
        let mut previous = 250_000.0;
        for record in &schedule {
            assert!(record.balance < previous);
            previous = record.balance;
        }
    }

    #[test]
    fn test_interest_share_shrinks_over_time() {
        let schedule = generate_schedule(20_000_000.0, 10.0, 120).unwrap();
        let first = schedule.get(1).unwrap();
        let last = schedule.get(120).unwrap();

        // Month 1 interest is principal * r
        assert_relative_eq!(first.interest, 20_000_000.0 * 10.0 / 1200.0, max_relative = 1e-12);
        assert!(first.interest > last.interest);
        assert!(first.principal < last.principal);
        assert!((schedule.installment - 264_301.47).abs() < 0.01);
    }

    #[test]
    fn test_generator_from_parameters() {
        let params = LoanParameters::new(50_000.0, 7.5, Tenure::Years(4.0)).unwrap();
        let schedule = ScheduleGenerator::new(params).generate().unwrap();
        assert_eq!(schedule.len(), 48);
        assert_eq!(schedule.principal, 50_000.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(generate_schedule(-100.0, 10.0, 12).unwrap_err().is_validation());
        assert!(generate_schedule(100.0, -1.0, 12).unwrap_err().is_validation());
        assert!(generate_schedule(100.0, 10.0, 0).unwrap_err().is_validation());
    }
}
