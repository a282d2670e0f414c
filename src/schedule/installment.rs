//! Fixed installment (EMI) calculation

use crate::error::{LoanError, Result};
use crate::loan::{monthly_rate, validate_months, validate_principal, validate_rate};
use log::debug;

/// Calculate the fixed monthly installment that fully amortizes a loan.
///
/// # Arguments
/// * `principal` - Amount borrowed (> 0)
/// * `annual_rate_percent` - Annual interest rate in percent (>= 0)
/// * `months` - Number of monthly payments (>= 1)
///
/// # Returns
/// The unrounded installment. With `r = annual_rate_percent / 12 / 100`:
/// `principal * r * (1+r)^n / ((1+r)^n - 1)`, or `principal / n` when `r == 0`.
pub fn compute_installment(principal: f64, annual_rate_percent: f64, months: u32) -> Result<f64> {
    let principal = validate_principal(principal)?;
    let annual_rate_percent = validate_rate(annual_rate_percent)?;
    let months = validate_months(months)?;

    let r = monthly_rate(annual_rate_percent);

    // The annuity formula divides by zero here
    if r == 0.0 {
        let installment = principal / months as f64;
        debug!("zero-rate installment {} over {} months", installment, months);
        return Ok(installment);
    }

    // (1+r)^n / ((1+r)^n - 1) == 1 / (1 - (1+r)^-n); the latter never overflows
    let n = months as f64;
    let discounted = -(-n * r.ln_1p()).exp_m1();
    let installment = principal * r / discounted;

    if !installment.is_finite() {
        return Err(LoanError::validation(
            "principal",
            format!(
                "installment is not representable for principal {} at {}% over {} months",
                principal, annual_rate_percent, months
            ),
        ));
    }

    debug!(
        "installment {} for principal {} at {}% over {} months",
        installment, principal, annual_rate_percent, months
    );
    Ok(installment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(compute_installment(1200.0, 0.0, 12).unwrap(), 100.0);
        assert_eq!(compute_installment(1000.0, 0.0, 3).unwrap(), 1000.0 / 3.0);
    }

    #[test]
    fn test_known_installment() {
        let emi = compute_installment(20_000_000.0, 10.0, 120).unwrap();
        assert!((emi - 264_301.47).abs() < 0.01, "got {}", emi);
    }

    #[test]
    fn test_matches_textbook_formula() {
        let (p, rate, n) = (250_000.0_f64, 6.5_f64, 360_u32);
        let r = rate / 12.0 / 100.0;
        let factor = (1.0 + r).powi(n as i32);
        let expected = p * r * factor / (factor - 1.0);

        let emi = compute_installment(p, rate, n).unwrap();
        assert_relative_eq!(emi, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_single_month_repays_principal_plus_interest() {
        let emi = compute_installment(1000.0, 12.0, 1).unwrap();
        assert_relative_eq!(emi, 1010.0, max_relative = 1e-12);
    }

    #[test]
    fn test_very_long_tenure_stays_finite() {
        // (1+r)^n overflows f64 here; the installment converges to principal * r
        let emi = compute_installment(100_000.0, 24.0, 1_000_000).unwrap();
        assert!(emi.is_finite());
        assert_relative_eq!(emi, 100_000.0 * 0.02, max_relative = 1e-12);
    }

    #[test]
    fn test_tiny_rate_close_to_straight_line() {
        let emi = compute_installment(1200.0, 1e-12, 12).unwrap();
        assert_relative_eq!(emi, 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(compute_installment(-100.0, 10.0, 12).unwrap_err().is_validation());
        assert!(compute_installment(0.0, 10.0, 12).unwrap_err().is_validation());
        assert!(compute_installment(100.0, -1.0, 12).unwrap_err().is_validation());
        assert!(compute_installment(100.0, 10.0, 0).unwrap_err().is_validation());
        assert!(compute_installment(f64::NAN, 10.0, 12).is_err());
    }
}
