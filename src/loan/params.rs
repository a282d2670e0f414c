//! Loan parameter types and input validation

use crate::error::{LoanError, Result};
use serde::{Deserialize, Serialize};

/// Months per year, used for both rate conversion and tenure conversion
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Repayment duration of a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tenure {
    /// Explicit whole number of months
    Months(u32),
    /// Year count, fractional allowed; rounded to the nearest whole month
    Years(f64),
}

impl Tenure {
    /// Resolve the tenure to a month count (always >= 1)
    pub fn to_months(&self) -> Result<u32> {
        match *self {
            Tenure::Months(months) => validate_months(months),
            Tenure::Years(years) => {
                if !years.is_finite() || years <= 0.0 {
                    return Err(LoanError::validation(
                        "years",
                        format!("must be a positive number, got {}", years),
                    ));
                }
                let months = (years * MONTHS_PER_YEAR).round();
                if months < 1.0 {
                    return Err(LoanError::validation(
                        "years",
                        format!("{} years rounds to zero months", years),
                    ));
                }
                if months > u32::MAX as f64 {
                    return Err(LoanError::validation(
                        "years",
                        format!("{} years is too long a tenure", years),
                    ));
                }
                Ok(months as u32)
            }
        }
    }

    /// Build a tenure from two mutually exclusive optional inputs
    ///
    /// Exactly one of `years` or `months` must be supplied.
    pub fn from_options(years: Option<f64>, months: Option<u32>) -> Result<Self> {
        match (years, months) {
            (Some(years), None) => Ok(Tenure::Years(years)),
            (None, Some(months)) => Ok(Tenure::Months(months)),
            (Some(_), Some(_)) => Err(LoanError::validation(
                "tenure",
                "specify either years or months, not both",
            )),
            (None, None) => Err(LoanError::validation(
                "tenure",
                "one of years or months is required",
            )),
        }
    }
}

/// Inputs to a single amortization calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent (10.0 = 10%)
    pub annual_rate_percent: f64,

    /// Tenure resolved to whole months
    pub months: u32,
}

impl LoanParameters {
    /// Create validated loan parameters
    pub fn new(principal: f64, annual_rate_percent: f64, tenure: Tenure) -> Result<Self> {
        Ok(Self {
            principal: validate_principal(principal)?,
            annual_rate_percent: validate_rate(annual_rate_percent)?,
            months: tenure.to_months()?,
        })
    }

    /// Monthly fractional rate (10% annual -> 0.008333...)
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }
}

/// Convert an annual percentage rate to a monthly fractional rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / MONTHS_PER_YEAR / 100.0
}

pub fn validate_principal(principal: f64) -> Result<f64> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(LoanError::validation(
            "principal",
            format!("must be a positive amount, got {}", principal),
        ));
    }
    Ok(principal)
}

pub fn validate_rate(annual_rate_percent: f64) -> Result<f64> {
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(LoanError::validation(
            "rate",
            format!("must be zero or positive, got {}", annual_rate_percent),
        ));
    }
    Ok(annual_rate_percent)
}

pub fn validate_months(months: u32) -> Result<u32> {
    if months < 1 {
        return Err(LoanError::validation("months", "must be at least 1"));
    }
    Ok(months)
}

pub fn validate_salary(monthly_salary: f64) -> Result<f64> {
    if !monthly_salary.is_finite() || monthly_salary <= 0.0 {
        return Err(LoanError::validation(
            "salary",
            format!("must be a positive amount, got {}", monthly_salary),
        ));
    }
    Ok(monthly_salary)
}
