//! Loan input types and validation

mod params;

pub use params::{
    monthly_rate, validate_months, validate_principal, validate_rate, validate_salary,
    LoanParameters, Tenure, MONTHS_PER_YEAR,
};
