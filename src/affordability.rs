//! Affordability classification of an installment against monthly income
//!
//! The installment-to-salary ratio falls into one of three bands:
//! - `VerySafe`: ratio <= 30%
//! - `Safe`: 30% < ratio <= 50%
//! - `NotAffordable`: ratio > 50%
//!
//! The band edges can be overridden through [`AffordabilityThresholds`].

use crate::error::{LoanError, Result};
use crate::loan::validate_salary;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default upper bound (inclusive) of the very safe band
pub const DEFAULT_VERY_SAFE_MAX: f64 = 0.30;

/// Default upper bound (inclusive) of the safe band
pub const DEFAULT_SAFE_MAX: f64 = 0.50;

/// Affordability band for an installment-to-salary ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AffordabilityBand {
    VerySafe,
    Safe,
    NotAffordable,
}

impl AffordabilityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffordabilityBand::VerySafe => "VERY SAFE",
            AffordabilityBand::Safe => "SAFE",
            AffordabilityBand::NotAffordable => "NOT AFFORDABLE",
        }
    }

    pub fn is_affordable(&self) -> bool {
        !matches!(self, AffordabilityBand::NotAffordable)
    }
}

impl fmt::Display for AffordabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band edges as fractions of monthly salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityThresholds {
    /// Ratios at or below this are very safe
    pub very_safe_max: f64,

    /// Ratios at or below this (and above `very_safe_max`) are safe
    pub safe_max: f64,
}

impl AffordabilityThresholds {
    pub fn new(very_safe_max: f64, safe_max: f64) -> Result<Self> {
        if !very_safe_max.is_finite() || very_safe_max <= 0.0 {
            return Err(LoanError::validation(
                "very_safe_max",
                format!("must be a positive ratio, got {}", very_safe_max),
            ));
        }
        if !safe_max.is_finite() || safe_max <= 0.0 {
            return Err(LoanError::validation(
                "safe_max",
                format!("must be a positive ratio, got {}", safe_max),
            ));
        }
        if very_safe_max > safe_max {
            return Err(LoanError::validation(
                "very_safe_max",
                format!("{} exceeds safe_max {}", very_safe_max, safe_max),
            ));
        }
        Ok(Self {
            very_safe_max,
            safe_max,
        })
    }

    /// Read thresholds from `LOAN_VERY_SAFE_MAX` and `LOAN_SAFE_MAX`,
    /// falling back to the defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let very_safe_max = env_ratio("LOAN_VERY_SAFE_MAX", DEFAULT_VERY_SAFE_MAX)?;
        let safe_max = env_ratio("LOAN_SAFE_MAX", DEFAULT_SAFE_MAX)?;
        Self::new(very_safe_max, safe_max)
    }

    pub fn band_for(&self, ratio: f64) -> AffordabilityBand {
        if ratio <= self.very_safe_max {
            AffordabilityBand::VerySafe
        } else if ratio <= self.safe_max {
            AffordabilityBand::Safe
        } else {
            AffordabilityBand::NotAffordable
        }
    }
}

impl Default for AffordabilityThresholds {
    fn default() -> Self {
        Self {
            very_safe_max: DEFAULT_VERY_SAFE_MAX,
            safe_max: DEFAULT_SAFE_MAX,
        }
    }
}

fn env_ratio(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            LoanError::validation(name, format!("not a number: {:?}", raw))
        }),
        Err(_) => Ok(default),
    }
}

/// Outcome of classifying an installment against a salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityVerdict {
    /// Installment divided by monthly salary (unrounded)
    pub ratio: f64,
    pub band: AffordabilityBand,
}

impl AffordabilityVerdict {
    /// Ratio expressed as a percentage, for display
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Classify an installment using the default 30% / 50% bands
pub fn classify(installment: f64, monthly_salary: f64) -> Result<AffordabilityVerdict> {
    classify_with(installment, monthly_salary, &AffordabilityThresholds::default())
}

/// Classify an installment using explicit band thresholds
pub fn classify_with(
    installment: f64,
    monthly_salary: f64,
    thresholds: &AffordabilityThresholds,
) -> Result<AffordabilityVerdict> {
    let monthly_salary = validate_salary(monthly_salary)?;
    if !installment.is_finite() || installment < 0.0 {
        return Err(LoanError::validation(
            "installment",
            format!("must be a non-negative amount, got {}", installment),
        ));
    }

    let ratio = installment / monthly_salary;
    Ok(AffordabilityVerdict {
        ratio,
        band: thresholds.band_for(ratio),
    })
}
