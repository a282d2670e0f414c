//! One-call loan evaluation for front-ends
//!
//! Bundles the installment, the amortization schedule and, when a salary is
//! known, the affordability verdict.

use crate::affordability::{classify_with, AffordabilityThresholds, AffordabilityVerdict};
use crate::error::Result;
use crate::loan::LoanParameters;
use crate::schedule::{Schedule, ScheduleGenerator, ScheduleSummary};
use serde::Serialize;

/// Everything a front-end needs to render a loan
#[derive(Debug, Clone, Serialize)]
pub struct LoanEvaluation {
    pub params: LoanParameters,
    pub installment: f64,
    pub affordability: Option<AffordabilityVerdict>,
    pub summary: ScheduleSummary,
    pub schedule: Schedule,
}

/// Evaluates loans against a fixed set of affordability thresholds
#[derive(Debug, Clone, Default)]
pub struct LoanEvaluator {
    thresholds: AffordabilityThresholds,
}

impl LoanEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: AffordabilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AffordabilityThresholds {
        &self.thresholds
    }

    /// Generate the schedule and, if `monthly_salary` is given, classify the installment
    pub fn evaluate(&self, params: LoanParameters, monthly_salary: Option<f64>) -> Result<LoanEvaluation> {
        let schedule = ScheduleGenerator::new(params).generate()?;
        let installment = schedule.installment;

        let affordability = monthly_salary
            .map(|salary| classify_with(installment, salary, &self.thresholds))
            .transpose()?;

        Ok(LoanEvaluation {
            params,
            installment,
            affordability,
            summary: schedule.summary(),
            schedule,
        })
    }
}

/// Evaluate a loan against a monthly salary with the default thresholds
pub fn evaluate_loan(monthly_salary: f64, params: LoanParameters) -> Result<LoanEvaluation> {
    LoanEvaluator::new().evaluate(params, Some(monthly_salary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affordability::AffordabilityBand;
    use crate::loan::Tenure;

    fn default_loan() -> LoanParameters {
        LoanParameters::new(20_000_000.0, 10.0, Tenure::Years(10.0)).unwrap()
    }

    #[test]
    fn test_default_form_values() {
        let evaluation = evaluate_loan(2_000_000.0, default_loan()).unwrap();

        assert!((evaluation.installment - 264_301.47).abs() < 0.01);
        assert_eq!(evaluation.schedule.len(), 120);
        assert_eq!(evaluation.summary.final_balance, 0.0);

        let verdict = evaluation.affordability.unwrap();
        assert_eq!(verdict.band, AffordabilityBand::VerySafe);
        assert!((verdict.percentage() - 13.22).abs() < 0.01);
    }

    #[test]
    fn test_without_salary() {
        let evaluation = LoanEvaluator::new().evaluate(default_loan(), None).unwrap();
        assert!(evaluation.affordability.is_none());
        assert_eq!(evaluation.summary.months, 120);
    }

    #[test]
    fn test_custom_thresholds_applied() {
        let thresholds = AffordabilityThresholds::new(0.05, 0.10).unwrap();
        let evaluator = LoanEvaluator::with_thresholds(thresholds);
        let evaluation = evaluator.evaluate(default_loan(), Some(2_000_000.0)).unwrap();
        assert_eq!(
            evaluation.affordability.unwrap().band,
            AffordabilityBand::NotAffordable
        );
    }

    #[test]
    fn test_bad_salary_rejected() {
        let err = evaluate_loan(0.0, default_loan()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serializes_to_json() {
        let evaluation = evaluate_loan(2_000_000.0, default_loan()).unwrap();
        let value = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(value["affordability"]["band"], "VERY_SAFE");
        assert_eq!(value["schedule"]["payments"].as_array().unwrap().len(), 120);
        assert_eq!(value["params"]["months"], 120);
    }
}
