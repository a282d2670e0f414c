//! Payment record and schedule output structures

use serde::{Deserialize, Serialize};

/// A single month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment number (1-indexed, contiguous)
    pub month: u32,

    /// Amount paid this month
    pub payment: f64,

    /// Portion of the payment charged as interest
    pub interest: f64,

    /// Portion of the payment that reduces the balance
    pub principal: f64,

    /// Outstanding balance after this payment
    pub balance: f64,
}

impl PaymentRecord {
    pub fn new(month: u32, payment: f64, interest: f64, principal: f64, balance: f64) -> Self {
        Self {
            month,
            payment,
            interest,
            principal,
            balance,
        }
    }
}

/// Complete amortization schedule for one set of loan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Fixed installment before any final-month correction
    pub installment: f64,

    /// Monthly records in chronological order
    pub payments: Vec<PaymentRecord>,
}

impl Schedule {
    pub fn new(principal: f64, annual_rate_percent: f64, installment: f64, months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            installment,
            payments: Vec::with_capacity(months as usize),
        }
    }

    pub fn add_payment(&mut self, record: PaymentRecord) {
        self.payments.push(record);
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRecord> {
        self.payments.iter()
    }

    /// Record for a 1-indexed month, if within the schedule
    pub fn get(&self, month: u32) -> Option<&PaymentRecord> {
        let idx = (month as usize).checked_sub(1)?;
        self.payments.get(idx)
    }

    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.payment).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.payments.iter().map(|p| p.interest).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            months: self.payments.len() as u32,
            installment: self.installment,
            total_paid: self.total_paid(),
            total_interest: self.total_interest(),
            final_balance: self.payments.last().map(|p| p.balance).unwrap_or(self.principal),
        }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PaymentRecord;
    type IntoIter = std::slice::Iter<'a, PaymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.iter()
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months: u32,
    pub installment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}
