//! Running state of an amortization while the schedule is generated

/// Balance-tracking state between months
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current payment month (0 before the first payment)
    pub month: u32,

    /// Total number of payments in the schedule
    pub total_months: u32,

    /// Outstanding balance at the start of the current month
    pub balance: f64,

    /// Monthly fractional interest rate
    pub monthly_rate: f64,
}

impl AmortizationState {
    pub fn new(principal: f64, monthly_rate: f64, total_months: u32) -> Self {
        Self {
            month: 0,
            total_months,
            balance: principal,
            monthly_rate,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    pub fn is_final_month(&self) -> bool {
        self.month == self.total_months
    }

    /// Interest accrued on the opening balance this month
    pub fn interest_due(&self) -> f64 {
        if self.monthly_rate == 0.0 {
            0.0
        } else {
            self.balance * self.monthly_rate
        }
    }

    /// Reduce the balance by the principal repaid this month
    pub fn apply_principal(&mut self, principal_paid: f64) {
        self.balance -= principal_paid;
    }
}
