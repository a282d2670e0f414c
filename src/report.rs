//! Human-readable console report of a loan evaluation

use crate::evaluation::LoanEvaluation;
use std::fmt::Write;

/// Format an amount with thousands separators and two decimals (1,234,567.89)
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && fixed != "0.00";
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Render the summary block, the month-by-month table and the totals
pub fn render_report(evaluation: &LoanEvaluation) -> String {
    let mut out = String::new();
    let params = &evaluation.params;
    let summary = &evaluation.summary;

    // Writing into a String cannot fail
    let _ = writeln!(out, "Loan amount: {}", format_currency(params.principal));
    let _ = writeln!(out, "Annual rate: {}%", params.annual_rate_percent);
    let _ = writeln!(out, "Term: {} months", params.months);
    let _ = writeln!(out, "Monthly payment: {}", format_currency(evaluation.installment));
    if let Some(verdict) = &evaluation.affordability {
        let _ = writeln!(
            out,
            "Status: {} ({:.1}% of salary)",
            verdict.band,
            verdict.percentage()
        );
    }
    out.push('\n');

    let header = format!(
        "{:>5} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len()));
    for record in &evaluation.schedule {
        let _ = writeln!(
            out,
            "{:>5} {:>14} {:>14} {:>14} {:>16}",
            record.month,
            format_currency(record.payment),
            format_currency(record.interest),
            format_currency(record.principal),
            format_currency(record.balance),
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Total paid:     {}", format_currency(summary.total_paid));
    let _ = writeln!(out, "Total interest: {}", format_currency(summary.total_interest));
    out
}
