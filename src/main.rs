//! Loan amortization CLI
//!
//! Prints the monthly installment, the full schedule and totals, optionally
//! classifies affordability against a salary and exports the schedule as CSV.
//!
//! Affordability bands can be overridden with LOAN_VERY_SAFE_MAX and LOAN_SAFE_MAX.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use loan_amortization::{
    export_schedule, render_report, AffordabilityThresholds, LoanEvaluator, LoanParameters, Tenure,
};
use log::debug;
use std::path::PathBuf;
use std::process;

/// Loan amortization calculator
#[derive(Debug, Parser)]
#[command(
    name = "loan-calc",
    version,
    about = "Loan amortization calculator",
    group(ArgGroup::new("tenure").required(true).args(["years", "months"]))
)]
struct Cli {
    /// Loan principal amount
    #[arg(short, long, allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate (percent)
    #[arg(short, long, allow_negative_numbers = true)]
    rate: f64,

    /// Loan term in years (can be fractional)
    #[arg(long, allow_negative_numbers = true)]
    years: Option<f64>,

    /// Loan term in months
    #[arg(short, long)]
    months: Option<u32>,

    /// Monthly salary, to check affordability of the installment
    #[arg(short, long, allow_negative_numbers = true)]
    salary: Option<f64>,

    /// Optional output CSV file for the schedule
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print the evaluation as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!("{:?}", cli);

    let tenure = Tenure::from_options(cli.years, cli.months)?;
    let params = LoanParameters::new(cli.principal, cli.rate, tenure)?;
    let thresholds = AffordabilityThresholds::from_env()?;

    let evaluation = LoanEvaluator::with_thresholds(thresholds).evaluate(params, cli.salary)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", render_report(&evaluation));
    }

    if let Some(path) = &cli.csv {
        export_schedule(&evaluation.schedule, path)
            .with_context(|| format!("exporting schedule to {}", path.display()))?;
        if !cli.json {
            println!("Schedule written to {}", path.display());
        }
    }

    Ok(())
}
