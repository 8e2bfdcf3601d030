use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::calculator::loan::{self, LoanCalculator};

use crate::input;

/// Arguments for a loan amortization schedule
#[derive(Args)]
pub struct LoanArgs {
    /// Principal borrowed
    #[arg(long, alias = "principal")]
    pub acquired: Option<Decimal>,

    /// Interest rate per payment period (e.g. 0.01 for 1% a month)
    #[arg(long, alias = "rate")]
    pub interest: Option<Decimal>,

    /// Number of payment periods
    #[arg(long, alias = "periods")]
    pub fee_number: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let calculator: LoanCalculator = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin("loan")? {
        serde_json::from_value(data)?
    } else {
        LoanCalculator::new(
            args.acquired
                .ok_or("--acquired is required (or provide --input)")?,
            args.interest
                .ok_or("--interest is required (or provide --input)")?,
            args.fee_number
                .ok_or("--fee-number is required (or provide --input)")?,
        )
    };

    let result = loan::build_loan_schedule(&calculator)?;
    Ok(serde_json::to_value(result)?)
}
