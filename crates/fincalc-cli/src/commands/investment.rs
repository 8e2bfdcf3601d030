use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::calculator::investment::{self, InvestmentCalculator};

use crate::input;

/// Arguments for a compound interest projection
#[derive(Args)]
pub struct InvestmentArgs {
    /// Initial capital
    #[arg(long, alias = "principal")]
    pub capital: Option<Decimal>,

    /// Nominal annual interest rate (e.g. 0.05 for 5%)
    #[arg(long, alias = "rate")]
    pub interest: Option<Decimal>,

    /// Compounding periods per year
    #[arg(long, alias = "periods-per-year")]
    pub fee_number: Option<u32>,

    /// Number of years
    #[arg(long, alias = "years")]
    pub time: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_investment(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let calculator: InvestmentCalculator = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin("investment")? {
        serde_json::from_value(data)?
    } else {
        InvestmentCalculator::new(
            args.capital
                .ok_or("--capital is required (or provide --input)")?,
            args.interest
                .ok_or("--interest is required (or provide --input)")?,
            args.fee_number
                .ok_or("--fee-number is required (or provide --input)")?,
            args.time.ok_or("--time is required (or provide --input)")?,
        )
    };

    let result = investment::build_investment_schedule(&calculator)?;
    Ok(serde_json::to_value(result)?)
}
