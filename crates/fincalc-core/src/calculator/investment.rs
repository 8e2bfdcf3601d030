use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::Calculator;
use crate::error::FinCalcError;
use crate::time_value::compounded_value;
use crate::types::*;
use crate::FinCalcResult;

/// Compound interest growth request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentCalculator {
    /// Initial capital invested
    #[serde(alias = "principal")]
    pub capital: Money,
    /// Nominal annual interest rate
    #[serde(alias = "rate")]
    pub interest: Rate,
    /// Compounding periods per year
    #[serde(alias = "periods_per_year")]
    pub fee_number: u32,
    /// Investment horizon in years
    #[serde(alias = "years")]
    pub time: u32,
}

/// One year of the growth table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRow {
    pub period: u32,
    pub opening: Money,
    pub interest_earned: Money,
    pub closing: Money,
}

/// Output of a compound interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentScheduleOutput {
    pub final_value: Money,
    pub total_interest: Money,
    pub schedule: Vec<InvestmentRow>,
}

impl InvestmentCalculator {
    pub fn new(capital: Money, interest: Rate, fee_number: u32, time: u32) -> Self {
        Self {
            capital,
            interest,
            fee_number,
            time,
        }
    }

    /// One row per year. Each row applies the periodic rate `interest / fee_number`
    /// once, so the table does not reconcile with the closed-form summary when
    /// compounding more than once a year.
    fn growth_table(&self) -> FinCalcResult<Vec<InvestmentRow>> {
        if self.fee_number == 0 {
            return Err(FinCalcError::DivisionByZero {
                context: "investment table periodic rate".into(),
            });
        }
        let periodic_rate = self.interest / Decimal::from(self.fee_number);

        let mut table = Vec::with_capacity(self.time as usize + 1);
        table.push(InvestmentRow {
            period: 0,
            opening: self.capital,
            interest_earned: Decimal::ZERO,
            closing: self.capital,
        });

        let mut gained = self.capital;
        for period in 1..=self.time {
            let interest_item = gained * periodic_rate;
            gained += interest_item;

            log::trace!("investment year {period}: interest {interest_item}, capital {gained}");

            table.push(InvestmentRow {
                period,
                opening: Self::round_two_decimals(gained - interest_item),
                interest_earned: Self::round_two_decimals(interest_item),
                closing: Self::round_two_decimals(gained),
            });
        }

        Ok(table)
    }
}

impl Calculator for InvestmentCalculator {
    type Row = InvestmentRow;

    fn calculate(&self) -> FinCalcResult<(Money, Vec<InvestmentRow>)> {
        let rent = compounded_value(self.capital, self.interest, self.fee_number, self.time)?;
        Ok((Self::round_two_decimals(rent), self.growth_table()?))
    }
}

/// Project compound growth, wrapped in the standard envelope.
pub fn build_investment_schedule(
    calculator: &InvestmentCalculator,
) -> FinCalcResult<ComputationOutput<InvestmentScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let (final_value, schedule) = calculator.calculate()?;

    if calculator.fee_number > 1 && calculator.time > 0 {
        warnings.push(format!(
            "Table applies the periodic rate once per year; final_value compounds {} times per year and will not match the last closing balance",
            calculator.fee_number
        ));
    }

    let total_interest = final_value - InvestmentCalculator::round_two_decimals(calculator.capital);

    log::debug!(
        "investment schedule: capital {}, rate {}, {}x per year over {} years -> {final_value}",
        calculator.capital,
        calculator.interest,
        calculator.fee_number,
        calculator.time,
    );

    let output = InvestmentScheduleOutput {
        final_value,
        total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound Interest Growth",
        &serde_json::json!({
            "capital": calculator.capital.to_string(),
            "nominal_annual_rate": calculator.interest.to_string(),
            "compounding_per_year": calculator.fee_number,
            "years": calculator.time,
            "rounding": "2dp, half to even",
        }),
        warnings,
        elapsed,
        output,
    ))
}
