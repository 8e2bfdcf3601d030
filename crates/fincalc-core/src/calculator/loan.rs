use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::Calculator;
use crate::math::zero_clamp;
use crate::time_value::loan_periodic_payment;
use crate::types::*;
use crate::FinCalcResult;

/// Fixed-payment loan amortization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculator {
    /// Principal borrowed
    #[serde(alias = "principal")]
    pub acquired: Money,
    /// Interest rate per payment period (0.01 = 1% per period)
    #[serde(alias = "rate")]
    pub interest: Rate,
    /// Number of payment periods
    #[serde(alias = "periods")]
    pub fee_number: u32,
}

/// A single installment of the amortization table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRow {
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
}

/// Output of a full loan amortization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScheduleOutput {
    pub payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    pub schedule: Vec<LoanRow>,
}

impl LoanCalculator {
    pub fn new(acquired: Money, interest: Rate, fee_number: u32) -> Self {
        Self {
            acquired,
            interest,
            fee_number,
        }
    }

    /// Expand the payment into one row per period, preceded by the opening row.
    fn amortization_table(&self, rent: Money) -> Vec<LoanRow> {
        let mut table = Vec::with_capacity(self.fee_number as usize + 1);
        table.push(LoanRow {
            period: 0,
            payment: Decimal::ZERO,
            interest: Decimal::ZERO,
            principal: Decimal::ZERO,
            balance: self.acquired,
        });

        let mut residue = self.acquired;
        for period in 1..=self.fee_number {
            let interest_item = residue * self.interest;
            let principal_item = rent - interest_item;
            residue -= principal_item;

            log::trace!("loan period {period}: interest {interest_item}, residue {residue}");

            table.push(LoanRow {
                period,
                payment: Self::round_two_decimals(rent),
                interest: Self::round_two_decimals(interest_item),
                principal: Self::round_two_decimals(principal_item),
                balance: Self::round_two_decimals(zero_clamp(residue)),
            });
        }

        table
    }
}

impl Calculator for LoanCalculator {
    type Row = LoanRow;

    fn calculate(&self) -> FinCalcResult<(Money, Vec<LoanRow>)> {
        let rent = loan_periodic_payment(self.acquired, self.interest, self.fee_number)?;
        Ok((Self::round_two_decimals(rent), self.amortization_table(rent)))
    }
}

/// Build the amortization schedule with totals, wrapped in the standard envelope.
pub fn build_loan_schedule(
    calculator: &LoanCalculator,
) -> FinCalcResult<ComputationOutput<LoanScheduleOutput>> {
    let start = Instant::now();

    let (payment, schedule) = calculator.calculate()?;

    let (total_paid, total_interest, total_principal) = schedule
        .iter()
        .skip(1)
        .fold((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO), |acc, row| {
            (acc.0 + row.payment, acc.1 + row.interest, acc.2 + row.principal)
        });

    log::debug!(
        "loan schedule: acquired {}, rate {}, {} periods -> payment {payment}",
        calculator.acquired,
        calculator.interest,
        calculator.fee_number,
    );

    let output = LoanScheduleOutput {
        payment,
        total_paid,
        total_interest,
        total_principal,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Payment Loan Amortization",
        &serde_json::json!({
            "acquired": calculator.acquired.to_string(),
            "interest_per_period": calculator.interest.to_string(),
            "fee_number": calculator.fee_number,
            "rounding": "2dp, half to even",
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
