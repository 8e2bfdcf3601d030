//! Schedule calculators.
//!
//! Every calculator turns its stored parameters into a summary figure and a
//! period-by-period table. Monetary figures placed in either are rounded to
//! two decimals with [`round_two_decimals`]; running balances are never
//! rounded, so rounding error does not compound across periods.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;
use crate::FinCalcResult;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "investment")]
pub mod investment;

/// Round to two decimal places, ties to even (banker's rounding).
///
/// The tie-break applies to the exact decimal value: `2.675` becomes `2.68`,
/// `2.665` becomes `2.66`.
pub fn round_two_decimals(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Common contract of the schedule calculators.
pub trait Calculator {
    /// One line of the generated table.
    type Row;

    /// Compute the rounded summary figure and the full period table.
    ///
    /// Pure in the stored parameters: repeated calls return identical results.
    fn calculate(&self) -> FinCalcResult<(Money, Vec<Self::Row>)>;

    fn round_two_decimals(value: Decimal) -> Decimal
    where
        Self: Sized,
    {
        round_two_decimals(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_two_decimals(dec!(2.675)), dec!(2.68));
        assert_eq!(round_two_decimals(dec!(2.665)), dec!(2.66));
        assert_eq!(round_two_decimals(dec!(0.125)), dec!(0.12));
        assert_eq!(round_two_decimals(dec!(0.135)), dec!(0.14));
        assert_eq!(round_two_decimals(dec!(-2.675)), dec!(-2.68));
    }

    #[test]
    fn test_round_non_ties() {
        assert_eq!(round_two_decimals(dec!(888.4878867)), dec!(888.49));
        assert_eq!(round_two_decimals(dec!(4.1666666)), dec!(4.17));
        assert_eq!(round_two_decimals(dec!(0.004)), Decimal::ZERO);
        assert_eq!(round_two_decimals(dec!(12)), dec!(12));
    }

    #[test]
    fn test_round_idempotent() {
        for x in [dec!(2.675), dec!(1051.161897), dec!(-0.005), dec!(0.0000001)] {
            let once = round_two_decimals(x);
            assert_eq!(round_two_decimals(once), once);
        }
    }
}
