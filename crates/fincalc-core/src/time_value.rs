use rust_decimal::Decimal;

use crate::error::FinCalcError;
use crate::math::power;
use crate::types::{Money, Rate};
use crate::FinCalcResult;

/// Fixed periodic payment that amortizes `principal` over `num_periods`.
///
/// ```text
/// PMT = P * r / (1 - (1 + r)^-n)
/// ```
///
/// A zero rate or a zero period count makes the annuity factor vanish and
/// returns [`FinCalcError::DivisionByZero`].
pub fn loan_periodic_payment(
    principal: Money,
    rate_per_period: Rate,
    num_periods: u32,
) -> FinCalcResult<Money> {
    let discount = power(
        Decimal::ONE + rate_per_period,
        -Decimal::from(num_periods),
    )?;
    let annuity_factor = Decimal::ONE - discount;

    if annuity_factor.is_zero() {
        return Err(FinCalcError::DivisionByZero {
            context: format!(
                "loan payment annuity factor (rate {rate_per_period}, {num_periods} periods)"
            ),
        });
    }

    let numerator = principal
        .checked_mul(rate_per_period)
        .ok_or_else(|| FinCalcError::Overflow {
            context: "loan payment numerator".into(),
        })?;

    numerator
        .checked_div(annuity_factor)
        .ok_or_else(|| FinCalcError::Overflow {
            context: "loan payment".into(),
        })
}

/// Value of `principal` after compounding `periods_per_year` times a year
/// for `years` years at a nominal annual rate.
///
/// ```text
/// FV = P * (1 + i / m)^(m * t)
/// ```
pub fn compounded_value(
    principal: Money,
    nominal_annual_rate: Rate,
    periods_per_year: u32,
    years: u32,
) -> FinCalcResult<Money> {
    if periods_per_year == 0 {
        return Err(FinCalcError::DivisionByZero {
            context: "compounding periods per year".into(),
        });
    }

    let periodic_rate = nominal_annual_rate / Decimal::from(periods_per_year);
    let compounding_steps = u64::from(periods_per_year) * u64::from(years);
    let growth = power(
        Decimal::ONE + periodic_rate,
        Decimal::from(compounding_steps),
    )?;

    principal
        .checked_mul(growth)
        .ok_or_else(|| FinCalcError::Overflow {
            context: "compounded value".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_payment_basic() {
        // 10,000 at 1% per month over 12 months ≈ 888.49
        let pmt = loan_periodic_payment(dec!(10000), dec!(0.01), 12).unwrap();
        assert!((pmt - dec!(888.4879)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_loan_payment_single_period() {
        // One period: repay principal plus one period of interest
        let pmt = loan_periodic_payment(dec!(1000), dec!(0.05), 1).unwrap();
        assert!((pmt - dec!(1050)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_loan_payment_zero_rate() {
        let err = loan_periodic_payment(dec!(1000), Decimal::ZERO, 12).unwrap_err();
        assert!(matches!(err, FinCalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_loan_payment_zero_periods() {
        let err = loan_periodic_payment(dec!(1000), dec!(0.05), 0).unwrap_err();
        assert!(matches!(err, FinCalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_compounded_value_monthly() {
        // 1000 * (1 + 0.05/12)^12 ≈ 1051.1619
        let fv = compounded_value(dec!(1000), dec!(0.05), 12, 1).unwrap();
        assert!((fv - dec!(1051.1619)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_compounded_value_annual() {
        let fv = compounded_value(dec!(1000), dec!(0.10), 1, 2).unwrap();
        assert_eq!(fv, dec!(1210));
    }

    #[test]
    fn test_compounded_value_zero_years() {
        let fv = compounded_value(dec!(1000), dec!(0.05), 4, 0).unwrap();
        assert_eq!(fv, dec!(1000));
    }

    #[test]
    fn test_compounded_value_zero_periods() {
        let err = compounded_value(dec!(1000), dec!(0.05), 0, 5).unwrap_err();
        assert!(matches!(err, FinCalcError::DivisionByZero { .. }));
    }
}
