use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinCalcError;
use crate::FinCalcResult;

/// Tolerance below which a value is treated as exactly zero.
pub const ZERO_EPSILON: Decimal = dec!(0.000000001);

/// Raise `base` to `exponent`.
///
/// Integral exponents (including negative ones such as `(1 + r)^-n`) use
/// repeated multiplication and a final reciprocal.
/// Fractional exponents go through `exp(ln(base) * exponent)` and carry the
/// usual approximation error.
///
/// A negative exponent on a base larger than one in magnitude whose positive
/// power leaves the decimal range gives a result below the smallest
/// representable step, and returns zero. Only a positive power that overflows
/// is an error.
///
/// A zero base with a negative exponent returns zero rather than infinity.
/// Callers must not rely on that case.
pub fn power(base: Decimal, exponent: Decimal) -> FinCalcResult<Decimal> {
    match base.checked_powd(exponent) {
        Some(value) => Ok(value),
        None if exponent.is_sign_negative() && base.abs() > Decimal::ONE => Ok(Decimal::ZERO),
        None => Err(FinCalcError::Overflow {
            context: format!("power({base}, {exponent})"),
        }),
    }
}

/// Snap values within [`ZERO_EPSILON`] of zero to exactly zero.
pub fn zero_clamp(value: Decimal) -> Decimal {
    zero_clamp_with(value, ZERO_EPSILON)
}

/// Snap values within `epsilon` of zero to exactly zero.
pub fn zero_clamp_with(value: Decimal, epsilon: Decimal) -> Decimal {
    if value.abs() < epsilon {
        Decimal::ZERO
    } else {
        value
    }
}
