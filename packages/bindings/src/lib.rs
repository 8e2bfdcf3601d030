use napi::Result as NapiResult;
use napi_derive::napi;

use fincalc_core::{InvestmentCalculator, LoanCalculator};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanCalculator = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::build_loan_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

#[napi]
pub fn investment_schedule(input_json: String) -> NapiResult<String> {
    let input: InvestmentCalculator =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::build_investment_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
