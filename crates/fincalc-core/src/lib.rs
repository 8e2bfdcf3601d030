pub mod calculator;
pub mod error;
pub mod math;
pub mod time_value;
pub mod types;

pub use calculator::{round_two_decimals, Calculator};
pub use error::FinCalcError;
pub use types::*;

#[cfg(feature = "loan")]
pub use calculator::loan::{build_loan_schedule, LoanCalculator, LoanRow, LoanScheduleOutput};

#[cfg(feature = "investment")]
pub use calculator::investment::{
    build_investment_schedule, InvestmentCalculator, InvestmentRow, InvestmentScheduleOutput,
};

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
