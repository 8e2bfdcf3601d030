use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinCalcError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_context() {
        let err = FinCalcError::DivisionByZero {
            context: "loan payment annuity factor".into(),
        };
        assert_eq!(err.to_string(), "Division by zero in loan payment annuity factor");

        let err = FinCalcError::Overflow {
            context: "compounded value".into(),
        };
        assert_eq!(err.to_string(), "Arithmetic overflow in compounded value");
    }
}
