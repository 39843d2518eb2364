use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmortizationError {
    #[error("Invalid payment period: '{0}' (expected daily, weekly, biweekly, monthly, bimonthly, quarterly, semiannual or annual)")]
    InvalidPeriod(String),

    #[error("Invalid amortization type: '{0}' (expected french, german or american)")]
    InvalidAmortizationType(String),

    #[error("Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AmortizationError {
    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        AmortizationError::ArithmeticOverflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for AmortizationError {
    fn from(e: serde_json::Error) -> Self {
        AmortizationError::SerializationError(e.to_string())
    }
}
