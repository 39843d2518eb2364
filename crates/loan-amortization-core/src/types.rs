use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::AmortizationResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and fractions as decimals (0.005 = 0.5% per period). Annual rates
/// entered by callers in percent are converted in `time_value::periodic_rate`.
pub type Rate = Decimal;

/// Envelope around an analysis result: what was computed, from which inputs,
/// and anything the caller should double-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

impl<T: Serialize> ComputationOutput<T> {
    /// Wrap `result`, echoing `assumptions` back and timing from `started`.
    pub fn wrap(
        result: T,
        methodology: impl Into<String>,
        assumptions: &impl Serialize,
        warnings: Vec<String>,
        started: Instant,
    ) -> AmortizationResult<Self> {
        Ok(ComputationOutput {
            result,
            methodology: methodology.into(),
            assumptions: serde_json::to_value(assumptions)?,
            warnings,
            metadata: ComputationMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                computation_time_us: started.elapsed().as_micros() as u64,
                precision: "rust_decimal_128bit".to_string(),
            },
        })
    }
}
