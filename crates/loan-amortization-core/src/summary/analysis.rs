use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::warn;

use super::totals::{summarize_schedule, LoanSummary};
use crate::schedule::{compute_schedule, AmortizationType, LoanParams, PaymentRow};
use crate::types::ComputationOutput;
use crate::AmortizationResult;

/// Schedule plus its summary, as returned by [`analyze_loan`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub summary: LoanSummary,
    pub schedule: Vec<PaymentRow>,
}

/// Compute the schedule and its totals, wrapped with methodology and
/// warnings for inputs the engine accepts but a caller probably did not mean.
pub fn analyze_loan(params: &LoanParams) -> AmortizationResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();
    let warnings = input_warnings(params);
    for w in &warnings {
        warn!("{w}");
    }

    let schedule = compute_schedule(params)?;
    let summary = summarize_schedule(params, &schedule)?;

    ComputationOutput::wrap(
        LoanAnalysis { summary, schedule },
        methodology(params.amortization_type),
        params,
        warnings,
        start,
    )
}

fn methodology(method: AmortizationType) -> &'static str {
    match method {
        AmortizationType::French => "French amortization: level payment (annuity), declining interest",
        AmortizationType::German => "German amortization: level principal, declining payment",
        AmortizationType::American => "American amortization: interest-only with balloon principal at maturity",
    }
}

fn input_warnings(params: &LoanParams) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.amount <= Decimal::ZERO {
        warnings.push(format!(
            "Loan amount {} is not positive; schedule figures are not meaningful",
            params.amount
        ));
    }
    if params.interest_rate < Decimal::ZERO {
        warnings.push(format!(
            "Negative interest rate {}%: interest is credited to the borrower",
            params.interest_rate
        ));
    }
    if params.number_of_people == 0 {
        warnings.push("number_of_people is 0; per-person figures omitted".into());
    }
    if params.total_periods() == 0 {
        warnings.push("Loan duration is zero; schedule is empty".into());
    }

    warnings
}
