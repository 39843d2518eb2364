use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::schedule::{LoanParams, PaymentRow};
use crate::types::{Money, Rate};
use crate::AmortizationResult;

/// Aggregate figures over a computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub total_payments: u32,
    pub loan_amount: Money,
    /// Sum of every payment in the schedule.
    pub total_amount_paid: Money,
    /// Total paid over and above the amount borrowed.
    pub total_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_per_person: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_interest_per_person: Option<Money>,
    /// Fraction of the total paid that repays principal.
    pub principal_share: Rate,
    /// Fraction of the total paid that is interest.
    pub interest_share: Rate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment: Option<Money>,
}

/// Summarize `rows`, a schedule previously computed for `params`.
///
/// Totals can leave Decimal range even when every row fits (a loan near
/// 7.9e28 repaid over many periods); that is reported as
/// `ArithmeticOverflow`.
pub fn summarize_schedule(
    params: &LoanParams,
    rows: &[PaymentRow],
) -> AmortizationResult<LoanSummary> {
    let total_amount_paid: Money = rows
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.payment))
        .ok_or_else(|| AmortizationError::overflow("total amount paid"))?;
    let total_interest = total_amount_paid
        .checked_sub(params.amount)
        .ok_or_else(|| AmortizationError::overflow("total interest"))?;

    let (principal_share, interest_share) = if total_amount_paid.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let interest_share = total_interest
            .checked_div(total_amount_paid)
            .ok_or_else(|| AmortizationError::overflow("interest share"))?;
        let principal_share = Decimal::ONE
            .checked_sub(interest_share)
            .ok_or_else(|| AmortizationError::overflow("principal share"))?;
        (principal_share, interest_share)
    };

    Ok(LoanSummary {
        total_payments: rows.len() as u32,
        loan_amount: params.amount,
        total_amount_paid,
        total_interest,
        total_amount_per_person: params.per_person(total_amount_paid),
        total_interest_per_person: params.per_person(total_interest),
        principal_share,
        interest_share,
        first_payment: rows.first().map(|r| r.payment),
        last_payment: rows.last().map(|r| r.payment),
    })
}
