//! Period-by-period amortization of a loan under the French (level payment),
//! German (level principal) and American (interest-only with balloon)
//! conventions. All arithmetic uses `rust_decimal::Decimal`.
//!
//! The final row of every convention retires the balance exactly: whatever
//! Decimal rounding left over is folded into that row's principal (and hence
//! its payment), so the last reported balance is zero and the cumulative
//! principal share is exactly one.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::params::{AmortizationType, LoanParams, PaymentRow};
use crate::error::AmortizationError;
use crate::time_value;
use crate::types::{Money, Rate};
use crate::AmortizationResult;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full payment schedule for `params`.
///
/// Produces `ceil(total_months * periods_per_year / 12)` rows numbered from 1.
/// A zero-length loan yields an empty schedule. Nonsensical but representable
/// inputs (negative amounts or rates, zero people) are not rejected; they
/// produce the arithmetically consistent schedule.
pub fn compute_schedule(params: &LoanParams) -> AmortizationResult<Vec<PaymentRow>> {
    let total_periods = u32::try_from(params.total_periods())
        .map_err(|_| AmortizationError::overflow("period count"))?;
    let rate = params.periodic_rate();

    debug!(
        method = %params.amortization_type,
        period = %params.payment_period,
        total_periods,
        periodic_rate = %rate,
        "computing amortization schedule"
    );

    if total_periods == 0 {
        return Ok(Vec::new());
    }

    match params.amortization_type {
        AmortizationType::French => french_schedule(params, total_periods, rate),
        AmortizationType::German => german_schedule(params, total_periods, rate),
        AmortizationType::American => american_schedule(params, total_periods, rate),
    }
}

// ---------------------------------------------------------------------------
// Conventions
// ---------------------------------------------------------------------------

fn french_schedule(
    params: &LoanParams,
    total_periods: u32,
    rate: Rate,
) -> AmortizationResult<Vec<PaymentRow>> {
    let level = time_value::level_payment(rate, total_periods, params.amount)?;
    trace!(payment = %level, "french level payment");

    let mut rows = Vec::with_capacity(total_periods as usize);
    let mut balance = params.amount;

    for number in 1..=total_periods {
        let interest = mul(balance, rate, "french interest")?;
        let (principal, payment) = if number == total_periods {
            (balance, add(balance, interest, "french final payment")?)
        } else {
            (sub(level, interest, "french principal")?, level)
        };
        balance = sub(balance, principal, "french balance")?;

        rows.push(build_row(params, number, payment, principal, interest, balance)?);
    }

    Ok(rows)
}

fn german_schedule(
    params: &LoanParams,
    total_periods: u32,
    rate: Rate,
) -> AmortizationResult<Vec<PaymentRow>> {
    let fixed_principal = params.amount / Decimal::from(total_periods);
    trace!(principal = %fixed_principal, "german fixed principal");

    let mut rows = Vec::with_capacity(total_periods as usize);
    let mut balance = params.amount;

    for number in 1..=total_periods {
        let interest = mul(balance, rate, "german interest")?;
        let principal = if number == total_periods {
            balance
        } else {
            fixed_principal
        };
        let payment = add(principal, interest, "german payment")?;
        balance = sub(balance, principal, "german balance")?;

        rows.push(build_row(params, number, payment, principal, interest, balance)?);
    }

    Ok(rows)
}

fn american_schedule(
    params: &LoanParams,
    total_periods: u32,
    rate: Rate,
) -> AmortizationResult<Vec<PaymentRow>> {
    let interest = mul(params.amount, rate, "american interest")?;
    let balloon = add(params.amount, interest, "american balloon")?;
    trace!(%interest, %balloon, "american interest-only schedule");

    let mut rows = Vec::with_capacity(total_periods as usize);

    for number in 1..total_periods {
        rows.push(build_row(
            params,
            number,
            interest,
            Decimal::ZERO,
            interest,
            params.amount,
        )?);
    }

    rows.push(build_row(
        params,
        total_periods,
        balloon,
        params.amount,
        interest,
        Decimal::ZERO,
    )?);

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Assemble a row. `balance` is the true running balance; the reported value
/// is floored at zero and drives the cumulative principal share.
fn build_row(
    params: &LoanParams,
    payment_number: u32,
    payment: Money,
    principal: Money,
    interest: Money,
    balance: Money,
) -> AmortizationResult<PaymentRow> {
    let remaining_balance = balance.max(Decimal::ZERO);
    let principal_paid_percentage = if params.amount.is_zero() {
        Decimal::ZERO
    } else {
        sub(params.amount, remaining_balance, "principal paid")?
            .checked_div(params.amount)
            .ok_or_else(|| AmortizationError::overflow("principal paid percentage"))?
    };

    Ok(PaymentRow {
        payment_number,
        payment,
        payment_per_person: params.per_person(payment),
        principal,
        interest,
        remaining_balance,
        principal_paid_percentage,
    })
}

fn mul(a: Decimal, b: Decimal, context: &str) -> AmortizationResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| AmortizationError::overflow(context))
}

fn add(a: Decimal, b: Decimal, context: &str) -> AmortizationResult<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| AmortizationError::overflow(context))
}

fn sub(a: Decimal, b: Decimal, context: &str) -> AmortizationResult<Decimal> {
    a.checked_sub(b)
        .ok_or_else(|| AmortizationError::overflow(context))
}
