use loan_amortization_core::schedule::{
    compute_schedule, AmortizationType, LoanParams, PaymentPeriod,
};
use loan_amortization_core::summary::analyze_loan;
use loan_amortization_core::AmortizationError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const METHODS: [AmortizationType; 3] = [
    AmortizationType::French,
    AmortizationType::German,
    AmortizationType::American,
];

fn loan_params() -> impl Strategy<Value = LoanParams> {
    (
        1_000u64..5_000_000,
        0i64..=2_000,
        0u32..=30,
        0u32..12,
        0usize..PaymentPeriod::ALL.len(),
        0usize..METHODS.len(),
        1u32..=5,
    )
        .prop_map(
            |(amount, rate_bps, years, months, period, method, people)| LoanParams {
                amount: Decimal::from(amount),
                // 0.00% .. 20.00% a year
                interest_rate: Decimal::new(rate_bps, 2),
                years,
                months,
                payment_period: PaymentPeriod::ALL[period],
                amortization_type: METHODS[method],
                number_of_people: people,
            },
        )
}

/// Loans near the top of Decimal range (up to 1e28) at rates up to 900% a year.
fn extreme_loan_params() -> impl Strategy<Value = LoanParams> {
    (
        1u64..=1_000_000_000,
        0u32..=19,
        0i64..=90_000,
        0u32..=30,
        0u32..12,
        0usize..PaymentPeriod::ALL.len(),
        0usize..METHODS.len(),
        1u32..=3,
    )
        .prop_map(
            |(mantissa, exponent, rate_bps, years, months, period, method, people)| LoanParams {
                amount: Decimal::from_i128_with_scale(
                    i128::from(mantissa) * 10i128.pow(exponent),
                    0,
                ),
                interest_rate: Decimal::new(rate_bps, 2),
                years,
                months,
                payment_period: PaymentPeriod::ALL[period],
                amortization_type: METHODS[method],
                number_of_people: people,
            },
        )
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= dec!(0.000001) * b.abs().max(Decimal::ONE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn row_count_matches_period_arithmetic(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        let months = u64::from(params.years) * 12 + u64::from(params.months);
        let expected = (months * u64::from(params.payment_period.periods_per_year()) + 11) / 12;
        prop_assert_eq!(rows.len() as u64, expected);
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.payment_number as usize, i + 1);
        }
    }

    #[test]
    fn balance_never_increases(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        match params.amortization_type {
            AmortizationType::American => {
                if let Some((last, rest)) = rows.split_last() {
                    prop_assert!(rest.iter().all(|r| r.remaining_balance == params.amount));
                    prop_assert_eq!(last.remaining_balance, Decimal::ZERO);
                }
            }
            _ => {
                prop_assert!(rows.iter().all(|r| r.remaining_balance <= params.amount));
                for w in rows.windows(2) {
                    prop_assert!(w[1].remaining_balance <= w[0].remaining_balance);
                }
            }
        }
    }

    #[test]
    fn payment_splits_into_principal_and_interest(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        for row in &rows {
            prop_assert!(
                close(row.principal + row.interest, row.payment),
                "row {}: {} + {} != {}",
                row.payment_number, row.principal, row.interest, row.payment
            );
        }
    }

    #[test]
    fn schedule_ends_fully_repaid(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        if let Some(last) = rows.last() {
            prop_assert_eq!(last.remaining_balance, Decimal::ZERO);
            prop_assert_eq!(last.principal_paid_percentage, Decimal::ONE);
        }
        let repaid: Decimal = rows.iter().map(|r| r.principal).sum();
        if !rows.is_empty() {
            prop_assert!(close(repaid, params.amount));
        }
    }

    #[test]
    fn principal_share_is_monotone_within_bounds(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        for row in &rows {
            prop_assert!(row.principal_paid_percentage >= Decimal::ZERO);
            prop_assert!(row.principal_paid_percentage <= Decimal::ONE);
        }
        for w in rows.windows(2) {
            prop_assert!(w[1].principal_paid_percentage >= w[0].principal_paid_percentage);
        }
    }

    #[test]
    fn per_person_present_only_when_shared(params in loan_params()) {
        let rows = compute_schedule(&params).unwrap();
        let people = Decimal::from(params.number_of_people);
        for row in &rows {
            if params.number_of_people > 1 {
                prop_assert_eq!(row.payment_per_person, Some(row.payment / people));
            } else {
                prop_assert_eq!(row.payment_per_person, None);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn extreme_loans_never_panic(params in extreme_loan_params()) {
        // No row can exceed amount * (1 + r); with headroom for rounding the
        // schedule must then be computable for every method
        let largest_payment = params
            .amount
            .checked_mul(Decimal::ONE + params.periodic_rate())
            .and_then(|p| p.checked_mul(dec!(2)));

        match compute_schedule(&params) {
            Ok(rows) => {
                if let Some(last) = rows.last() {
                    prop_assert_eq!(last.remaining_balance, Decimal::ZERO);
                }
            }
            Err(err) => {
                prop_assert!(largest_payment.is_none(), "unexpected error: {}", err);
                let is_overflow = matches!(err, AmortizationError::ArithmeticOverflow { .. });
                prop_assert!(is_overflow);
            }
        }

        // Totals may leave Decimal range even when every row fits
        if let Err(err) = analyze_loan(&params) {
            prop_assert!(matches!(err, AmortizationError::ArithmeticOverflow { .. }), "{}", err);
        }
    }
}
