//! Rate conversion and level-payment (annuity) arithmetic shared by the
//! schedule engine.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::AmortizationError;
use crate::types::{Money, Rate};
use crate::AmortizationResult;

const PERCENT: Decimal = dec!(100);

/// Convert an annual rate quoted in percent (6 = 6%) into the rate charged
/// per payment period.
pub fn periodic_rate(annual_rate_pct: Decimal, periods_per_year: u32) -> Rate {
    if periods_per_year == 0 {
        return Decimal::ZERO;
    }
    annual_rate_pct / PERCENT / Decimal::from(periods_per_year)
}

/// (1 + rate)^nper
pub fn compound_factor(rate: Rate, nper: u32) -> AmortizationResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(nper))
        .ok_or_else(|| AmortizationError::overflow(format!("compound factor (1 + {rate})^{nper}")))
}

/// Level payment that retires `principal` over `nper` periods at `rate`:
///
///   P * r * (1+r)^n / ((1+r)^n - 1)
///
/// evaluated as P * (r * g / (g - 1)) with g = (1+r)^n so that only a payment
/// that is itself out of Decimal range fails. When g overflows, 1/g is below
/// Decimal resolution and the payment is the interest-only limit P * r.
/// At r = 0 the expression is 0/0; the limit is P / n. The same fallback
/// applies when r is so small that (1+r)^n rounds to exactly 1.
/// Returns zero when there are no periods.
pub fn level_payment(rate: Rate, nper: u32, principal: Money) -> AmortizationResult<Money> {
    if nper == 0 {
        return Ok(Decimal::ZERO);
    }

    let n = Decimal::from(nper);
    if rate.is_zero() {
        return Ok(principal / n);
    }

    let payment_rate = match compound_factor(rate, nper) {
        Ok(growth) => {
            let annuity_factor = growth - Decimal::ONE;
            if annuity_factor.is_zero() {
                return Ok(principal / n);
            }
            growth
                .checked_div(annuity_factor)
                .and_then(|f| f.checked_mul(rate))
                .ok_or_else(|| AmortizationError::overflow("level payment rate"))?
        }
        Err(_) => rate,
    };

    principal
        .checked_mul(payment_rate)
        .ok_or_else(|| AmortizationError::overflow("level payment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periodic_rate_monthly() {
        assert_eq!(periodic_rate(dec!(6), 12), dec!(0.005));
    }

    #[test]
    fn test_periodic_rate_no_periods() {
        assert_eq!(periodic_rate(dec!(6), 0), Decimal::ZERO);
    }

    #[test]
    fn test_level_payment_standard_mortgage() {
        // 100k at 0.5% per month over 120 months: ~1110.205
        let pmt = level_payment(dec!(0.005), 120, dec!(100_000)).unwrap();
        assert!((pmt - dec!(1110.205)).abs() < dec!(0.001), "got {pmt}");
    }

    #[test]
    fn test_level_payment_zero_rate() {
        let pmt = level_payment(Decimal::ZERO, 12, dec!(1200)).unwrap();
        assert_eq!(pmt, dec!(100));
    }

    #[test]
    fn test_level_payment_single_period() {
        // One period: principal plus one period of interest
        let pmt = level_payment(dec!(0.01), 1, dec!(1000)).unwrap();
        assert!((pmt - dec!(1010)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_level_payment_no_periods() {
        assert_eq!(level_payment(dec!(0.01), 0, dec!(1000)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_compound_factor_overflow() {
        let err = compound_factor(dec!(1000), 1000).unwrap_err();
        assert!(matches!(err, AmortizationError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn test_level_payment_survives_compound_overflow() {
        // 300% a year paid daily for 30 years: (1+r)^n overflows but the
        // payment is just the per-period interest on the principal
        let rate = periodic_rate(dec!(300), 365);
        assert!(compound_factor(rate, 10_950).is_err());
        let pmt = level_payment(rate, 10_950, dec!(100_000)).unwrap();
        assert_eq!(pmt, dec!(100_000) * rate);
    }

    #[test]
    fn test_level_payment_out_of_range() {
        // One annual period at 100%: 7e28 * 2 does not fit
        let err = level_payment(Decimal::ONE, 1, dec!(70_000_000_000_000_000_000_000_000_000))
            .unwrap_err();
        assert!(matches!(err, AmortizationError::ArithmeticOverflow { .. }));
    }
}
