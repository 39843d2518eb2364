use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use loan_amortization_core::schedule::{self, AmortizationType, LoanParams, PaymentPeriod};
use loan_amortization_core::summary;

use crate::input;

/// Loan terms, given as flags or as a JSON `LoanParams` object on stdin
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Principal borrowed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (6 = 6%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Whole years of the loan term
    #[arg(long, default_value_t = 0)]
    pub years: u32,

    /// Additional months of the loan term
    #[arg(long, default_value_t = 0)]
    pub months: u32,

    /// Payment frequency: daily, weekly, biweekly, monthly, bimonthly,
    /// quarterly, semiannual, annual
    #[arg(long, default_value = "monthly")]
    pub period: String,

    /// Amortization convention: french, german, american
    #[arg(long, alias = "type", default_value = "french")]
    pub method: String,

    /// Number of people sharing the payments
    #[arg(long, default_value_t = 1)]
    pub people: u32,
}

impl LoanArgs {
    fn into_params(self) -> Result<LoanParams, Box<dyn std::error::Error>> {
        if let Some(params) = input::stdin::read_stdin::<LoanParams>()? {
            debug!("loan terms read from stdin");
            return Ok(params);
        }
        self.params_from_flags()
    }

    fn params_from_flags(self) -> Result<LoanParams, Box<dyn std::error::Error>> {
        Ok(LoanParams {
            amount: self
                .amount
                .ok_or("--amount is required (or pipe loan terms as JSON)")?,
            interest_rate: self
                .interest_rate
                .ok_or("--interest-rate is required (or pipe loan terms as JSON)")?,
            years: self.years,
            months: self.months,
            payment_period: self.period.parse::<PaymentPeriod>()?,
            amortization_type: self.method.parse::<AmortizationType>()?,
            number_of_people: self.people,
        })
    }
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.into_params()?;
    let rows = schedule::compute_schedule(&params)?;
    Ok(serde_json::to_value(rows)?)
}

pub fn run_summary(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.into_params()?;
    let result = summary::analyze_loan(&params)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_amortization_core::AmortizationError;
    use rust_decimal::Decimal;

    fn flags() -> LoanArgs {
        LoanArgs {
            amount: Some(Decimal::from(100_000)),
            interest_rate: Some(Decimal::from(6)),
            years: 10,
            months: 0,
            period: "monthly".into(),
            method: "german".into(),
            people: 2,
        }
    }

    #[test]
    fn test_flags_become_params() {
        let params = flags().params_from_flags().unwrap();
        assert_eq!(params.payment_period, PaymentPeriod::Monthly);
        assert_eq!(params.amortization_type, AmortizationType::German);
        assert_eq!(params.number_of_people, 2);
        assert_eq!(params.total_periods(), 120);
    }

    #[test]
    fn test_bad_period_flag_is_invalid_period() {
        let args = LoanArgs {
            period: "fortnightly".into(),
            ..flags()
        };
        let err = args.params_from_flags().unwrap_err();
        let err = err
            .downcast_ref::<AmortizationError>()
            .expect("amortization error");
        assert!(matches!(err, AmortizationError::InvalidPeriod(p) if p == "fortnightly"));
    }

    #[test]
    fn test_bad_method_flag_is_rejected() {
        let args = LoanArgs {
            method: "balloon".into(),
            ..flags()
        };
        let err = args.params_from_flags().unwrap_err();
        assert!(err.to_string().contains("Invalid amortization type"), "{err}");
    }

    #[test]
    fn test_missing_amount_names_the_flag() {
        let args = LoanArgs {
            amount: None,
            ..flags()
        };
        let err = args.params_from_flags().unwrap_err();
        assert_eq!(
            err.to_string(),
            "--amount is required (or pipe loan terms as JSON)"
        );
    }
}
