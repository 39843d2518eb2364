use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AmortizationError;
use crate::time_value;
use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Payment frequency
// ---------------------------------------------------------------------------

/// How often a payment falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentPeriod {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl PaymentPeriod {
    pub const ALL: [PaymentPeriod; 8] = [
        PaymentPeriod::Daily,
        PaymentPeriod::Weekly,
        PaymentPeriod::Biweekly,
        PaymentPeriod::Monthly,
        PaymentPeriod::Bimonthly,
        PaymentPeriod::Quarterly,
        PaymentPeriod::Semiannual,
        PaymentPeriod::Annual,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentPeriod::Daily => 365,
            PaymentPeriod::Weekly => 52,
            PaymentPeriod::Biweekly => 26,
            PaymentPeriod::Monthly => 12,
            PaymentPeriod::Bimonthly => 6,
            PaymentPeriod::Quarterly => 4,
            PaymentPeriod::Semiannual => 2,
            PaymentPeriod::Annual => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentPeriod::Daily => "daily",
            PaymentPeriod::Weekly => "weekly",
            PaymentPeriod::Biweekly => "biweekly",
            PaymentPeriod::Monthly => "monthly",
            PaymentPeriod::Bimonthly => "bimonthly",
            PaymentPeriod::Quarterly => "quarterly",
            PaymentPeriod::Semiannual => "semiannual",
            PaymentPeriod::Annual => "annual",
        }
    }
}

impl fmt::Display for PaymentPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentPeriod {
    type Err = AmortizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PaymentPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| AmortizationError::InvalidPeriod(s.to_string()))
    }
}

impl TryFrom<String> for PaymentPeriod {
    type Error = AmortizationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PaymentPeriod> for String {
    fn from(p: PaymentPeriod) -> Self {
        p.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Amortization convention
// ---------------------------------------------------------------------------

/// Repayment convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AmortizationType {
    /// Level total payment; interest share falls, principal share rises.
    French,
    /// Level principal; total payment falls as interest shrinks.
    German,
    /// Interest only, principal repaid as a balloon in the final period.
    American,
}

impl AmortizationType {
    pub fn as_str(self) -> &'static str {
        match self {
            AmortizationType::French => "french",
            AmortizationType::German => "german",
            AmortizationType::American => "american",
        }
    }
}

impl fmt::Display for AmortizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmortizationType {
    type Err = AmortizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "french" => Ok(AmortizationType::French),
            "german" => Ok(AmortizationType::German),
            "american" => Ok(AmortizationType::American),
            _ => Err(AmortizationError::InvalidAmortizationType(s.to_string())),
        }
    }
}

impl TryFrom<String> for AmortizationType {
    type Error = AmortizationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AmortizationType> for String {
    fn from(t: AmortizationType) -> Self {
        t.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Terms of the loan to amortize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    /// Principal borrowed.
    pub amount: Money,
    /// Annual interest rate in percent (6 = 6% a year).
    pub interest_rate: Decimal,
    pub years: u32,
    /// Extra months on top of `years`.
    pub months: u32,
    pub payment_period: PaymentPeriod,
    pub amortization_type: AmortizationType,
    /// Borrowers sharing the payments. Values above 1 add per-person figures.
    #[serde(default = "default_number_of_people")]
    pub number_of_people: u32,
}

fn default_number_of_people() -> u32 {
    1
}

impl LoanParams {
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }

    pub fn periods_per_year(&self) -> u32 {
        self.payment_period.periods_per_year()
    }

    /// ceil(total_months * periods_per_year / 12); one row per period.
    pub fn total_periods(&self) -> u64 {
        (self.total_months() * u64::from(self.periods_per_year())).div_ceil(12)
    }

    pub fn periodic_rate(&self) -> Rate {
        time_value::periodic_rate(self.interest_rate, self.periods_per_year())
    }

    /// `Some(value / number_of_people)` when the loan is shared.
    pub fn per_person(&self, value: Money) -> Option<Money> {
        (self.number_of_people > 1).then(|| value / Decimal::from(self.number_of_people))
    }
}

/// A single period in the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// 1-based period index.
    pub payment_number: u32,
    /// Total cash due this period.
    pub payment: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_per_person: Option<Money>,
    pub principal: Money,
    pub interest: Money,
    /// Balance after this payment, never reported below zero.
    pub remaining_balance: Money,
    /// Cumulative principal repaid as a fraction of the amount borrowed.
    pub principal_paid_percentage: Rate,
}
