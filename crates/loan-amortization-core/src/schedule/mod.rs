pub mod engine;
pub mod params;

pub use engine::compute_schedule;
pub use params::{AmortizationType, LoanParams, PaymentPeriod, PaymentRow};
