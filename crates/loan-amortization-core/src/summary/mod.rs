pub mod analysis;
pub mod totals;

pub use analysis::{analyze_loan, LoanAnalysis};
pub use totals::{summarize_schedule, LoanSummary};
