pub mod aggregate;
pub mod classify;
pub mod exec;
pub mod format;
pub mod normalize;
pub mod output;

pub use aggregate::{aggregate, is_valid_date};
pub use classify::{NoiseReason, Verdict};
pub use format::format_report;
pub use normalize::normalize;

use crate::config::NoiseRules;
use crate::model::CommitRecord;

/// Full pipeline from parsed records to report text.
pub fn build_report(records: &[CommitRecord], rules: &NoiseRules, window: Option<usize>) -> String {
    format_report(&aggregate(records, rules, window))
}
